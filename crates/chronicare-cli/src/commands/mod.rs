//! Command implementations.

pub mod assess;
pub mod evaluate;
pub mod fields;
pub mod plan;

pub use self::assess::execute_assess;
pub use self::evaluate::execute_evaluate;
pub use self::fields::execute_fields;
pub use self::plan::execute_plan;
