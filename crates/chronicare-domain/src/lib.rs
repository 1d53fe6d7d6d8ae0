//! Chronicare Domain Layer
//!
//! This crate contains the rule core for Chronicare: the risk classifier for
//! four chronic conditions and the recommendation composer that turns a set
//! of assessed tiers into a unified care plan. Everything here is a pure
//! function of its inputs; input collection, range handling and rendering
//! live in the presentation layer (`chronicare-cli`).
//!
//! ## Key Concepts
//!
//! - **Condition**: One of Cardiovascular, Diabetes, COPD, Asthma
//! - **Risk Tier**: Low, Moderate or High
//! - **Measurement set**: The clinical values one condition's rule consumes
//! - **Results mapping**: Per-session record of assessed tiers
//! - **Recommendation block**: Static guidance text for a (condition, tier) pair
//!
//! ## Architecture
//!
//! - Only `serde` derives as an external dependency
//! - No I/O, no logging, no shared state
//! - Adding a condition or tier fails to compile until the classifier,
//!   field catalogue and recommendation table all handle it

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod condition;
pub mod fields;
pub mod measurements;
pub mod recommendations;
pub mod results;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use classifier::{
    classify, classify_asthma, classify_cardiovascular, classify_copd, classify_diabetes,
};
pub use condition::Condition;
pub use fields::{Bounds, FieldSpec, Flag, RangeViolation};
pub use measurements::{
    fields_for, AsthmaMeasurements, CardiovascularMeasurements, CopdMeasurements,
    DiabetesMeasurements, Measurements,
};
pub use recommendations::{compose, recommendation};
pub use results::ResultsMapping;
pub use tier::RiskTier;
pub use traits::MeasurementSet;
