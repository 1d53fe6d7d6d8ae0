//! Fields command implementation.

use crate::cli::FieldsArgs;
use crate::error::Result;
use crate::output::Formatter;
use chronicare_domain::Condition;

/// Execute the fields command.
pub fn execute_fields(args: FieldsArgs, formatter: &Formatter) -> Result<()> {
    let conditions = match args.condition {
        Some(condition) => vec![condition.into()],
        None => Condition::ALL.to_vec(),
    };
    println!("{}", formatter.format_fields(&conditions)?);
    Ok(())
}
