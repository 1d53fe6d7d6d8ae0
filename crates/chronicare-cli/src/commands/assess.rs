//! Assess command implementation.

use crate::cli::AssessArgs;
use crate::config::RangePolicy;
use crate::error::Result;
use crate::intake::assess_into;
use crate::output::Formatter;
use chronicare_domain::{Measurements, ResultsMapping};

/// Execute the assess command.
pub fn execute_assess(args: AssessArgs, policy: RangePolicy, formatter: &Formatter) -> Result<()> {
    println!("{}", assess(args.target.into(), policy, formatter)?);
    Ok(())
}

/// Classify one measurement set and format the outcome.
fn assess(measurements: Measurements, policy: RangePolicy, formatter: &Formatter) -> Result<String> {
    // One-shot assessments get a throwaway session
    let mut results = ResultsMapping::new();
    let (condition, tier) = assess_into(&mut results, measurements, policy)?;
    formatter.format_assessment(condition, tier)
}
