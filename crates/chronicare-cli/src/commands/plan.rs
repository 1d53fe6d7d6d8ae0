//! Plan command implementation.

use crate::cli::PlanArgs;
use crate::error::Result;
use crate::output::Formatter;
use chronicare_domain::{compose, ResultsMapping};
use tracing::debug;

/// Execute the plan command.
pub fn execute_plan(args: PlanArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", plan(args, formatter)?);
    Ok(())
}

fn plan(args: PlanArgs, formatter: &Formatter) -> Result<String> {
    // Later pairs for the same condition win
    let results: ResultsMapping = args.results.into_iter().collect();
    let plan = compose(&results);
    debug!(conditions = results.len(), "Composed care plan");
    formatter.format_plan(&results, &plan)
}
