//! Evaluate command implementation.

use crate::cli::EvaluateArgs;
use crate::config::RangePolicy;
use crate::error::{CliError, Result};
use crate::intake::{assess_into, Intake};
use crate::output::Formatter;
use chronicare_domain::{compose, ResultsMapping};
use std::fs::File;
use std::io::{self, BufReader, Read};
use tracing::{debug, info};

/// Execute the evaluate command.
pub fn execute_evaluate(
    args: EvaluateArgs,
    policy: RangePolicy,
    formatter: &Formatter,
) -> Result<()> {
    let output = if let Some(path) = &args.file {
        info!(path = %path.display(), "Reading intake document");
        evaluate_reader(BufReader::new(File::open(path)?), policy, formatter)?
    } else if args.stdin {
        evaluate_reader(io::stdin().lock(), policy, formatter)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify an intake file or --stdin".to_string(),
        ));
    };

    println!("{}", output);
    Ok(())
}

/// Read an intake document, assess it and format the resulting plan.
pub fn evaluate_reader<R: Read>(
    reader: R,
    policy: RangePolicy,
    formatter: &Formatter,
) -> Result<String> {
    let intake = Intake::from_reader(reader)?;
    evaluate(&intake, policy, formatter)
}

/// Assess every condition in an intake document and compose the plan.
fn evaluate(intake: &Intake, policy: RangePolicy, formatter: &Formatter) -> Result<String> {
    let mut results = ResultsMapping::new();
    for measurements in intake.measurements() {
        assess_into(&mut results, measurements, policy)?;
    }

    let plan = compose(&results);
    debug!(conditions = results.len(), "Composed care plan");
    formatter.format_plan(&results, &plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use chronicare_domain::{recommendation, Condition, RiskTier};

    #[test]
    fn test_evaluate_intake() {
        let intake = Intake::from_json(
            r#"{
                "copd": { "smoking_years": 25, "exacerbations_last_year": 3 },
                "diabetes": { "fasting_glucose": 130, "hba1c": 5.0 }
            }"#,
        )
        .unwrap();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = evaluate(&intake, RangePolicy::Clamp, &formatter).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["results"]["COPD"], "High");
        assert_eq!(value["results"]["Diabetes"], "High");
        assert_eq!(
            value["plan"],
            format!(
                "{}\n\n{}",
                recommendation(Condition::Diabetes, RiskTier::High),
                recommendation(Condition::Copd, RiskTier::High)
            )
        );
    }

    #[test]
    fn test_evaluate_empty_intake() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = evaluate(&Intake::default(), RangePolicy::Clamp, &formatter).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_evaluate_reject_stops_on_violation() {
        let intake =
            Intake::from_json(r#"{ "asthma": { "eosinophil_count": 900 } }"#).unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = evaluate(&intake, RangePolicy::Reject, &formatter);
        assert!(matches!(result, Err(CliError::OutOfRange { .. })));
    }

    #[test]
    fn test_evaluate_reader() {
        let json = r#"{ "asthma": { "nighttime_symptoms": 3 } }"#;
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = evaluate_reader(json.as_bytes(), RangePolicy::Clamp, &formatter).unwrap();
        assert_eq!(output, recommendation(Condition::Asthma, RiskTier::High));
    }

    #[test]
    fn test_execute_reads_intake_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intake.json");
        std::fs::write(&path, r#"{ "copd": { "smoking_years": 30 } }"#).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = EvaluateArgs {
            file: Some(path),
            stdin: false,
        };
        assert!(execute_evaluate(args, RangePolicy::Clamp, &formatter).is_ok());
    }

    #[test]
    fn test_execute_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = EvaluateArgs {
            file: Some(dir.path().join("absent.json")),
            stdin: false,
        };
        let result = execute_evaluate(args, RangePolicy::Clamp, &formatter);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_execute_requires_source() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = EvaluateArgs {
            file: None,
            stdin: false,
        };
        let result = execute_evaluate(args, RangePolicy::Clamp, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
