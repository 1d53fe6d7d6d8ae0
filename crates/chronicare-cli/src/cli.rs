//! CLI command definitions and argument parsing.

use chronicare_domain::measurements::{asthma, cardiovascular, copd, diabetes};
use chronicare_domain::{
    AsthmaMeasurements, CardiovascularMeasurements, Condition, CopdMeasurements,
    DiabetesMeasurements, Measurements, RiskTier,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chronicare - Chronic condition risk assessment and care planning.
#[derive(Debug, Parser)]
#[command(name = "chronicare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CHRONICARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (tiers or plan text only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assess risk for one condition
    Assess(AssessArgs),

    /// Compose a care plan from known risk tiers
    Plan(PlanArgs),

    /// Assess every condition in a JSON intake document and compose a plan
    Evaluate(EvaluateArgs),

    /// List input fields with their ranges and defaults
    Fields(FieldsArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the assess command.
#[derive(Debug, Parser)]
pub struct AssessArgs {
    #[command(subcommand)]
    pub target: AssessTarget,
}

/// Condition to assess, with its measurements.
#[derive(Debug, Subcommand)]
pub enum AssessTarget {
    /// Cardiovascular risk
    #[command(alias = "cardio")]
    Cardiovascular(CardiovascularArgs),

    /// Diabetes risk
    Diabetes(DiabetesArgs),

    /// COPD risk
    Copd(CopdArgs),

    /// Asthma risk
    Asthma(AsthmaArgs),
}

/// Cardiovascular measurements.
#[derive(Debug, Parser)]
pub struct CardiovascularArgs {
    /// Age in years
    #[arg(long, default_value_t = cardiovascular::AGE.default)]
    pub age: u32,

    /// Systolic blood pressure (mmHg)
    #[arg(long, default_value_t = cardiovascular::SYSTOLIC_BP.default)]
    pub systolic_bp: u32,

    /// Total cholesterol (mg/dL)
    #[arg(long, default_value_t = cardiovascular::CHOLESTEROL.default)]
    pub cholesterol: u32,

    /// Current smoker
    #[arg(long)]
    pub smoker: bool,
}

/// Diabetes measurements.
#[derive(Debug, Parser)]
pub struct DiabetesArgs {
    /// Body mass index
    #[arg(long, default_value_t = diabetes::BMI.default, value_parser = parse_finite)]
    pub bmi: f64,

    /// Age in years
    #[arg(long, default_value_t = diabetes::AGE.default)]
    pub age: u32,

    /// Family history of diabetes
    #[arg(long)]
    pub family_history: bool,

    /// Fasting glucose (mg/dL)
    #[arg(long, default_value_t = diabetes::FASTING_GLUCOSE.default)]
    pub fasting_glucose: u32,

    /// HbA1c (%)
    #[arg(long, default_value_t = diabetes::HBA1C.default, value_parser = parse_finite)]
    pub hba1c: f64,
}

/// COPD measurements.
#[derive(Debug, Parser)]
pub struct CopdArgs {
    /// Years spent smoking
    #[arg(long, default_value_t = copd::SMOKING_YEARS.default)]
    pub smoking_years: u32,

    /// Age in years
    #[arg(long, default_value_t = copd::AGE.default)]
    pub age: u32,

    /// FEV1 (% predicted)
    #[arg(long, default_value_t = copd::FEV1.default)]
    pub fev1: u32,

    /// Exacerbations in the last year
    #[arg(long, default_value_t = copd::EXACERBATIONS_LAST_YEAR.default)]
    pub exacerbations_last_year: u32,
}

/// Asthma measurements.
#[derive(Debug, Parser)]
pub struct AsthmaArgs {
    /// Days per week with symptoms (0-7)
    #[arg(long, default_value_t = asthma::FREQUENCY_OF_SYMPTOMS.default)]
    pub frequency_of_symptoms: u32,

    /// Days per week with nighttime symptoms (0-7)
    #[arg(long, default_value_t = asthma::NIGHTTIME_SYMPTOMS.default)]
    pub nighttime_symptoms: u32,

    /// Regular inhaler use
    #[arg(long)]
    pub inhaler_use: bool,

    /// FEV1 (% predicted)
    #[arg(long, default_value_t = asthma::FEV1.default)]
    pub fev1: u32,

    /// Eosinophil count (cells/mcL)
    #[arg(long, default_value_t = asthma::EOSINOPHIL_COUNT.default)]
    pub eosinophil_count: u32,
}

/// Arguments for the plan command.
#[derive(Debug, Parser)]
pub struct PlanArgs {
    /// Assessed tiers as CONDITION=TIER (e.g. cardiovascular=high)
    #[arg(value_parser = parse_result_pair)]
    pub results: Vec<(Condition, RiskTier)>,
}

/// Arguments for the evaluate command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// JSON intake file
    pub file: Option<PathBuf>,

    /// Read the JSON intake document from stdin
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,
}

/// Arguments for the fields command.
#[derive(Debug, Parser)]
pub struct FieldsArgs {
    /// Only list fields for this condition
    #[arg(value_enum)]
    pub condition: Option<ConditionArg>,
}

/// Condition argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ConditionArg {
    /// Cardiovascular disease
    Cardiovascular,
    /// Diabetes
    Diabetes,
    /// Chronic obstructive pulmonary disease
    Copd,
    /// Asthma
    Asthma,
}

/// Parse a `CONDITION=TIER` pair.
pub fn parse_result_pair(s: &str) -> Result<(Condition, RiskTier), String> {
    let (condition, tier) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected CONDITION=TIER, got '{}'", s))?;
    Ok((condition.parse()?, tier.parse()?))
}

/// Parse a decimal measurement, refusing NaN and infinities.
pub fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("Expected a number, got '{}'", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Expected a finite number, got '{}'", s))
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ConditionArg> for Condition {
    fn from(condition: ConditionArg) -> Self {
        match condition {
            ConditionArg::Cardiovascular => Condition::Cardiovascular,
            ConditionArg::Diabetes => Condition::Diabetes,
            ConditionArg::Copd => Condition::Copd,
            ConditionArg::Asthma => Condition::Asthma,
        }
    }
}

impl From<AssessTarget> for Measurements {
    fn from(target: AssessTarget) -> Self {
        match target {
            AssessTarget::Cardiovascular(a) => CardiovascularMeasurements {
                age: a.age,
                systolic_bp: a.systolic_bp,
                smoker: a.smoker,
                cholesterol: a.cholesterol,
            }
            .into(),
            AssessTarget::Diabetes(a) => DiabetesMeasurements {
                bmi: a.bmi,
                age: a.age,
                family_history: a.family_history,
                fasting_glucose: a.fasting_glucose,
                hba1c: a.hba1c,
            }
            .into(),
            AssessTarget::Copd(a) => CopdMeasurements {
                smoking_years: a.smoking_years,
                age: a.age,
                fev1: a.fev1,
                exacerbations_last_year: a.exacerbations_last_year,
            }
            .into(),
            AssessTarget::Asthma(a) => AsthmaMeasurements {
                frequency_of_symptoms: a.frequency_of_symptoms,
                nighttime_symptoms: a.nighttime_symptoms,
                inhaler_use: a.inhaler_use,
                fev1: a.fev1,
                eosinophil_count: a.eosinophil_count,
            }
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_enters_repl() {
        let cli = Cli::parse_from(["chronicare"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_assess_cardio_defaults() {
        let cli = Cli::parse_from(["chronicare", "assess", "cardio", "--smoker"]);
        match cli.command {
            Some(Command::Assess(args)) => match Measurements::from(args.target) {
                Measurements::Cardiovascular(m) => {
                    assert!(m.smoker);
                    assert_eq!(m.systolic_bp, 120);
                    assert_eq!(m.age, 50);
                }
                other => panic!("Expected cardiovascular measurements, got {:?}", other),
            },
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_assess_diabetes_decimal_args() {
        let cli = Cli::parse_from([
            "chronicare",
            "assess",
            "diabetes",
            "--hba1c",
            "7.1",
            "--fasting-glucose",
            "110",
        ]);
        match cli.command {
            Some(Command::Assess(args)) => match Measurements::from(args.target) {
                Measurements::Diabetes(m) => {
                    assert_eq!(m.hba1c, 7.1);
                    assert_eq!(m.fasting_glucose, 110);
                    assert_eq!(m.bmi, 25.0);
                }
                other => panic!("Expected diabetes measurements, got {:?}", other),
            },
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn test_assess_diabetes_rejects_non_finite() {
        for value in ["NaN", "inf", "-infinity"] {
            let result =
                Cli::try_parse_from(["chronicare", "assess", "diabetes", "--hba1c", value]);
            assert!(result.is_err(), "accepted --hba1c {}", value);
        }
        let result = Cli::try_parse_from(["chronicare", "assess", "diabetes", "--bmi", "NaN"]);
        assert!(result.is_err());
        assert_eq!(parse_finite("6.5"), Ok(6.5));
    }

    #[test]
    fn test_plan_pairs() {
        let cli = Cli::parse_from(["chronicare", "plan", "asthma=moderate", "cvd=High"]);
        match cli.command {
            Some(Command::Plan(args)) => {
                assert_eq!(
                    args.results,
                    vec![
                        (Condition::Asthma, RiskTier::Moderate),
                        (Condition::Cardiovascular, RiskTier::High),
                    ]
                );
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn test_plan_rejects_malformed_pair() {
        let result = Cli::try_parse_from(["chronicare", "plan", "asthma"]);
        assert!(result.is_err());
        assert!(parse_result_pair("asthma=extreme").is_err());
        assert!(parse_result_pair("gout=high").is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["chronicare", "fields", "copd", "--format", "json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Some(Command::Fields(args)) => {
                let condition: Condition = args.condition.unwrap().into();
                assert_eq!(condition, Condition::Copd);
            }
            _ => panic!("Expected Fields command"),
        }
    }
}
