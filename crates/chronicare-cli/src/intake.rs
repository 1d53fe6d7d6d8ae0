//! Measurement intake: JSON documents, `field=value` assignments and range policy.

use crate::config::RangePolicy;
use crate::error::{CliError, Result};
use chronicare_domain::{
    AsthmaMeasurements, CardiovascularMeasurements, Condition, CopdMeasurements,
    DiabetesMeasurements, MeasurementSet, Measurements, ResultsMapping, RiskTier,
};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::io::Read;
use tracing::{debug, warn};

/// A JSON intake document holding measurements for any subset of conditions.
///
/// ```json
/// {
///   "cardiovascular": { "age": 61, "systolic_bp": 152, "smoker": true },
///   "asthma": { "nighttime_symptoms": 3 }
/// }
/// ```
///
/// Missing fields take their form defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Intake {
    /// Cardiovascular inputs
    pub cardiovascular: Option<CardiovascularMeasurements>,
    /// Diabetes inputs
    pub diabetes: Option<DiabetesMeasurements>,
    /// COPD inputs
    pub copd: Option<CopdMeasurements>,
    /// Asthma inputs
    pub asthma: Option<AsthmaMeasurements>,
}

impl Intake {
    /// Parse an intake document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an intake document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Measurement sets present in the document, in canonical order.
    pub fn measurements(&self) -> Vec<Measurements> {
        [
            self.cardiovascular.map(Measurements::from),
            self.diabetes.map(Measurements::from),
            self.copd.map(Measurements::from),
            self.asthma.map(Measurements::from),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Apply the range policy to a measurement set.
pub fn apply_policy<T: MeasurementSet>(set: T, policy: RangePolicy) -> Result<T> {
    let violations = set.violations();
    if violations.is_empty() {
        return Ok(set);
    }

    match policy {
        RangePolicy::Clamp => {
            for v in &violations {
                warn!(
                    condition = %T::CONDITION,
                    field = v.field,
                    value = v.value,
                    min = v.min,
                    max = v.max,
                    "Clamping out-of-range measurement"
                );
            }
            Ok(set.clamped())
        }
        RangePolicy::Reject => Err(CliError::OutOfRange {
            condition: T::CONDITION,
            violations,
        }),
    }
}

/// Range-check, classify and record one measurement set.
pub fn assess_into(
    results: &mut ResultsMapping,
    measurements: Measurements,
    policy: RangePolicy,
) -> Result<(Condition, RiskTier)> {
    match measurements {
        Measurements::Cardiovascular(m) => assess_set(results, m, policy),
        Measurements::Diabetes(m) => assess_set(results, m, policy),
        Measurements::Copd(m) => assess_set(results, m, policy),
        Measurements::Asthma(m) => assess_set(results, m, policy),
    }
}

fn assess_set<T: MeasurementSet>(
    results: &mut ResultsMapping,
    set: T,
    policy: RangePolicy,
) -> Result<(Condition, RiskTier)> {
    let set = apply_policy(set, policy)?;
    let tier = set.classify();
    results.record(T::CONDITION, tier);
    debug!(condition = %T::CONDITION, tier = %tier, "Assessed condition");
    Ok((T::CONDITION, tier))
}

/// Build a measurement set from `field=value` assignments.
///
/// Unspecified fields take their form defaults; unknown fields are rejected.
pub fn parse_assignments(condition: Condition, assignments: &[&str]) -> Result<Measurements> {
    match condition {
        Condition::Cardiovascular => parse_set::<CardiovascularMeasurements>(assignments),
        Condition::Diabetes => parse_set::<DiabetesMeasurements>(assignments),
        Condition::Copd => parse_set::<CopdMeasurements>(assignments),
        Condition::Asthma => parse_set::<AsthmaMeasurements>(assignments),
    }
}

fn parse_set<T: MeasurementSet>(assignments: &[&str]) -> Result<Measurements> {
    if assignments.is_empty() {
        return Ok(T::default().into());
    }

    let mut fields = Map::new();
    for assignment in assignments {
        let (name, raw) = assignment.split_once('=').ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Invalid assignment '{}'. Expected 'field=value'",
                assignment
            ))
        })?;
        let name = name.trim();
        if !T::fields().iter().any(|spec| spec.name() == name) {
            let known: Vec<_> = T::fields().iter().map(|spec| spec.name()).collect();
            return Err(CliError::InvalidInput(format!(
                "Unknown {} field '{}'. Expected one of: {}",
                T::CONDITION,
                name,
                known.join(", ")
            )));
        }
        fields.insert(name.to_string(), parse_value(raw.trim())?);
    }

    let set: T = serde_json::from_value(Value::Object(fields)).map_err(|e| {
        CliError::InvalidInput(format!("Invalid {} measurements: {}", T::CONDITION, e))
    })?;
    Ok(set.into())
}

fn parse_value(raw: &str) -> Result<Value> {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "y" => return Ok(Value::Bool(true)),
        "false" | "no" | "n" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if let Ok(n) = raw.parse::<u64>() {
        return Ok(Value::Number(n.into()));
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(Value::Number(n.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| CliError::InvalidInput(format!("Invalid value '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_document() {
        let intake = Intake::from_json(
            r#"{
                "asthma": { "nighttime_symptoms": 3 },
                "cardiovascular": { "age": 61, "systolic_bp": 152, "smoker": true }
            }"#,
        )
        .unwrap();

        let conditions: Vec<_> = intake.measurements().iter().map(|m| m.condition()).collect();
        assert_eq!(conditions, vec![Condition::Cardiovascular, Condition::Asthma]);
    }

    #[test]
    fn test_intake_rejects_unknown_condition() {
        let result = Intake::from_json(r#"{ "arthritis": {} }"#);
        assert!(matches!(result, Err(CliError::Serialization(_))));
    }

    #[test]
    fn test_parse_assignments() {
        let m = parse_assignments(Condition::Copd, &["smoking_years=25", "exacerbations_last_year=3"])
            .unwrap();
        match m {
            Measurements::Copd(c) => {
                assert_eq!(c.smoking_years, 25);
                assert_eq!(c.exacerbations_last_year, 3);
                assert_eq!(c.fev1, 80);
            }
            other => panic!("Expected COPD measurements, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_assignments_types() {
        let m = parse_assignments(
            Condition::Diabetes,
            &["hba1c=6.8", "bmi=31", "family_history=yes"],
        )
        .unwrap();
        match m {
            Measurements::Diabetes(d) => {
                assert_eq!(d.hba1c, 6.8);
                assert_eq!(d.bmi, 31.0);
                assert!(d.family_history);
            }
            other => panic!("Expected diabetes measurements, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_assignments_empty_is_defaults() {
        let m = parse_assignments(Condition::Asthma, &[]).unwrap();
        assert_eq!(m, Measurements::defaults(Condition::Asthma));
    }

    #[test]
    fn test_unknown_field_lists_known_fields() {
        match parse_assignments(Condition::Copd, &["peak_flow=300"]) {
            Err(CliError::InvalidInput(message)) => {
                assert!(message.contains("Unknown COPD field 'peak_flow'"));
                assert!(message.contains("smoking_years, age, fev1, exacerbations_last_year"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_assignments_errors() {
        assert!(parse_assignments(Condition::Asthma, &["fev1"]).is_err());
        assert!(parse_assignments(Condition::Asthma, &["peak_flow=300"]).is_err());
        assert!(parse_assignments(Condition::Asthma, &["fev1=abc"]).is_err());
        assert!(parse_assignments(Condition::Asthma, &["fev1=-5"]).is_err());
    }

    #[test]
    fn test_clamp_policy() {
        let m = CardiovascularMeasurements {
            systolic_bp: 260,
            smoker: true,
            ..Default::default()
        };
        let clamped = apply_policy(m, RangePolicy::Clamp).unwrap();
        assert!(clamped.violations().is_empty());
        assert_eq!(clamped.systolic_bp, 200);
    }

    #[test]
    fn test_clamp_policy_leaves_no_nan_behind() {
        let m = DiabetesMeasurements {
            hba1c: f64::NAN,
            bmi: f64::NAN,
            ..Default::default()
        };
        let clamped = apply_policy(m, RangePolicy::Clamp).unwrap();
        assert!(clamped.violations().is_empty());
        assert_eq!(clamped.hba1c, DiabetesMeasurements::default().hba1c);

        let mut results = ResultsMapping::new();
        assess_into(&mut results, m.into(), RangePolicy::Clamp).unwrap();
        assert_eq!(results.get(Condition::Diabetes), Some(RiskTier::Moderate));
    }

    #[test]
    fn test_reject_policy_refuses_nan() {
        let m = DiabetesMeasurements {
            hba1c: f64::NAN,
            ..Default::default()
        };
        let mut results = ResultsMapping::new();
        let result = assess_into(&mut results, m.into(), RangePolicy::Reject);
        assert!(matches!(result, Err(CliError::OutOfRange { .. })));
        assert!(results.is_empty());
    }

    #[test]
    fn test_reject_policy() {
        let m = AsthmaMeasurements {
            frequency_of_symptoms: 9,
            ..Default::default()
        };
        match apply_policy(m, RangePolicy::Reject) {
            Err(CliError::OutOfRange {
                condition,
                violations,
            }) => {
                assert_eq!(condition, Condition::Asthma);
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "frequency_of_symptoms");
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_assess_into_records_clamped_result() {
        let mut results = ResultsMapping::new();
        let m: Measurements = CardiovascularMeasurements {
            systolic_bp: 260,
            smoker: true,
            ..Default::default()
        }
        .into();
        let (condition, tier) = assess_into(&mut results, m, RangePolicy::Clamp).unwrap();
        assert_eq!(condition, Condition::Cardiovascular);
        assert_eq!(tier, RiskTier::High);
        assert_eq!(results.get(Condition::Cardiovascular), Some(RiskTier::High));
    }
}
