//! Measurement sets - the clinical values each condition's rule consumes
//!
//! Each set is an immutable value record built fresh per evaluation.
//! Several fields are accepted but ignored by the current rules (age,
//! cholesterol, BMI, family history, FEV1, inhaler use, eosinophil count);
//! they are kept so callers supply the full clinical picture.

use crate::classifier;
use crate::fields::{Bounds, FieldSpec, Flag, RangeViolation};
use crate::traits::MeasurementSet;
use crate::{Condition, RiskTier};
use serde::{Deserialize, Serialize};

/// Field catalogue for cardiovascular inputs
pub mod cardiovascular {
    use super::*;

    /// Patient age in years
    pub const AGE: Bounds<u32> = Bounds {
        name: "age",
        label: "Age",
        min: 18,
        max: 120,
        default: 50,
    };
    /// Systolic blood pressure
    pub const SYSTOLIC_BP: Bounds<u32> = Bounds {
        name: "systolic_bp",
        label: "Systolic Blood Pressure (mmHg)",
        min: 80,
        max: 200,
        default: 120,
    };
    /// Total cholesterol
    pub const CHOLESTEROL: Bounds<u32> = Bounds {
        name: "cholesterol",
        label: "Cholesterol (mg/dL)",
        min: 150,
        max: 300,
        default: 200,
    };
    /// Current smoker
    pub const SMOKER: Flag = Flag {
        name: "smoker",
        label: "Smoker",
        default: false,
    };

    /// Fields in form order
    pub const FIELDS: &[FieldSpec] = &[
        FieldSpec::Integer(&AGE),
        FieldSpec::Integer(&SYSTOLIC_BP),
        FieldSpec::Integer(&CHOLESTEROL),
        FieldSpec::Flag(&SMOKER),
    ];
}

/// Field catalogue for diabetes inputs
pub mod diabetes {
    use super::*;

    /// Body mass index
    pub const BMI: Bounds<f64> = Bounds {
        name: "bmi",
        label: "BMI",
        min: 10.0,
        max: 50.0,
        default: 25.0,
    };
    /// Patient age in years
    pub const AGE: Bounds<u32> = Bounds {
        name: "age",
        label: "Age",
        min: 18,
        max: 100,
        default: 30,
    };
    /// Family history of diabetes
    pub const FAMILY_HISTORY: Flag = Flag {
        name: "family_history",
        label: "Family History of Diabetes",
        default: false,
    };
    /// Fasting plasma glucose
    pub const FASTING_GLUCOSE: Bounds<u32> = Bounds {
        name: "fasting_glucose",
        label: "Fasting Glucose (mg/dL)",
        min: 50,
        max: 300,
        default: 100,
    };
    /// Glycated haemoglobin
    pub const HBA1C: Bounds<f64> = Bounds {
        name: "hba1c",
        label: "HbA1c (%)",
        min: 4.0,
        max: 15.0,
        default: 5.0,
    };

    /// Fields in form order
    pub const FIELDS: &[FieldSpec] = &[
        FieldSpec::Decimal(&BMI),
        FieldSpec::Integer(&AGE),
        FieldSpec::Flag(&FAMILY_HISTORY),
        FieldSpec::Integer(&FASTING_GLUCOSE),
        FieldSpec::Decimal(&HBA1C),
    ];
}

/// Field catalogue for COPD inputs
pub mod copd {
    use super::*;

    /// Years spent smoking
    pub const SMOKING_YEARS: Bounds<u32> = Bounds {
        name: "smoking_years",
        label: "Years Smoking",
        min: 0,
        max: 50,
        default: 10,
    };
    /// Patient age in years
    pub const AGE: Bounds<u32> = Bounds {
        name: "age",
        label: "Age",
        min: 18,
        max: 100,
        default: 30,
    };
    /// Forced expiratory volume in one second, percent predicted
    pub const FEV1: Bounds<u32> = Bounds {
        name: "fev1",
        label: "FEV1 (%)",
        min: 20,
        max: 100,
        default: 80,
    };
    /// Exacerbations during the last twelve months
    pub const EXACERBATIONS_LAST_YEAR: Bounds<u32> = Bounds {
        name: "exacerbations_last_year",
        label: "Exacerbations Last Year",
        min: 0,
        max: 10,
        default: 1,
    };

    /// Fields in form order
    pub const FIELDS: &[FieldSpec] = &[
        FieldSpec::Integer(&SMOKING_YEARS),
        FieldSpec::Integer(&AGE),
        FieldSpec::Integer(&FEV1),
        FieldSpec::Integer(&EXACERBATIONS_LAST_YEAR),
    ];
}

/// Field catalogue for asthma inputs
pub mod asthma {
    use super::*;

    /// Days per week with daytime symptoms
    pub const FREQUENCY_OF_SYMPTOMS: Bounds<u32> = Bounds {
        name: "frequency_of_symptoms",
        label: "Frequency of Symptoms (0-7 days/week)",
        min: 0,
        max: 7,
        default: 2,
    };
    /// Days per week with nighttime symptoms
    pub const NIGHTTIME_SYMPTOMS: Bounds<u32> = Bounds {
        name: "nighttime_symptoms",
        label: "Nighttime Symptoms (0-7 days/week)",
        min: 0,
        max: 7,
        default: 1,
    };
    /// Regular reliever inhaler use
    pub const INHALER_USE: Flag = Flag {
        name: "inhaler_use",
        label: "Regular Inhaler Use",
        default: false,
    };
    /// Forced expiratory volume in one second, percent predicted
    pub const FEV1: Bounds<u32> = Bounds {
        name: "fev1",
        label: "FEV1 (%)",
        min: 20,
        max: 100,
        default: 85,
    };
    /// Blood eosinophil count
    pub const EOSINOPHIL_COUNT: Bounds<u32> = Bounds {
        name: "eosinophil_count",
        label: "Eosinophil Count (cells/mcL)",
        min: 0,
        max: 500,
        default: 200,
    };

    /// Fields in form order
    pub const FIELDS: &[FieldSpec] = &[
        FieldSpec::Integer(&FREQUENCY_OF_SYMPTOMS),
        FieldSpec::Integer(&NIGHTTIME_SYMPTOMS),
        FieldSpec::Flag(&INHALER_USE),
        FieldSpec::Integer(&FEV1),
        FieldSpec::Integer(&EOSINOPHIL_COUNT),
    ];
}

/// Field catalogue for a condition
pub fn fields_for(condition: Condition) -> &'static [FieldSpec] {
    match condition {
        Condition::Cardiovascular => cardiovascular::FIELDS,
        Condition::Diabetes => diabetes::FIELDS,
        Condition::Copd => copd::FIELDS,
        Condition::Asthma => asthma::FIELDS,
    }
}

/// Cardiovascular measurement set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardiovascularMeasurements {
    /// Age in years
    pub age: u32,
    /// Systolic blood pressure (mmHg)
    pub systolic_bp: u32,
    /// Current smoker
    pub smoker: bool,
    /// Total cholesterol (mg/dL)
    pub cholesterol: u32,
}

impl Default for CardiovascularMeasurements {
    fn default() -> Self {
        Self {
            age: cardiovascular::AGE.default,
            systolic_bp: cardiovascular::SYSTOLIC_BP.default,
            smoker: cardiovascular::SMOKER.default,
            cholesterol: cardiovascular::CHOLESTEROL.default,
        }
    }
}

impl MeasurementSet for CardiovascularMeasurements {
    const CONDITION: Condition = Condition::Cardiovascular;

    fn fields() -> &'static [FieldSpec] {
        cardiovascular::FIELDS
    }

    fn classify(&self) -> RiskTier {
        classifier::classify_cardiovascular(self)
    }

    fn violations(&self) -> Vec<RangeViolation> {
        [
            cardiovascular::AGE.check(self.age),
            cardiovascular::SYSTOLIC_BP.check(self.systolic_bp),
            cardiovascular::CHOLESTEROL.check(self.cholesterol),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn clamped(&self) -> Self {
        Self {
            age: cardiovascular::AGE.clamp(self.age),
            systolic_bp: cardiovascular::SYSTOLIC_BP.clamp(self.systolic_bp),
            smoker: self.smoker,
            cholesterol: cardiovascular::CHOLESTEROL.clamp(self.cholesterol),
        }
    }
}

/// Diabetes measurement set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiabetesMeasurements {
    /// Body mass index
    pub bmi: f64,
    /// Age in years
    pub age: u32,
    /// Family history of diabetes
    pub family_history: bool,
    /// Fasting glucose (mg/dL)
    pub fasting_glucose: u32,
    /// HbA1c (%)
    pub hba1c: f64,
}

impl Default for DiabetesMeasurements {
    fn default() -> Self {
        Self {
            bmi: diabetes::BMI.default,
            age: diabetes::AGE.default,
            family_history: diabetes::FAMILY_HISTORY.default,
            fasting_glucose: diabetes::FASTING_GLUCOSE.default,
            hba1c: diabetes::HBA1C.default,
        }
    }
}

impl MeasurementSet for DiabetesMeasurements {
    const CONDITION: Condition = Condition::Diabetes;

    fn fields() -> &'static [FieldSpec] {
        diabetes::FIELDS
    }

    fn classify(&self) -> RiskTier {
        classifier::classify_diabetes(self)
    }

    fn violations(&self) -> Vec<RangeViolation> {
        [
            diabetes::BMI.check(self.bmi),
            diabetes::AGE.check(self.age),
            diabetes::FASTING_GLUCOSE.check(self.fasting_glucose),
            diabetes::HBA1C.check(self.hba1c),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn clamped(&self) -> Self {
        Self {
            bmi: diabetes::BMI.clamp(self.bmi),
            age: diabetes::AGE.clamp(self.age),
            family_history: self.family_history,
            fasting_glucose: diabetes::FASTING_GLUCOSE.clamp(self.fasting_glucose),
            hba1c: diabetes::HBA1C.clamp(self.hba1c),
        }
    }
}

/// COPD measurement set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopdMeasurements {
    /// Years spent smoking
    pub smoking_years: u32,
    /// Age in years
    pub age: u32,
    /// FEV1 (% predicted)
    pub fev1: u32,
    /// Exacerbations in the last year
    pub exacerbations_last_year: u32,
}

impl Default for CopdMeasurements {
    fn default() -> Self {
        Self {
            smoking_years: copd::SMOKING_YEARS.default,
            age: copd::AGE.default,
            fev1: copd::FEV1.default,
            exacerbations_last_year: copd::EXACERBATIONS_LAST_YEAR.default,
        }
    }
}

impl MeasurementSet for CopdMeasurements {
    const CONDITION: Condition = Condition::Copd;

    fn fields() -> &'static [FieldSpec] {
        copd::FIELDS
    }

    fn classify(&self) -> RiskTier {
        classifier::classify_copd(self)
    }

    fn violations(&self) -> Vec<RangeViolation> {
        [
            copd::SMOKING_YEARS.check(self.smoking_years),
            copd::AGE.check(self.age),
            copd::FEV1.check(self.fev1),
            copd::EXACERBATIONS_LAST_YEAR.check(self.exacerbations_last_year),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn clamped(&self) -> Self {
        Self {
            smoking_years: copd::SMOKING_YEARS.clamp(self.smoking_years),
            age: copd::AGE.clamp(self.age),
            fev1: copd::FEV1.clamp(self.fev1),
            exacerbations_last_year: copd::EXACERBATIONS_LAST_YEAR
                .clamp(self.exacerbations_last_year),
        }
    }
}

/// Asthma measurement set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsthmaMeasurements {
    /// Days per week with symptoms
    pub frequency_of_symptoms: u32,
    /// Days per week with nighttime symptoms
    pub nighttime_symptoms: u32,
    /// Regular inhaler use
    pub inhaler_use: bool,
    /// FEV1 (% predicted)
    pub fev1: u32,
    /// Eosinophil count (cells/mcL)
    pub eosinophil_count: u32,
}

impl Default for AsthmaMeasurements {
    fn default() -> Self {
        Self {
            frequency_of_symptoms: asthma::FREQUENCY_OF_SYMPTOMS.default,
            nighttime_symptoms: asthma::NIGHTTIME_SYMPTOMS.default,
            inhaler_use: asthma::INHALER_USE.default,
            fev1: asthma::FEV1.default,
            eosinophil_count: asthma::EOSINOPHIL_COUNT.default,
        }
    }
}

impl MeasurementSet for AsthmaMeasurements {
    const CONDITION: Condition = Condition::Asthma;

    fn fields() -> &'static [FieldSpec] {
        asthma::FIELDS
    }

    fn classify(&self) -> RiskTier {
        classifier::classify_asthma(self)
    }

    fn violations(&self) -> Vec<RangeViolation> {
        [
            asthma::FREQUENCY_OF_SYMPTOMS.check(self.frequency_of_symptoms),
            asthma::NIGHTTIME_SYMPTOMS.check(self.nighttime_symptoms),
            asthma::FEV1.check(self.fev1),
            asthma::EOSINOPHIL_COUNT.check(self.eosinophil_count),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn clamped(&self) -> Self {
        Self {
            frequency_of_symptoms: asthma::FREQUENCY_OF_SYMPTOMS.clamp(self.frequency_of_symptoms),
            nighttime_symptoms: asthma::NIGHTTIME_SYMPTOMS.clamp(self.nighttime_symptoms),
            inhaler_use: self.inhaler_use,
            fev1: asthma::FEV1.clamp(self.fev1),
            eosinophil_count: asthma::EOSINOPHIL_COUNT.clamp(self.eosinophil_count),
        }
    }
}

/// A measurement set for any one condition
///
/// The variant determines which rule applies, so dispatch is an exhaustive
/// `match` rather than a lookup by condition name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurements {
    /// Cardiovascular inputs
    Cardiovascular(CardiovascularMeasurements),
    /// Diabetes inputs
    Diabetes(DiabetesMeasurements),
    /// COPD inputs
    Copd(CopdMeasurements),
    /// Asthma inputs
    Asthma(AsthmaMeasurements),
}

impl Measurements {
    /// Default measurement set for a condition
    pub fn defaults(condition: Condition) -> Self {
        match condition {
            Condition::Cardiovascular => CardiovascularMeasurements::default().into(),
            Condition::Diabetes => DiabetesMeasurements::default().into(),
            Condition::Copd => CopdMeasurements::default().into(),
            Condition::Asthma => AsthmaMeasurements::default().into(),
        }
    }

    /// Condition these measurements belong to
    pub fn condition(&self) -> Condition {
        match self {
            Measurements::Cardiovascular(_) => Condition::Cardiovascular,
            Measurements::Diabetes(_) => Condition::Diabetes,
            Measurements::Copd(_) => Condition::Copd,
            Measurements::Asthma(_) => Condition::Asthma,
        }
    }

    /// Fields whose values lie outside their accepted range
    pub fn violations(&self) -> Vec<RangeViolation> {
        match self {
            Measurements::Cardiovascular(m) => m.violations(),
            Measurements::Diabetes(m) => m.violations(),
            Measurements::Copd(m) => m.violations(),
            Measurements::Asthma(m) => m.violations(),
        }
    }

    /// Copy with every ranged field clamped
    pub fn clamped(&self) -> Self {
        match self {
            Measurements::Cardiovascular(m) => m.clamped().into(),
            Measurements::Diabetes(m) => m.clamped().into(),
            Measurements::Copd(m) => m.clamped().into(),
            Measurements::Asthma(m) => m.clamped().into(),
        }
    }
}

impl From<CardiovascularMeasurements> for Measurements {
    fn from(m: CardiovascularMeasurements) -> Self {
        Measurements::Cardiovascular(m)
    }
}

impl From<DiabetesMeasurements> for Measurements {
    fn from(m: DiabetesMeasurements) -> Self {
        Measurements::Diabetes(m)
    }
}

impl From<CopdMeasurements> for Measurements {
    fn from(m: CopdMeasurements) -> Self {
        Measurements::Copd(m)
    }
}

impl From<AsthmaMeasurements> for Measurements {
    fn from(m: AsthmaMeasurements) -> Self {
        Measurements::Asthma(m)
    }
}
