//! Risk classifier - fixed threshold rules per condition
//!
//! | Condition      | High if                                              |
//! |----------------|------------------------------------------------------|
//! | Cardiovascular | smoker AND systolic_bp > 140                         |
//! | Diabetes       | fasting_glucose > 126 OR hba1c > 6.5                 |
//! | COPD           | smoking_years > 20 AND exacerbations_last_year > 2   |
//! | Asthma         | frequency_of_symptoms > 4 OR nighttime_symptoms > 2  |
//!
//! Anything else is `Moderate`. No rule yields `Low`.

use crate::measurements::{
    AsthmaMeasurements, CardiovascularMeasurements, CopdMeasurements, DiabetesMeasurements,
    Measurements,
};
use crate::RiskTier;

const SYSTOLIC_BP_HIGH: u32 = 140;
const FASTING_GLUCOSE_HIGH: u32 = 126;
const HBA1C_HIGH: f64 = 6.5;
const SMOKING_YEARS_HIGH: u32 = 20;
const EXACERBATIONS_HIGH: u32 = 2;
const SYMPTOM_DAYS_HIGH: u32 = 4;
const NIGHTTIME_DAYS_HIGH: u32 = 2;

fn tier(high: bool) -> RiskTier {
    if high {
        RiskTier::High
    } else {
        RiskTier::Moderate
    }
}

/// Classify cardiovascular risk
pub fn classify_cardiovascular(m: &CardiovascularMeasurements) -> RiskTier {
    tier(m.smoker && m.systolic_bp > SYSTOLIC_BP_HIGH)
}

/// Classify diabetes risk
pub fn classify_diabetes(m: &DiabetesMeasurements) -> RiskTier {
    tier(m.fasting_glucose > FASTING_GLUCOSE_HIGH || m.hba1c > HBA1C_HIGH)
}

/// Classify COPD risk
pub fn classify_copd(m: &CopdMeasurements) -> RiskTier {
    tier(m.smoking_years > SMOKING_YEARS_HIGH && m.exacerbations_last_year > EXACERBATIONS_HIGH)
}

/// Classify asthma risk
pub fn classify_asthma(m: &AsthmaMeasurements) -> RiskTier {
    tier(
        m.frequency_of_symptoms > SYMPTOM_DAYS_HIGH || m.nighttime_symptoms > NIGHTTIME_DAYS_HIGH,
    )
}

/// Classify any condition's measurement set
pub fn classify(measurements: &Measurements) -> RiskTier {
    match measurements {
        Measurements::Cardiovascular(m) => classify_cardiovascular(m),
        Measurements::Diabetes(m) => classify_diabetes(m),
        Measurements::Copd(m) => classify_copd(m),
        Measurements::Asthma(m) => classify_asthma(m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardiovascular_smoker_with_high_bp() {
        let m = CardiovascularMeasurements {
            smoker: true,
            systolic_bp: 150,
            ..Default::default()
        };
        assert_eq!(classify_cardiovascular(&m), RiskTier::High);
    }

    #[test]
    fn test_cardiovascular_non_smoker() {
        let m = CardiovascularMeasurements {
            smoker: false,
            systolic_bp: 150,
            ..Default::default()
        };
        assert_eq!(classify_cardiovascular(&m), RiskTier::Moderate);
    }

    #[test]
    fn test_cardiovascular_threshold_is_strict() {
        let m = CardiovascularMeasurements {
            smoker: true,
            systolic_bp: 140,
            ..Default::default()
        };
        assert_eq!(classify_cardiovascular(&m), RiskTier::Moderate);
    }

    #[test]
    fn test_diabetes_glucose_or_hba1c() {
        let glucose = DiabetesMeasurements {
            fasting_glucose: 130,
            hba1c: 5.0,
            ..Default::default()
        };
        assert_eq!(classify_diabetes(&glucose), RiskTier::High);

        let hba1c = DiabetesMeasurements {
            fasting_glucose: 100,
            hba1c: 6.6,
            ..Default::default()
        };
        assert_eq!(classify_diabetes(&hba1c), RiskTier::High);

        let borderline = DiabetesMeasurements {
            fasting_glucose: 126,
            hba1c: 6.5,
            ..Default::default()
        };
        assert_eq!(classify_diabetes(&borderline), RiskTier::Moderate);
    }

    #[test]
    fn test_copd_requires_both() {
        let high = CopdMeasurements {
            smoking_years: 25,
            exacerbations_last_year: 3,
            ..Default::default()
        };
        assert_eq!(classify_copd(&high), RiskTier::High);

        let moderate = CopdMeasurements {
            smoking_years: 25,
            exacerbations_last_year: 1,
            ..Default::default()
        };
        assert_eq!(classify_copd(&moderate), RiskTier::Moderate);
    }

    #[test]
    fn test_asthma_either_symptom_count() {
        let daytime = AsthmaMeasurements {
            frequency_of_symptoms: 5,
            nighttime_symptoms: 0,
            ..Default::default()
        };
        assert_eq!(classify_asthma(&daytime), RiskTier::High);

        let nighttime = AsthmaMeasurements {
            frequency_of_symptoms: 0,
            nighttime_symptoms: 3,
            ..Default::default()
        };
        assert_eq!(classify_asthma(&nighttime), RiskTier::High);

        assert_eq!(classify_asthma(&AsthmaMeasurements::default()), RiskTier::Moderate);
    }

    #[test]
    fn test_ignored_fields_do_not_change_outcome() {
        let base = CardiovascularMeasurements::default();
        let older = CardiovascularMeasurements {
            age: 119,
            cholesterol: 299,
            ..base
        };
        assert_eq!(classify_cardiovascular(&base), classify_cardiovascular(&older));
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let m = CopdMeasurements {
            smoking_years: 30,
            exacerbations_last_year: 4,
            ..Default::default()
        };
        assert_eq!(classify(&Measurements::Copd(m)), classify_copd(&m));
    }

    #[test]
    fn test_out_of_range_values_still_classify() {
        let m = CardiovascularMeasurements {
            age: 0,
            systolic_bp: u32::MAX,
            smoker: true,
            cholesterol: 0,
        };
        assert_eq!(classify_cardiovascular(&m), RiskTier::High);

        let d = DiabetesMeasurements {
            hba1c: f64::NAN,
            ..Default::default()
        };
        assert_eq!(classify_diabetes(&d), RiskTier::Moderate);
    }
}
