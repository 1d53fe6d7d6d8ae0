//! Recommendation table and care plan composition
//!
//! The table maps every (condition, tier) pair to a static Markdown block.
//! `Low` blocks are currently unreachable through the classifier but are
//! kept in the table unchanged.

use crate::{Condition, ResultsMapping, RiskTier};

/// Separator placed between blocks in a composed plan
pub const BLOCK_SEPARATOR: &str = "\n\n";

const CARDIOVASCULAR_HIGH: &str = concat!(
    "### Cardiovascular Risk - High Level\n",
    "- **Lifestyle Changes**: Adopt the DASH diet, reduce sodium, increase fruits, vegetables, whole grains.\n",
    "- **Medications**: Initiate antihypertensives (e.g., ACE inhibitors), high-intensity statins per AHA/ACC guidelines.\n",
    "- **Follow-Up**: Reassess blood pressure, lipids every 3 months.\n",
    "- **Resources**: [AHA Guidelines](https://www.heart.org/en/professional/quality-improvement/aha-quality-improvement-guidelines)",
);

const CARDIOVASCULAR_MODERATE: &str = concat!(
    "### Cardiovascular Risk - Moderate Level\n",
    "- **Lifestyle**: Balanced diet, reduce processed foods, increase activity.\n",
    "- **Medications**: Moderate-intensity statins if needed, monitor blood pressure closely.\n",
    "- **Follow-Up**: Follow-ups every 6-12 months.\n",
);

const CARDIOVASCULAR_LOW: &str =
    "### Cardiovascular Risk - Low Level\nRoutine check-ups recommended annually.\n";

const DIABETES_HIGH: &str = concat!(
    "### Diabetes Risk - High Level\n",
    "- **Lifestyle Changes**: Low-carb, high-fiber diet; 150 mins exercise weekly.\n",
    "- **Medications**: Start metformin, consider SGLT-2 inhibitors/GLP-1 as per ADA.\n",
    "- **Monitoring**: HbA1c every 3 months.\n",
    "- **Resources**: [ADA Standards of Medical Care](https://www.diabetes.org/clinical-resources/standards-of-care)",
);

const DIABETES_MODERATE: &str = concat!(
    "### Diabetes Risk - Moderate Level\n",
    "- **Diet & Exercise**: Mediterranean or DASH diet, 150 mins activity weekly.\n",
    "- **Monitoring**: HbA1c every 6 months.\n",
);

const DIABETES_LOW: &str =
    "### Diabetes Risk - Low Level\nRoutine annual fasting glucose check recommended.\n";

const COPD_HIGH: &str = concat!(
    "### COPD Risk - High Level\n",
    "- **Smoking Cessation**: Immediate cessation, pharmacotherapy as needed.\n",
    "- **Medications**: LABA or LAMA, inhaled corticosteroids for frequent exacerbators.\n",
    "- **Pulmonary Rehab**: For improved respiratory function.\n",
    "- **Follow-Up**: Lung function every 3 months.\n",
    "- **Resources**: [GOLD Guidelines](https://goldcopd.org/gold-reports/)",
);

const COPD_MODERATE: &str = concat!(
    "### COPD Risk - Moderate Level\n",
    "- **Avoid Pollutants**: Limit exposure to irritants.\n",
    "- **Medications**: Short-acting bronchodilators as needed.\n",
    "- **Follow-Up**: Annual pulmonary function test.\n",
);

const COPD_LOW: &str = "### COPD Risk - Low Level\nAvoid smoking, occupational hazards; annual flu vaccine recommended.\n";

const ASTHMA_HIGH: &str = concat!(
    "### Asthma Risk - High Level\n",
    "- **Medications**: Inhaled corticosteroids, long-acting beta-agonists.\n",
    "- **Action Plan**: Personalized asthma action plan.\n",
    "- **Follow-Up**: Monthly visits until stable.\n",
    "- **Resources**: [GINA Guidelines](https://ginasthma.org/gina-reports/)",
);

const ASTHMA_MODERATE: &str = concat!(
    "### Asthma Risk - Moderate Level\n",
    "- **Medications**: Inhaled corticosteroids, evaluate long-acting bronchodilator.\n",
    "- **Follow-Up**: Every 3-6 months.\n",
);

const ASTHMA_LOW: &str =
    "### Asthma Risk - Low Level\nAnnual check-ups to monitor lung function.\n";

/// Look up the recommendation block for a (condition, tier) pair
pub fn recommendation(condition: Condition, tier: RiskTier) -> &'static str {
    match (condition, tier) {
        (Condition::Cardiovascular, RiskTier::High) => CARDIOVASCULAR_HIGH,
        (Condition::Cardiovascular, RiskTier::Moderate) => CARDIOVASCULAR_MODERATE,
        (Condition::Cardiovascular, RiskTier::Low) => CARDIOVASCULAR_LOW,
        (Condition::Diabetes, RiskTier::High) => DIABETES_HIGH,
        (Condition::Diabetes, RiskTier::Moderate) => DIABETES_MODERATE,
        (Condition::Diabetes, RiskTier::Low) => DIABETES_LOW,
        (Condition::Copd, RiskTier::High) => COPD_HIGH,
        (Condition::Copd, RiskTier::Moderate) => COPD_MODERATE,
        (Condition::Copd, RiskTier::Low) => COPD_LOW,
        (Condition::Asthma, RiskTier::High) => ASTHMA_HIGH,
        (Condition::Asthma, RiskTier::Moderate) => ASTHMA_MODERATE,
        (Condition::Asthma, RiskTier::Low) => ASTHMA_LOW,
    }
}

/// Compose a unified care plan from assessed tiers
///
/// Blocks appear in canonical condition order regardless of how the
/// results were recorded; conditions without a result contribute nothing.
/// Returns an empty string when no condition has been assessed.
pub fn compose(results: &ResultsMapping) -> String {
    Condition::ALL
        .iter()
        .filter_map(|&condition| {
            results
                .get(condition)
                .map(|tier| recommendation(condition, tier))
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
