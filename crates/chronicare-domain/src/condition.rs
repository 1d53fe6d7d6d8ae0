//! Condition module - the closed set of assessed chronic diseases

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chronic condition covered by the assessment
///
/// Variants are declared in canonical plan order, which is also the
/// derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Cardiovascular disease
    Cardiovascular,

    /// Diabetes
    Diabetes,

    /// Chronic obstructive pulmonary disease
    #[serde(rename = "COPD")]
    Copd,

    /// Asthma
    Asthma,
}

impl Condition {
    /// All conditions, in canonical plan order
    pub const ALL: [Condition; 4] = [
        Condition::Cardiovascular,
        Condition::Diabetes,
        Condition::Copd,
        Condition::Asthma,
    ];

    /// Get the condition name as displayed to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Cardiovascular => "Cardiovascular",
            Condition::Diabetes => "Diabetes",
            Condition::Copd => "COPD",
            Condition::Asthma => "Asthma",
        }
    }

    /// Lowercase key used in intake documents and command arguments
    pub fn key(&self) -> &'static str {
        match self {
            Condition::Cardiovascular => "cardiovascular",
            Condition::Diabetes => "diabetes",
            Condition::Copd => "copd",
            Condition::Asthma => "asthma",
        }
    }

    /// Parse a condition from a string (case-insensitive, short aliases accepted)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cardiovascular" | "cardio" | "cvd" => Some(Condition::Cardiovascular),
            "diabetes" => Some(Condition::Diabetes),
            "copd" => Some(Condition::Copd),
            "asthma" => Some(Condition::Asthma),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid condition: {}", s))
    }
}
