//! Tier module - risk levels produced by the classifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk tier assigned to a condition
///
/// Tiers carry equality only; no ordering is implied between them.
/// The current rule set never produces `Low`, but the recommendation
/// table still defines text for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Routine follow-up only
    Low,

    /// Default outcome when no high-risk rule fires
    Moderate,

    /// A condition's high-risk rule fired
    High,
}

impl RiskTier {
    /// All tiers, in table order
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    /// Get the tier name as displayed to users
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    /// Parse a tier from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(RiskTier::Low),
            "moderate" => Some(RiskTier::Moderate),
            "high" => Some(RiskTier::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid risk tier: {}", s))
    }
}
