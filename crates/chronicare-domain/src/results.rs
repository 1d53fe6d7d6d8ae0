//! Results mapping - per-session record of assessed tiers

use crate::{classify, Condition, Measurements, RiskTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Assessed tier per condition for one session
///
/// Created empty at session start and owned by the presentation layer,
/// which passes it explicitly to [`crate::compose`]. Entries are only
/// added through explicit evaluation; any subset of conditions may be
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsMapping {
    tiers: BTreeMap<Condition, RiskTier>,
}

impl ResultsMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tier for a condition, returning the tier it replaced
    pub fn record(&mut self, condition: Condition, tier: RiskTier) -> Option<RiskTier> {
        self.tiers.insert(condition, tier)
    }

    /// Classify a measurement set and record the result under its condition
    pub fn assess(&mut self, measurements: &Measurements) -> RiskTier {
        let tier = classify(measurements);
        self.tiers.insert(measurements.condition(), tier);
        tier
    }

    /// Tier recorded for a condition, if assessed
    pub fn get(&self, condition: Condition) -> Option<RiskTier> {
        self.tiers.get(&condition).copied()
    }

    /// Check if a condition has been assessed
    pub fn contains(&self, condition: Condition) -> bool {
        self.tiers.contains_key(&condition)
    }

    /// Number of assessed conditions
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Check if nothing has been assessed yet
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Forget all recorded tiers
    pub fn clear(&mut self) {
        self.tiers.clear();
    }

    /// Iterate over recorded tiers in canonical condition order
    pub fn iter(&self) -> impl Iterator<Item = (Condition, RiskTier)> + '_ {
        self.tiers.iter().map(|(c, t)| (*c, *t))
    }
}

impl FromIterator<(Condition, RiskTier)> for ResultsMapping {
    fn from_iter<I: IntoIterator<Item = (Condition, RiskTier)>>(iter: I) -> Self {
        Self {
            tiers: iter.into_iter().collect(),
        }
    }
}
