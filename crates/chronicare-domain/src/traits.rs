//! Trait definitions shared by the per-condition measurement sets
//!
//! The presentation layer works against [`MeasurementSet`] to decode,
//! range-check and classify any condition's inputs with one generic code
//! path, then widens the result into [`Measurements`].

use crate::{Condition, FieldSpec, Measurements, RangeViolation, RiskTier};
use serde::de::DeserializeOwned;

/// A fixed-shape record of clinical values for one condition
///
/// `Default` yields the form defaults, and deserialization fills any field
/// the document leaves out from those defaults.
///
/// Implemented by each measurement struct in [`crate::measurements`].
pub trait MeasurementSet: Default + DeserializeOwned + Into<Measurements> {
    /// Condition this measurement set belongs to
    const CONDITION: Condition;

    /// Field catalogue (labels, ranges, defaults) in form order
    fn fields() -> &'static [FieldSpec];

    /// Classify this measurement set into a risk tier
    fn classify(&self) -> RiskTier;

    /// Fields whose values lie outside their accepted range
    fn violations(&self) -> Vec<RangeViolation>;

    /// Copy of this measurement set with every ranged field clamped
    fn clamped(&self) -> Self;
}
