//! Field metadata for measurement sets
//!
//! Every input field carries a label, an inclusive range and a default.
//! The classifier does not consult any of this; the presentation layer
//! uses it to prompt for values and to keep them inside their ranges.

use std::fmt;

/// Inclusive range and default for a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Field name as used in intake documents
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Smallest accepted value
    pub min: T,
    /// Largest accepted value
    pub max: T,
    /// Value used when the field is not supplied
    pub default: T,
}

impl<T> Bounds<T>
where
    T: PartialOrd + Copy + Into<f64>,
{
    /// Check if a value lies within the range
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range
    ///
    /// Values with no ordering against the bounds (NaN) fall back to the
    /// default.
    pub fn clamp(&self, value: T) -> T {
        if value.partial_cmp(&self.min).is_none() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Report a violation if the value lies outside the range
    pub fn check(&self, value: T) -> Option<RangeViolation> {
        if self.contains(value) {
            return None;
        }
        Some(RangeViolation {
            field: self.name,
            value: value.into(),
            min: self.min.into(),
            max: self.max.into(),
        })
    }
}

/// Boolean field with a default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    /// Field name as used in intake documents
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Value used when the field is not supplied
    pub default: bool,
}

/// Descriptor for one field of a measurement set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSpec {
    /// Whole-number field
    Integer(&'static Bounds<u32>),
    /// Decimal field
    Decimal(&'static Bounds<f64>),
    /// Yes/no field
    Flag(&'static Flag),
}

impl FieldSpec {
    /// Field name as used in intake documents
    pub fn name(&self) -> &'static str {
        match self {
            FieldSpec::Integer(b) => b.name,
            FieldSpec::Decimal(b) => b.name,
            FieldSpec::Flag(f) => f.name,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldSpec::Integer(b) => b.label,
            FieldSpec::Decimal(b) => b.label,
            FieldSpec::Flag(f) => f.label,
        }
    }

    /// Range rendered for display, e.g. `18-120` or `yes/no`
    pub fn range_text(&self) -> String {
        match self {
            FieldSpec::Integer(b) => format!("{}-{}", b.min, b.max),
            FieldSpec::Decimal(b) => format!("{:.1}-{:.1}", b.min, b.max),
            FieldSpec::Flag(_) => "yes/no".to_string(),
        }
    }

    /// Default rendered for display
    pub fn default_text(&self) -> String {
        match self {
            FieldSpec::Integer(b) => b.default.to_string(),
            FieldSpec::Decimal(b) => format!("{:.1}", b.default),
            FieldSpec::Flag(f) => if f.default { "yes" } else { "no" }.to_string(),
        }
    }
}

/// A field value outside its accepted range
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    /// Offending field
    pub field: &'static str,
    /// Supplied value
    pub value: f64,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}
