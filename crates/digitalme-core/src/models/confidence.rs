use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::CONFIDENCE_CEILING;

/// Confidence score clamped to [0.0, 0.95].
/// Represents how trustworthy a profile (or one of its attributes) is.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// Never claimable.
    pub const CEILING: f64 = CONFIDENCE_CEILING;

    /// Create a new Confidence, clamping to [0.0, 0.95]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, Self::CEILING))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the stored value is finite and inside [0.0, 0.95].
    /// Only deserialized values can violate this.
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && (0.0..=Self::CEILING).contains(&self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
