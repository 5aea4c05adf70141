//! Probability newtype with open-interval validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::InvalidInput;

/// An estimated true win probability, strictly between 0 and 1.
///
/// The inner value is private so every instance went through validation or
/// clamping; downstream math never has to re-check the range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Create a probability, rejecting values outside the open interval (0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ProbabilityOutOfRange`] for values that are
    /// non-finite, ≤ 0, or ≥ 1. A certainty of exactly 0 or 1 is not a bet.
    pub fn try_new(value: f64) -> Result<Self, InvalidInput> {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            return Err(InvalidInput::ProbabilityOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Clamp an unvalidated model estimate into [0.01, 0.99].
    ///
    /// Estimators produce perturbed values that can drift past the edges;
    /// clamping keeps them usable without failing the whole scan.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.5);
        }
        Self(value.clamp(0.01, 0.99))
    }

    /// Build from a value already known to lie in (0, 1).
    pub(crate) fn from_unit_interval(value: f64) -> Self {
        debug_assert!(value > 0.0 && value < 1.0, "value {value} outside (0, 1)");
        Self(value)
    }

    /// Get the probability as a plain float.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Get the losing-side probability, `1 - p`.
    #[must_use]
    pub fn complement(self) -> f64 {
        1.0 - self.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
