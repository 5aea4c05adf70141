//! Odds quotes and format conversion.
//!
//! Two quoting conventions are supported:
//!
//! - **American**: a signed integer with magnitude ≥ 100. Positive is the
//!   profit on a 100 stake, negative is the stake needed to profit 100.
//! - **Decimal**: a real > 1, the total payout multiple per unit staked.
//!
//! [`Odds::from_quote`] applies the convention every upstream feed uses for a
//! raw number: magnitude ≥ 100 reads as American, anything strictly between
//! 1 and 100 reads as decimal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::InvalidInput;
use super::probability::Probability;

/// A single odds quote in one of the two supported conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Odds {
    /// American quote, e.g. `+150` or `-120`.
    American(i64),
    /// Decimal quote, e.g. `2.5`.
    Decimal(f64),
}

impl Odds {
    /// Create American odds, rejecting 0 and magnitudes below 100.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ZeroOdds`] for 0 and
    /// [`InvalidInput::AmericanOutOfRange`] for magnitudes below 100.
    pub fn american(quote: i64) -> Result<Self, InvalidInput> {
        if quote == 0 {
            return Err(InvalidInput::ZeroOdds);
        }
        if quote.abs() < 100 {
            return Err(InvalidInput::AmericanOutOfRange { quote });
        }
        Ok(Self::American(quote))
    }

    /// Create decimal odds, rejecting values ≤ 1.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::DecimalOutOfRange`] for non-finite values or
    /// values ≤ 1 (a payout multiple of 1 returns only the stake).
    pub fn decimal(value: f64) -> Result<Self, InvalidInput> {
        if !value.is_finite() || value <= 1.0 {
            return Err(InvalidInput::DecimalOutOfRange { quote: value });
        }
        Ok(Self::Decimal(value))
    }

    /// Read a raw numeric quote using the feed convention.
    ///
    /// A value ≥ 100 or ≤ -100 is American (rounded to the nearest integer);
    /// a value strictly between 1 and 100 is already decimal. Decimal odds of
    /// 100 or more cannot be expressed this way and must be constructed with
    /// [`Odds::decimal`] explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::ZeroOdds`] for 0 and
    /// [`InvalidInput::UnrecognizedQuote`] for anything matching neither
    /// convention (negatives above -100, values ≤ 1, non-finite values).
    pub fn from_quote(quote: f64) -> Result<Self, InvalidInput> {
        if quote == 0.0 {
            return Err(InvalidInput::ZeroOdds);
        }
        if !quote.is_finite() {
            return Err(InvalidInput::UnrecognizedQuote { quote });
        }
        if quote >= 100.0 || quote <= -100.0 {
            return Self::american(quote.round() as i64);
        }
        if quote > 1.0 {
            return Self::decimal(quote);
        }
        Err(InvalidInput::UnrecognizedQuote { quote })
    }

    /// Convert to the decimal payout multiple.
    ///
    /// `1 + q/100` for positive American quotes, `1 + 100/|q|` for negative
    /// ones, passthrough for decimal. Infallible once constructed: every
    /// valid quote converts to a decimal > 1.
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        match self {
            Self::American(quote) if quote > 0 => 1.0 + quote as f64 / 100.0,
            Self::American(quote) => 1.0 + 100.0 / quote.unsigned_abs() as f64,
            Self::Decimal(value) => value,
        }
    }

    /// The win probability this quote represents if treated as fair,
    /// `1 / decimal`.
    #[must_use]
    pub fn implied_probability(self) -> Probability {
        Probability::from_unit_interval(1.0 / self.to_decimal())
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::American(quote) => write!(f, "{quote:+}"),
            Self::Decimal(value) => write!(f, "{value:.2}"),
        }
    }
}
