//! Expected value of a single wager.

use serde::Serialize;

use super::error::InvalidInput;
use super::money::round_cents;
use super::odds::Odds;
use super::probability::Probability;

/// Stake assumed when the caller does not name one.
pub const DEFAULT_STAKE: f64 = 100.0;

/// Expected-value breakdown for one wager at a given stake.
///
/// Derived fields are computed once at construction and never mutated;
/// calling [`expected_value`] twice with identical inputs yields identical
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvBreakdown {
    implied_probability: f64,
    expected_value: f64,
    ev_percent: f64,
}

impl EvBreakdown {
    /// The win probability the odds imply if treated as fair.
    #[must_use]
    pub const fn implied_probability(&self) -> f64 {
        self.implied_probability
    }

    /// Probability-weighted average profit, in stake units.
    #[must_use]
    pub const fn expected_value(&self) -> f64 {
        self.expected_value
    }

    /// Expected value relative to the stake, as a percentage.
    #[must_use]
    pub const fn ev_percent(&self) -> f64 {
        self.ev_percent
    }

    /// Whether the wager has positive expected value.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.expected_value > 0.0
    }

    /// Monetary view rounded to cents for the presentation boundary.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            implied_probability: self.implied_probability,
            expected_value: round_cents(self.expected_value),
            ev_percent: round_cents(self.ev_percent),
        }
    }
}

/// Compute the expected value of staking `stake` at `odds` with an estimated
/// true win probability of `probability`.
///
/// `win_amount = stake * (decimal - 1)`, the loss side risks the full stake,
/// and `expected_value = p * win_amount - (1 - p) * stake`. Pure function of
/// its inputs; probability and odds arrive already validated by their types.
///
/// # Errors
///
/// Returns [`InvalidInput::NonPositiveAmount`] if `stake` is not a positive
/// finite number.
///
/// # Examples
///
/// ```
/// use vigorish::domain::{expected_value, Odds, Probability};
///
/// let ev = expected_value(
///     Probability::try_new(0.55).unwrap(),
///     Odds::american(150).unwrap(),
///     100.0,
/// )
/// .unwrap();
/// assert!((ev.expected_value() - 37.5).abs() < 1e-9);
/// assert!((ev.ev_percent() - 37.5).abs() < 1e-9);
/// ```
pub fn expected_value(
    probability: Probability,
    odds: Odds,
    stake: f64,
) -> Result<EvBreakdown, InvalidInput> {
    if !stake.is_finite() || stake <= 0.0 {
        return Err(InvalidInput::NonPositiveAmount {
            field: "stake",
            value: stake,
        });
    }

    let decimal = odds.to_decimal();
    let win_amount = stake * (decimal - 1.0);
    let loss_amount = stake;
    let ev = probability.value() * win_amount - probability.complement() * loss_amount;

    Ok(EvBreakdown {
        implied_probability: 1.0 / decimal,
        expected_value: ev,
        ev_percent: ev / stake * 100.0,
    })
}
