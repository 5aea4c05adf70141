//! Kelly-criterion stake sizing.
//!
//! One function covers full and fractional Kelly: the `multiplier` argument
//! scales the fraction after the negative-edge clamp, so half-Kelly is
//! `multiplier = 0.5` rather than a separate code path.

use serde::Serialize;

use super::error::InvalidInput;
use super::odds::Odds;
use super::probability::Probability;

/// Multiplier for an unscaled (full) Kelly stake.
pub const FULL_KELLY: f64 = 1.0;

/// Kelly sizing result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KellyBreakdown {
    kelly_fraction: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommended_stake: Option<f64>,
}

impl KellyBreakdown {
    /// Fraction of bankroll to stake, after the multiplier. Never negative:
    /// a negative edge recommends no bet, not a short stake.
    #[must_use]
    pub const fn kelly_fraction(&self) -> f64 {
        self.kelly_fraction
    }

    /// `fraction * bankroll`, present only when a bankroll was supplied.
    #[must_use]
    pub const fn recommended_stake(&self) -> Option<f64> {
        self.recommended_stake
    }
}

/// Compute the Kelly stake fraction for a wager.
///
/// With `b = decimal - 1` and `q = 1 - p`, the full-Kelly fraction is
/// `(b*p - q) / b`, clamped to ≥ 0 and then scaled by `multiplier`. When
/// `bankroll` is supplied the result also carries the recommended stake.
///
/// # Errors
///
/// Returns [`InvalidInput::MultiplierOutOfRange`] unless
/// `0 < multiplier ≤ 1`, and [`InvalidInput::NonPositiveAmount`] for a
/// non-positive bankroll.
///
/// # Examples
///
/// ```
/// use vigorish::domain::{kelly_stake, Odds, Probability, FULL_KELLY};
///
/// let kelly = kelly_stake(
///     Probability::try_new(0.55).unwrap(),
///     Odds::american(150).unwrap(),
///     FULL_KELLY,
///     None,
/// )
/// .unwrap();
/// assert!((kelly.kelly_fraction() - 0.25).abs() < 1e-9);
/// ```
pub fn kelly_stake(
    probability: Probability,
    odds: Odds,
    multiplier: f64,
    bankroll: Option<f64>,
) -> Result<KellyBreakdown, InvalidInput> {
    if !multiplier.is_finite() || multiplier <= 0.0 || multiplier > 1.0 {
        return Err(InvalidInput::MultiplierOutOfRange { multiplier });
    }
    if let Some(amount) = bankroll {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InvalidInput::NonPositiveAmount {
                field: "bankroll",
                value: amount,
            });
        }
    }

    let b = odds.to_decimal() - 1.0;
    let q = probability.complement();
    let raw = (b * probability.value() - q) / b;
    let fraction = raw.max(0.0) * multiplier;

    Ok(KellyBreakdown {
        kelly_fraction: fraction,
        recommended_stake: bankroll.map(|amount| fraction * amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(value: f64) -> Probability {
        Probability::try_new(value).unwrap()
    }

    #[test]
    fn worked_example_plus_150() {
        let kelly = kelly_stake(p(0.55), Odds::american(150).unwrap(), FULL_KELLY, None).unwrap();
        assert!((kelly.kelly_fraction() - 0.25).abs() < 1e-9);
        assert!(kelly.recommended_stake().is_none());
    }

    #[test]
    fn negative_edge_clamps_to_zero() {
        let kelly = kelly_stake(p(0.30), Odds::american(150).unwrap(), FULL_KELLY, None).unwrap();
        assert_eq!(kelly.kelly_fraction(), 0.0);
    }

    #[test]
    fn bankroll_yields_recommended_stake() {
        let kelly =
            kelly_stake(p(0.55), Odds::american(150).unwrap(), FULL_KELLY, Some(1000.0)).unwrap();
        assert!((kelly.recommended_stake().unwrap() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn half_kelly_halves_the_fraction() {
        let full = kelly_stake(p(0.55), Odds::american(150).unwrap(), FULL_KELLY, None).unwrap();
        let half = kelly_stake(p(0.55), Odds::american(150).unwrap(), 0.5, None).unwrap();
        assert!((half.kelly_fraction() - full.kelly_fraction() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn multiplier_bounds_enforced() {
        let odds = Odds::american(150).unwrap();
        assert!(kelly_stake(p(0.55), odds, 0.0, None).is_err());
        assert!(kelly_stake(p(0.55), odds, 1.5, None).is_err());
        assert!(kelly_stake(p(0.55), odds, -0.25, None).is_err());
    }

    #[test]
    fn rejects_non_positive_bankroll() {
        let odds = Odds::american(150).unwrap();
        assert!(matches!(
            kelly_stake(p(0.55), odds, FULL_KELLY, Some(0.0)),
            Err(InvalidInput::NonPositiveAmount { field: "bankroll", .. })
        ));
    }

    #[test]
    fn fraction_matches_formula_when_positive() {
        for (prob, decimal) in [(0.55, 2.5), (0.6, 2.0), (0.35, 4.0)] {
            let expected = ((decimal - 1.0) * prob - (1.0 - prob)) / (decimal - 1.0);
            let kelly =
                kelly_stake(p(prob), Odds::decimal(decimal).unwrap(), FULL_KELLY, None).unwrap();
            if expected >= 0.0 {
                assert!((kelly.kelly_fraction() - expected).abs() < 1e-12);
            } else {
                assert_eq!(kelly.kelly_fraction(), 0.0);
            }
        }
    }
}
