//! Monetary rounding at the presentation boundary.
//!
//! Core computations stay full precision; rounding to cents happens only when
//! a value leaves the core (display, JSON output, stored breakdowns).

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

/// Round a monetary amount to cents, half away from zero.
///
/// Goes through `Decimal` so amounts like `13.636363…` come out as `13.64`
/// rather than a nearby binary float.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_cents(13.636363636), 13.64);
        assert_eq!(round_cents(37.5), 37.5);
        assert_eq!(round_cents(0.004), 0.0);
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        assert_eq!(round_cents(2.005), 2.01);
        assert_eq!(round_cents(-2.005), -2.01);
    }

    #[test]
    fn agrees_with_decimal_rounding() {
        let rounded = Decimal::from_f64(round_cents(13.636363636)).unwrap();
        assert_eq!(rounded, dec!(13.64));
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_cents(f64::NAN).is_nan());
    }
}
