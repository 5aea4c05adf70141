//! Two-sided hedge stake computation.
//!
//! Sizes the opposing wager that equalizes total payout across both
//! outcomes, locking in whatever profit (or loss) the line movement allows.

use serde::Serialize;

use super::error::InvalidInput;
use super::money::round_cents;
use super::odds::Odds;

/// Hedge outcome breakdown.
///
/// Internal values keep full precision; use [`HedgeBreakdown::rounded`] at
/// the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HedgeBreakdown {
    hedge_stake: f64,
    profit_if_original_wins: f64,
    profit_if_hedge_wins: f64,
    guaranteed_profit: f64,
}

impl HedgeBreakdown {
    /// Stake to place on the opposing outcome.
    #[must_use]
    pub const fn hedge_stake(&self) -> f64 {
        self.hedge_stake
    }

    /// Net profit across both stakes when the original wager wins.
    #[must_use]
    pub const fn profit_if_original_wins(&self) -> f64 {
        self.profit_if_original_wins
    }

    /// Net profit across both stakes when the hedge wager wins.
    #[must_use]
    pub const fn profit_if_hedge_wins(&self) -> f64 {
        self.profit_if_hedge_wins
    }

    /// The smaller of the two profits; what the hedge locks in regardless of
    /// result. Negative when no profitable hedge exists at these lines.
    #[must_use]
    pub const fn guaranteed_profit(&self) -> f64 {
        self.guaranteed_profit
    }

    /// Monetary view rounded to cents for the presentation boundary.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            hedge_stake: round_cents(self.hedge_stake),
            profit_if_original_wins: round_cents(self.profit_if_original_wins),
            profit_if_hedge_wins: round_cents(self.profit_if_hedge_wins),
            guaranteed_profit: round_cents(self.guaranteed_profit),
        }
    }
}

/// Size the hedge for an open wager of `stake` at `odds` against a quote of
/// `hedge_odds` on the opposing outcome.
///
/// The hedge stake is the original payout divided by the opposing decimal
/// odds, which equalizes the payout on both sides; the two profit figures
/// then differ only by accumulated stakes.
///
/// # Errors
///
/// Returns [`InvalidInput::NonPositiveAmount`] if `stake` is not a positive
/// finite number. Odds arrive already validated by their type.
///
/// # Examples
///
/// ```
/// use vigorish::domain::{hedge, Odds};
///
/// let breakdown = hedge(
///     100.0,
///     Odds::american(150).unwrap(),
///     Odds::american(-120).unwrap(),
/// )
/// .unwrap()
/// .rounded();
/// assert_eq!(breakdown.hedge_stake(), 136.36);
/// assert_eq!(breakdown.guaranteed_profit(), 13.64);
/// ```
pub fn hedge(stake: f64, odds: Odds, hedge_odds: Odds) -> Result<HedgeBreakdown, InvalidInput> {
    if !stake.is_finite() || stake <= 0.0 {
        return Err(InvalidInput::NonPositiveAmount {
            field: "stake",
            value: stake,
        });
    }

    let original = odds.to_decimal();
    let opposing = hedge_odds.to_decimal();

    let payout = stake * original;
    let hedge_stake = payout / opposing;
    let profit_if_original_wins = payout - stake - hedge_stake;
    let profit_if_hedge_wins = hedge_stake * opposing - hedge_stake - stake;

    Ok(HedgeBreakdown {
        hedge_stake,
        profit_if_original_wins,
        profit_if_hedge_wins,
        guaranteed_profit: profit_if_original_wins.min(profit_if_hedge_wins),
    })
}
