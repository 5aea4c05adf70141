//! Pluggable true-probability estimators for the EV scan.
//!
//! The scan needs an estimate of each outcome's real win probability to price
//! an edge against the quoted line. No calibrated model ships with this
//! crate; the implementations here are stand-in heuristics, and the trait is
//! the seam where a real model plugs in.
//!
//! Randomness is always injected via a [`rand::Rng`] so runs are
//! reproducible under a seeded generator.

use rand::Rng;

use super::probability::Probability;
use super::scan::EventQuotes;

/// Strategy for estimating an outcome's true win probability.
pub trait ProbabilityEstimator {
    /// Unique identifier for logging and CLI selection.
    fn name(&self) -> &'static str;

    /// Estimate the true win probability for `outcome`, quoted at `implied`,
    /// in the context of `event`'s full board.
    fn estimate(
        &mut self,
        implied: Probability,
        outcome: &str,
        event: &EventQuotes,
    ) -> Probability;
}

/// Implied probability plus bounded uniform noise.
///
/// Draws noise from `[-spread, spread)` and clamps the result into
/// [0.01, 0.99]. The default spread is 0.03.
#[derive(Debug)]
pub struct PerturbedImplied<R> {
    rng: R,
    spread: f64,
}

impl<R: Rng> PerturbedImplied<R> {
    /// Create with the default ±0.03 spread.
    pub fn new(rng: R) -> Self {
        Self::with_spread(rng, 0.03)
    }

    /// Create with a custom noise spread.
    pub fn with_spread(rng: R, spread: f64) -> Self {
        Self { rng, spread }
    }
}

impl<R: Rng> ProbabilityEstimator for PerturbedImplied<R> {
    fn name(&self) -> &'static str {
        "perturbed-implied"
    }

    fn estimate(
        &mut self,
        implied: Probability,
        _outcome: &str,
        _event: &EventQuotes,
    ) -> Probability {
        let noise = self.rng.gen_range(-self.spread..self.spread);
        Probability::clamped(implied.value() + noise)
    }
}

/// Weighted blend of the cross-book consensus and the quote's own implied
/// probability.
///
/// The consensus side carries weight 0.6 and the quote side 0.4 with ±0.02
/// noise, clamped into [0.01, 0.99]. When no other book quotes the outcome
/// the consensus term is 0 and the estimate leans entirely on the quote.
#[derive(Debug)]
pub struct ConsensusBlend<R> {
    rng: R,
    market_weight: f64,
    model_weight: f64,
    spread: f64,
}

impl<R: Rng> ConsensusBlend<R> {
    /// Create with the default 0.6/0.4 weights and ±0.02 spread.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            market_weight: 0.6,
            model_weight: 0.4,
            spread: 0.02,
        }
    }
}

impl<R: Rng> ProbabilityEstimator for ConsensusBlend<R> {
    fn name(&self) -> &'static str {
        "consensus-blend"
    }

    fn estimate(
        &mut self,
        implied: Probability,
        outcome: &str,
        event: &EventQuotes,
    ) -> Probability {
        let consensus = consensus_probability(event, outcome);
        let noise = self.rng.gen_range(-self.spread..self.spread);
        let blended =
            consensus * self.market_weight + (implied.value() + noise) * self.model_weight;
        Probability::clamped(blended)
    }
}

/// Mean implied probability for `outcome` across every book quoting it.
///
/// Quotes that fail odds validation are ignored; an outcome no book quotes
/// yields 0.
#[must_use]
pub fn consensus_probability(event: &EventQuotes, outcome: &str) -> f64 {
    let mut total = 0.0;
    let mut count = 0u32;

    for book in &event.bookmakers {
        for market in &book.markets {
            for quote in &market.outcomes {
                if quote.name != outcome {
                    continue;
                }
                if let Ok(odds) = super::odds::Odds::from_quote(quote.price) {
                    total += odds.implied_probability().value();
                    count += 1;
                }
            }
        }
    }

    if count == 0 {
        0.0
    } else {
        total / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::{BookmakerQuotes, MarketQuotes, OutcomeQuote};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn event(quotes: &[(&str, f64)]) -> EventQuotes {
        EventQuotes {
            id: String::new(),
            sport_key: String::new(),
            sport_title: "NFL".into(),
            commence_time: None,
            home_team: "Home".into(),
            away_team: "Away".into(),
            bookmakers: quotes
                .iter()
                .map(|(name, price)| BookmakerQuotes {
                    key: "book".into(),
                    title: "Book".into(),
                    markets: vec![MarketQuotes {
                        key: "h2h".into(),
                        outcomes: vec![OutcomeQuote {
                            name: (*name).into(),
                            price: *price,
                        }],
                    }],
                })
                .collect(),
        }
    }

    fn implied(value: f64) -> Probability {
        Probability::try_new(value).unwrap()
    }

    #[test]
    fn perturbed_stays_within_spread() {
        let mut estimator = PerturbedImplied::new(StdRng::seed_from_u64(7));
        let board = event(&[]);
        for _ in 0..200 {
            let estimate = estimator.estimate(implied(0.5), "Home", &board);
            assert!((estimate.value() - 0.5).abs() <= 0.03 + 1e-12);
        }
    }

    #[test]
    fn perturbed_is_deterministic_under_a_seed() {
        let board = event(&[]);
        let mut a = PerturbedImplied::new(StdRng::seed_from_u64(42));
        let mut b = PerturbedImplied::new(StdRng::seed_from_u64(42));
        for _ in 0..50 {
            assert_eq!(
                a.estimate(implied(0.4), "Home", &board).value(),
                b.estimate(implied(0.4), "Home", &board).value()
            );
        }
    }

    #[test]
    fn perturbed_clamps_near_the_edges() {
        let mut estimator = PerturbedImplied::with_spread(StdRng::seed_from_u64(3), 0.5);
        let board = event(&[]);
        for _ in 0..100 {
            let estimate = estimator.estimate(implied(0.99), "Home", &board);
            assert!(estimate.value() <= 0.99);
            assert!(estimate.value() >= 0.01);
        }
    }

    #[test]
    fn consensus_is_mean_implied_for_the_outcome() {
        // Two books on "Home": +150 implies 0.40, -150 implies 0.60
        let board = event(&[("Home", 150.0), ("Home", -150.0)]);
        assert!((consensus_probability(&board, "Home") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn consensus_ignores_other_outcomes() {
        let board = event(&[("Home", 150.0), ("Away", -300.0)]);
        assert!((consensus_probability(&board, "Home") - 0.4).abs() < 1e-12);
    }

    #[test]
    fn consensus_skips_unusable_quotes() {
        let board = event(&[("Home", 150.0), ("Home", 0.0), ("Home", 0.5)]);
        assert!((consensus_probability(&board, "Home") - 0.4).abs() < 1e-12);
    }

    #[test]
    fn consensus_of_unquoted_outcome_is_zero() {
        assert_eq!(consensus_probability(&event(&[]), "Home"), 0.0);
        assert_eq!(
            consensus_probability(&event(&[("Away", 150.0)]), "Home"),
            0.0
        );
    }

    #[test]
    fn blend_weighs_consensus_over_quote() {
        // Consensus on "Home" is 0.5; this quote implies 0.40. The blend sits
        // between, pulled toward the consensus side, within the noise band.
        let board = event(&[("Home", 150.0), ("Home", -150.0)]);
        let mut estimator = ConsensusBlend::new(StdRng::seed_from_u64(11));
        let estimate = estimator.estimate(implied(0.4), "Home", &board);
        let center = 0.5 * 0.6 + 0.4 * 0.4;
        assert!((estimate.value() - center).abs() <= 0.02 * 0.4 + 1e-12);
    }
}
