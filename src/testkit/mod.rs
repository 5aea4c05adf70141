//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{
    BookmakerQuotes, EventQuotes, MarketQuotes, OutcomeQuote, Probability, ProbabilityEstimator,
};

/// Deterministic RNG for reproducible estimator runs.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Estimator returning a preset probability for every outcome.
#[derive(Debug, Clone, Copy)]
pub struct FixedEstimator(pub f64);

impl ProbabilityEstimator for FixedEstimator {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn estimate(
        &mut self,
        _implied: Probability,
        _outcome: &str,
        _event: &EventQuotes,
    ) -> Probability {
        Probability::clamped(self.0)
    }
}

/// Build an event with one h2h market per bookmaker.
///
/// Each entry is `(bookmaker title, outcome name, price)`.
#[must_use]
pub fn event_with_quotes(
    sport_title: &str,
    home: &str,
    away: &str,
    quotes: &[(&str, &str, f64)],
) -> EventQuotes {
    EventQuotes {
        id: format!("{home}-{away}").to_lowercase().replace(' ', "-"),
        sport_key: String::new(),
        sport_title: sport_title.into(),
        commence_time: None,
        home_team: home.into(),
        away_team: away.into(),
        bookmakers: quotes
            .iter()
            .map(|(title, outcome, price)| BookmakerQuotes {
                key: title.to_lowercase(),
                title: (*title).into(),
                markets: vec![MarketQuotes {
                    key: "h2h".into(),
                    outcomes: vec![OutcomeQuote {
                        name: (*outcome).into(),
                        price: *price,
                    }],
                }],
            })
            .collect(),
    }
}

/// A small two-game NFL board with value spread across books.
#[must_use]
pub fn sample_board() -> Vec<EventQuotes> {
    vec![
        event_with_quotes(
            "NFL",
            "Kansas City Chiefs",
            "Buffalo Bills",
            &[
                ("DraftKings", "Kansas City Chiefs", -120.0),
                ("FanDuel", "Kansas City Chiefs", -115.0),
                ("BetOnline", "Kansas City Chiefs", -110.0),
            ],
        ),
        event_with_quotes(
            "NFL",
            "Detroit Lions",
            "Green Bay Packers",
            &[
                ("DraftKings", "Detroit Lions", 150.0),
                ("FanDuel", "Detroit Lions", 155.0),
            ],
        ),
    ]
}
