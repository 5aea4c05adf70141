//! Heuristic ranking of scanned value bets.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::scan::ValueBet;

/// Ranking settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Bookmakers that receive a flat score bonus (limits, liquidity, and
    /// settlement speed make some books worth a thumb on the scale).
    #[serde(default = "default_boosted_books")]
    pub boosted_books: Vec<String>,

    /// The flat bonus added per boosted book.
    #[serde(default = "default_book_bonus")]
    pub book_bonus: f64,
}

fn default_boosted_books() -> Vec<String> {
    vec!["DraftKings".to_string(), "FanDuel".to_string()]
}

fn default_book_bonus() -> f64 {
    2.0
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            boosted_books: default_boosted_books(),
            book_bonus: default_book_bonus(),
        }
    }
}

/// A value bet with its ranking score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedBet {
    #[serde(flatten)]
    bet: ValueBet,
    score: f64,
}

impl RankedBet {
    /// The underlying value bet.
    #[must_use]
    pub const fn bet(&self) -> &ValueBet {
        &self.bet
    }

    /// Composite ranking score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }
}

/// Score and order value bets, best first.
///
/// `score = 2 * ev + 100 * edge`, plus the configured flat bonus when the
/// posting book is on the boosted list. A display heuristic for triaging a
/// shortlist, not a probability statement.
#[must_use]
pub fn rank_bets(bets: Vec<ValueBet>, config: &RankingConfig) -> Vec<RankedBet> {
    let mut ranked: Vec<RankedBet> = bets
        .into_iter()
        .map(|bet| {
            let mut score = 2.0 * bet.expected_value() + 100.0 * bet.edge();
            if config
                .boosted_books
                .iter()
                .any(|book| book == bet.bookmaker())
            {
                score += config.book_bonus;
            }
            RankedBet { bet, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimator::ProbabilityEstimator;
    use crate::domain::probability::Probability;
    use crate::domain::scan::{
        scan_events, BookmakerQuotes, EventQuotes, MarketQuotes, OutcomeQuote, ScanConfig,
    };

    struct Fixed(f64);

    impl ProbabilityEstimator for Fixed {
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

    fn bets_from(books: &[(&str, f64)]) -> Vec<ValueBet> {
        let events = vec![EventQuotes {
            id: String::new(),
            sport_key: String::new(),
            sport_title: "NFL".into(),
            commence_time: None,
            home_team: "Home".into(),
            away_team: "Away".into(),
            bookmakers: books
                .iter()
                .map(|(title, price)| BookmakerQuotes {
                    key: title.to_lowercase(),
                    title: (*title).into(),
                    markets: vec![MarketQuotes {
                        key: "h2h".into(),
                        outcomes: vec![OutcomeQuote {
                            name: "Home".into(),
                            price: *price,
                        }],
                    }],
                })
                .collect(),
        }];
        scan_events(&events, &ScanConfig::default(), &mut Fixed(0.55)).unwrap()
    }

    #[test]
    fn score_combines_ev_and_edge() {
        let bets = bets_from(&[("SomeBook", 150.0)]);
        let ranked = rank_bets(bets, &RankingConfig::default());
        assert_eq!(ranked.len(), 1);
        // ev 37.5, edge 0.15: 2*37.5 + 100*0.15 = 90, no bonus
        assert!((ranked[0].score() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn boosted_book_gets_bonus() {
        let bets = bets_from(&[("DraftKings", 150.0), ("SomeBook", 150.0)]);
        let ranked = rank_bets(bets, &RankingConfig::default());
        assert_eq!(ranked[0].bet().bookmaker(), "DraftKings");
        assert!((ranked[0].score() - ranked[1].score() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn bonus_can_reorder_close_scores() {
        // FanDuel's slightly worse price still outranks the +2 gap.
        let bets = bets_from(&[("SomeBook", 150.0), ("FanDuel", 149.0)]);
        let ranked = rank_bets(bets, &RankingConfig::default());
        assert_eq!(ranked[0].bet().bookmaker(), "FanDuel");
    }

    #[test]
    fn custom_config_controls_boost() {
        let config = RankingConfig {
            boosted_books: vec!["SomeBook".into()],
            book_bonus: 10.0,
        };
        let bets = bets_from(&[("DraftKings", 150.0), ("SomeBook", 150.0)]);
        let ranked = rank_bets(bets, &config);
        assert_eq!(ranked[0].bet().bookmaker(), "SomeBook");
        assert!((ranked[0].score() - ranked[1].score() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_ranks_empty() {
        assert!(rank_bets(vec![], &RankingConfig::default()).is_empty());
    }
}
