//! Multi-book quote boards and the positive-EV scan.
//!
//! The board types mirror the odds-feed JSON shape
//! (event → bookmaker → market → outcome), so a feed response deserializes
//! straight into them. [`scan_events`] walks a board, asks the injected
//! estimator for a true probability per outcome, and keeps every quote with
//! positive expected value.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use super::error::InvalidInput;
use super::estimator::ProbabilityEstimator;
use super::ev::expected_value;
use super::odds::Odds;

/// One upcoming event with quotes from every covering bookmaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventQuotes {
    /// Feed-assigned event ID.
    #[serde(default)]
    pub id: String,
    /// Machine key of the sport, e.g. `americanfootball_nfl`.
    #[serde(default)]
    pub sport_key: String,
    /// Display name of the sport.
    pub sport_title: String,
    /// Scheduled start, as supplied by the feed.
    #[serde(default)]
    pub commence_time: Option<chrono::DateTime<chrono::Utc>>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<BookmakerQuotes>,
}

impl EventQuotes {
    /// Display label for the matchup.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    /// Every raw price on the event's board, in board order.
    pub fn all_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.bookmakers
            .iter()
            .flat_map(|book| &book.markets)
            .flat_map(|market| &market.outcomes)
            .map(|outcome| outcome.price)
    }
}

/// Quotes from a single bookmaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmakerQuotes {
    #[serde(default)]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub markets: Vec<MarketQuotes>,
}

/// A quoted market (e.g. `h2h`) with its outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuotes {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OutcomeQuote>,
}

/// One priced outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeQuote {
    pub name: String,
    /// Raw quote in the feed convention (see [`Odds::from_quote`]).
    pub price: f64,
}

/// Scan settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Stake each candidate wager is evaluated at.
    #[serde(default = "default_stake")]
    pub stake: f64,

    /// American-odds points a price must deviate from the board mean to count
    /// as a sharp outlier.
    #[serde(default = "default_sharp_threshold")]
    pub sharp_threshold: f64,
}

fn default_stake() -> f64 {
    super::ev::DEFAULT_STAKE
}

fn default_sharp_threshold() -> f64 {
    15.0
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            stake: default_stake(),
            sharp_threshold: default_sharp_threshold(),
        }
    }
}

/// A positive-EV outcome found by the scan.
#[derive(Debug, Clone, Serialize)]
pub struct ValueBet {
    sport: String,
    matchup: String,
    bookmaker: String,
    outcome: String,
    odds: f64,
    expected_value: f64,
    edge: f64,
}

impl ValueBet {
    /// Sport display name.
    #[must_use]
    pub fn sport(&self) -> &str {
        &self.sport
    }

    /// Matchup label, `home vs away`.
    #[must_use]
    pub fn matchup(&self) -> &str {
        &self.matchup
    }

    /// Bookmaker posting the quote.
    #[must_use]
    pub fn bookmaker(&self) -> &str {
        &self.bookmaker
    }

    /// Outcome name as quoted.
    #[must_use]
    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    /// The quote as posted on the board.
    #[must_use]
    pub const fn odds(&self) -> f64 {
        self.odds
    }

    /// Expected value at the scan stake.
    #[must_use]
    pub const fn expected_value(&self) -> f64 {
        self.expected_value
    }

    /// Estimated probability minus implied probability.
    #[must_use]
    pub const fn edge(&self) -> f64 {
        self.edge
    }
}

/// Scan a board for positive-EV quotes, best first.
///
/// For each outcome: convert the price, derive the implied probability, ask
/// `estimator` for an estimated true probability, and compute EV at
/// `config.stake`. Only positive-EV outcomes are retained, sorted descending
/// by expected value. A quote that fails odds validation is skipped with a
/// debug log rather than aborting the rest of the board.
///
/// The output ranks quotes by a heuristic probability estimate; treat it as a
/// shortlist to investigate, not ground truth.
///
/// # Errors
///
/// Returns [`InvalidInput::NonPositiveAmount`] if `config.stake` is not a
/// positive finite number.
pub fn scan_events<E>(
    events: &[EventQuotes],
    config: &ScanConfig,
    estimator: &mut E,
) -> Result<Vec<ValueBet>, InvalidInput>
where
    E: ProbabilityEstimator + ?Sized,
{
    if !config.stake.is_finite() || config.stake <= 0.0 {
        return Err(InvalidInput::NonPositiveAmount {
            field: "stake",
            value: config.stake,
        });
    }

    let mut results = Vec::new();

    for event in events {
        for book in &event.bookmakers {
            for market in &book.markets {
                for quote in &market.outcomes {
                    let odds = match Odds::from_quote(quote.price) {
                        Ok(odds) => odds,
                        Err(reason) => {
                            debug!(
                                price = quote.price,
                                bookmaker = %book.title,
                                outcome = %quote.name,
                                %reason,
                                "skipping unusable quote"
                            );
                            continue;
                        }
                    };

                    let implied = odds.implied_probability();
                    let estimated = estimator.estimate(implied, &quote.name, event);
                    let ev = expected_value(estimated, odds, config.stake)?;

                    if ev.is_positive() {
                        results.push(ValueBet {
                            sport: event.sport_title.clone(),
                            matchup: event.matchup(),
                            bookmaker: book.title.clone(),
                            outcome: quote.name.clone(),
                            odds: quote.price,
                            expected_value: ev.expected_value(),
                            edge: estimated.value() - implied.value(),
                        });
                    }
                }
            }
        }
    }

    results.sort_by(|a, b| {
        b.expected_value
            .partial_cmp(&a.expected_value)
            .unwrap_or(Ordering::Equal)
    });

    Ok(results)
}

/// Prices deviating from the board mean by more than `threshold`.
///
/// A crude sharp-line detector: a book hanging a number far off the rest of
/// the board either knows something or made a mistake, and both are worth a
/// look. An empty board returns nothing.
#[must_use]
pub fn sharp_outliers(event: &EventQuotes, threshold: f64) -> Vec<f64> {
    let prices: Vec<f64> = event.all_prices().collect();
    if prices.is_empty() {
        return Vec::new();
    }

    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    prices
        .into_iter()
        .filter(|price| (price - mean).abs() > threshold)
        .collect()
}
