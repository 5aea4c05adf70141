//! Scan pipeline orchestration.
//!
//! [`scan_and_rank`] wires estimator → scan → rank over a board already in
//! hand, which keeps the pipeline testable without a network; the CLI `scan`
//! command layers board loading (file or live feed) on top.

use tracing::info;

use crate::config::Config;
use crate::domain::{rank_bets, scan_events, EventQuotes, ProbabilityEstimator, RankedBet};
use crate::error::Result;

/// Run the scan pipeline over a fetched board.
pub fn scan_and_rank(
    events: &[EventQuotes],
    config: &Config,
    estimator: &mut dyn ProbabilityEstimator,
) -> Result<Vec<RankedBet>> {
    let value_bets = scan_events(events, &config.scan, estimator)?;

    info!(
        events = events.len(),
        value_bets = value_bets.len(),
        estimator = estimator.name(),
        "Scan complete"
    );

    let ranked = rank_bets(value_bets, &config.ranking);

    if let Some(best) = ranked.first() {
        info!(
            matchup = %best.bet().matchup(),
            bookmaker = %best.bet().bookmaker(),
            outcome = %best.bet().outcome(),
            odds = best.bet().odds(),
            expected_value = best.bet().expected_value(),
            score = best.score(),
            "Top ranked value bet"
        );
    }

    Ok(ranked)
}
