//! Odds-feed port.
//!
//! The scan consumes a board of upcoming events; where that board comes from
//! is behind the [`OddsFeed`] trait. The bundled implementation talks to
//! the-odds-api.com and requires the `feed` feature.

#[cfg(feature = "feed")]
mod the_odds_api;

#[cfg(feature = "feed")]
pub use the_odds_api::TheOddsApiClient;

use async_trait::async_trait;

use crate::domain::EventQuotes;
use crate::error::Result;

/// Source of upcoming-event odds boards.
#[async_trait]
pub trait OddsFeed: Send + Sync {
    /// Fetch the current board for a sport key.
    async fn fetch_events(&self, sport: &str) -> Result<Vec<EventQuotes>>;

    /// Feed name for logging.
    fn name(&self) -> &'static str;
}
