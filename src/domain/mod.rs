//! Betting-math domain logic.
//!
//! Everything in this module is pure and synchronous: no I/O, no shared
//! state, no clocks. Randomness enters only through the injected generators
//! in [`estimator`].

mod error;
mod ev;
mod hedge;
mod kelly;
mod money;
mod odds;
mod probability;
mod rank;
mod slip;

pub mod estimator;
pub mod scan;

// Core value types
pub use error::InvalidInput;
pub use odds::Odds;
pub use probability::Probability;

// Single-wager math
pub use ev::{expected_value, EvBreakdown, DEFAULT_STAKE};
pub use hedge::{hedge, HedgeBreakdown};
pub use kelly::{kelly_stake, KellyBreakdown, FULL_KELLY};
pub use money::round_cents;

// Slips
pub use slip::{Leg, RiskLevel, Slip, SlipAssessment};

// Scan and ranking
pub use estimator::{consensus_probability, ConsensusBlend, PerturbedImplied, ProbabilityEstimator};
pub use rank::{rank_bets, RankedBet, RankingConfig};
pub use scan::{
    scan_events, sharp_outliers, BookmakerQuotes, EventQuotes, MarketQuotes, OutcomeQuote,
    ScanConfig, ValueBet,
};
