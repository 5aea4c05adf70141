//! Vigorish - Sports betting slip analysis and expected-value tooling.
//!
//! This crate provides the betting-math core behind the `vigorish` CLI:
//! odds conversion, expected value, Kelly-criterion stake sizing, hedge
//! calculation, and a multi-book positive-EV scan with heuristic ranking.
//!
//! # Architecture
//!
//! The math core is pure and synchronous; everything stateful sits behind a
//! seam:
//!
//! - **`domain`** - Validated value types (odds, probabilities, slips) and
//!   the four core operations. No I/O, no clocks, no hidden state.
//! - **`domain::estimator`** - Pluggable true-probability estimators for the
//!   scan. Randomness is injected so runs are reproducible under a seed.
//! - **`store`** - Slip repository port with in-memory and JSON-file
//!   adapters.
//! - **`feed`** - Odds-feed port; the bundled the-odds-api.com client
//!   requires the `feed` feature.
//!
//! # Modules
//!
//! - [`cli`] - Command definitions and handlers for the binary
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - The betting-math core
//! - [`error`] - Error types for the crate
//! - [`feed`] - Odds-feed trait and client
//! - [`store`] - Slip persistence
//! - [`app`] - Scan pipeline orchestration
//!
//! # Features
//!
//! - `feed` (default) - Enable the HTTP odds-feed client
//! - `testkit` - Expose shared test fixtures to integration tests
//!
//! # Example
//!
//! ```
//! use vigorish::domain::{expected_value, kelly_stake, Odds, Probability, FULL_KELLY};
//!
//! let probability = Probability::try_new(0.55)?;
//! let odds = Odds::american(150)?;
//!
//! let ev = expected_value(probability, odds, 100.0)?;
//! assert!(ev.is_positive());
//!
//! let kelly = kelly_stake(probability, odds, FULL_KELLY, Some(1_000.0))?;
//! assert!((kelly.recommended_stake().unwrap() - 250.0).abs() < 1e-9);
//! # Ok::<(), vigorish::domain::InvalidInput>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
