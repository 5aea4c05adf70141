//! Input validation errors for the betting-math core.
//!
//! Every precondition violation in the core maps to the single
//! [`InvalidInput`] type. The core reports failures synchronously to the
//! immediate caller and never retries, logs, or suppresses them; the caller
//! decides how to surface the error (the CLI renders the message and exits
//! nonzero).
//!
//! # Examples
//!
//! ```
//! use vigorish::domain::{InvalidInput, Probability};
//!
//! let result = Probability::try_new(1.2);
//! assert!(matches!(
//!     result,
//!     Err(InvalidInput::ProbabilityOutOfRange { .. })
//! ));
//! ```

use thiserror::Error;

/// Errors raised when a core operation's preconditions are violated.
///
/// Variants carry the offending values so callers can render a precise
/// message without re-deriving context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// Odds of exactly zero are not a quote in any convention.
    #[error("odds of 0 are not a valid quote")]
    ZeroOdds,

    /// American odds need a magnitude of at least 100.
    #[error("american odds magnitude must be at least 100, got {quote}")]
    AmericanOutOfRange {
        /// The rejected American quote.
        quote: i64,
    },

    /// Decimal odds must pay out more than the stake.
    #[error("decimal odds must be greater than 1, got {quote}")]
    DecimalOutOfRange {
        /// The rejected decimal quote.
        quote: f64,
    },

    /// A raw quote matching neither the American nor the decimal convention.
    #[error("quote {quote} is neither american (|q| >= 100) nor decimal (1 < q < 100)")]
    UnrecognizedQuote {
        /// The rejected raw quote.
        quote: f64,
    },

    /// Probabilities live strictly between 0 and 1.
    #[error("probability must be strictly between 0 and 1, got {value}")]
    ProbabilityOutOfRange {
        /// The rejected probability value.
        value: f64,
    },

    /// Stakes and bankrolls must be positive.
    #[error("{field} must be positive, got {value}")]
    NonPositiveAmount {
        /// Which monetary input was rejected.
        field: &'static str,
        /// The rejected amount.
        value: f64,
    },

    /// The fractional-Kelly multiplier scales the stake down, never up.
    #[error("kelly multiplier must be in (0, 1], got {multiplier}")]
    MultiplierOutOfRange {
        /// The rejected multiplier.
        multiplier: f64,
    },

    /// A slip needs at least one leg.
    #[error("slip must contain at least one leg")]
    EmptySlip,
}
