//! Bet slips: ordered legs, combined odds, and heuristic risk assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::InvalidInput;
use super::ev::{expected_value, EvBreakdown};
use super::odds::Odds;
use super::probability::Probability;

/// A single wagered outcome on a slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    event: String,
    odds: Odds,
    probability: Probability,
}

impl Leg {
    /// Create a new leg.
    pub fn new(event: impl Into<String>, odds: Odds, probability: Probability) -> Self {
        Self {
            event: event.into(),
            odds,
            probability,
        }
    }

    /// Label of the wagered event.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }

    /// The quoted odds for this leg.
    #[must_use]
    pub const fn odds(&self) -> Odds {
        self.odds
    }

    /// The estimated true win probability for this leg.
    #[must_use]
    pub const fn probability(&self) -> Probability {
        self.probability
    }
}

/// An ordered, non-empty sequence of legs.
///
/// Combined numbers treat legs as independent: the slip's win probability and
/// decimal odds are plain products across legs. Correlated legs (same game,
/// same player) make the combined figures optimistic. That simplification is
/// intentional and matches how parlay pricing is quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slip {
    legs: Vec<Leg>,
}

impl Slip {
    /// Create a slip, rejecting an empty leg list.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptySlip`] when `legs` is empty.
    pub fn try_new(legs: Vec<Leg>) -> Result<Self, InvalidInput> {
        if legs.is_empty() {
            return Err(InvalidInput::EmptySlip);
        }
        Ok(Self { legs })
    }

    /// The legs in wager order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs on the slip. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Combined decimal odds across all legs.
    #[must_use]
    pub fn combined_decimal_odds(&self) -> f64 {
        self.legs.iter().map(|leg| leg.odds.to_decimal()).product()
    }

    /// Combined win probability across all legs, assuming independence.
    #[must_use]
    pub fn combined_probability(&self) -> Probability {
        let product = self
            .legs
            .iter()
            .map(|leg| leg.probability.value())
            .product();
        Probability::from_unit_interval(product)
    }

    /// Expected value of the whole ticket at `stake`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositiveAmount`] for a non-positive stake.
    pub fn expected_value(&self, stake: f64) -> Result<EvBreakdown, InvalidInput> {
        let combined = Odds::decimal(self.combined_decimal_odds())?;
        expected_value(self.combined_probability(), combined, stake)
    }

    /// Heuristic confidence and risk assessment of the slip.
    ///
    /// Confidence starts at 100 and loses 12 points per leg, floored at 20;
    /// risk bands sit at 70 and 50. A rule of thumb for ticket construction,
    /// not a probability statement.
    #[must_use]
    pub fn assess(&self) -> SlipAssessment {
        let legs = self.legs.len() as i64;
        let confidence_score = (100 - 12 * legs).max(20) as u8;

        let risk = if confidence_score < 50 {
            RiskLevel::High
        } else if confidence_score < 70 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        let mut warnings = Vec::new();
        if legs > 3 {
            warnings.push("High-leg parlay: one miss kills the ticket".to_string());
        }
        if risk == RiskLevel::High {
            warnings.push("Very volatile outcome".to_string());
        }

        SlipAssessment {
            confidence_score,
            risk,
            warnings,
        }
    }
}

/// Coarse risk band for a slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Confidence 70 or above.
    Low,
    /// Confidence between 50 and 69.
    Medium,
    /// Confidence below 50.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Result of [`Slip::assess`].
#[derive(Debug, Clone, Serialize)]
pub struct SlipAssessment {
    confidence_score: u8,
    risk: RiskLevel,
    warnings: Vec<String>,
}

impl SlipAssessment {
    /// Confidence score in [20, 100].
    #[must_use]
    pub const fn confidence_score(&self) -> u8 {
        self.confidence_score
    }

    /// The risk band the score falls into.
    #[must_use]
    pub const fn risk(&self) -> RiskLevel {
        self.risk
    }

    /// Human-readable warnings for the ticket.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
