//! Investment recommendation produced by the decision engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RiskTier;

/// Recommended action for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
            Self::Hold => write!(f, "hold"),
        }
    }
}

/// A buy/sell/hold decision with supporting figures.
///
/// Constructed fresh per request from a score, a risk assessment and an
/// optional user profile; never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    /// Decision confidence, 0.0 to 100.0.
    pub confidence: f64,
    /// Human-readable justification.
    pub reasoning: String,
    /// Expected return in percent, -50.0 to 100.0.
    pub expected_return_pct: f64,
    /// Overall risk tier carried over from the assessment.
    pub risk_level: RiskTier,
    /// Price target in integer cents.
    pub price_target_cents: u64,
}
