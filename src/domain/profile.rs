//! User investment profile supplied by the caller.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Risk appetite of the investing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "conservative"),
            Self::Moderate => write!(f, "moderate"),
            Self::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// External user profile, read-only to the engine.
///
/// When no profile is supplied the engine defaults to a moderate risk
/// profile and skips the budget-based confidence adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub risk_profile: RiskProfile,
    /// Investment budget in integer cents.
    pub budget_cents: u64,
    /// Free-form user preferences, not interpreted by the engine.
    #[serde(default)]
    pub preferences: serde_json::Map<String, serde_json::Value>,
}

impl Default for UserProfile {
    /// Moderate appetite with a $10,000 budget.
    fn default() -> Self {
        Self {
            risk_profile: RiskProfile::default(),
            budget_cents: 1_000_000,
            preferences: serde_json::Map::new(),
        }
    }
}
