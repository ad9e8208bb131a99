//! Score types and the weight tables behind both scoring policies.
//!
//! The source system carried several near-duplicate copies of its scoring
//! formula; here the constants live in two weight tables so the formulas
//! become one configurable policy per mode.

use serde::{Deserialize, Serialize};

use super::DomainTraits;

/// Weights for the trait-weighted scoring policy (no market data).
///
/// Each weight multiplies a trait factor normalized to 0.0-1.0; the final
/// score is `100 x sum(weight x factor)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitWeights {
    pub length: f64,
    pub keyword_value: f64,
    pub rarity: f64,
    pub tld_rarity: f64,
    pub on_chain_activity: f64,
}

impl Default for TraitWeights {
    fn default() -> Self {
        Self {
            length: 0.15,
            keyword_value: 0.25,
            rarity: 0.20,
            tld_rarity: 0.20,
            on_chain_activity: 0.20,
        }
    }
}

/// Weights for the market-aware scoring policy.
///
/// Each weight multiplies a factor already expressed on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketWeights {
    pub length: f64,
    pub tld_popularity: f64,
    pub keyword_value: f64,
    pub market_volume: f64,
    pub price_trend: f64,
    pub social_sentiment: f64,
}

impl Default for MarketWeights {
    fn default() -> Self {
        Self {
            length: 0.15,
            tld_popularity: 0.20,
            keyword_value: 0.25,
            market_volume: 0.20,
            price_trend: 0.10,
            social_sentiment: 0.10,
        }
    }
}

/// A scored domain with its contributing traits and reasoning text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    score: f64,
    reasoning: String,
    traits: DomainTraits,
}

impl ScoreResult {
    /// Creates a score result, clamping the score to 0.0-100.0.
    #[must_use]
    pub fn new(score: f64, reasoning: String, traits: DomainTraits) -> Self {
        Self {
            score: score.clamp(0.0, 100.0),
            reasoning,
            traits,
        }
    }

    /// Returns the composite score, 0.0 to 100.0.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Returns the human-readable justification for the score.
    #[must_use]
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Returns the traits this score was derived from.
    #[must_use]
    pub const fn traits(&self) -> &DomainTraits {
        &self.traits
    }
}
