//! Scoring: traits (plus optional market context) to a 0-100 score.
//!
//! Two policies exist behind one engine. The trait-weighted policy is the
//! default; supplying market context selects the market-aware policy. Both
//! are pure and deterministic given identical inputs.

use tracing::debug;

use crate::config::ScoringConfig;
use crate::domain::{DomainTraits, MarketContext, MarketWeights, ScoreResult, TraitWeights};

/// Popularity scores for the market-aware policy's TLD factor.
///
/// Distinct from the rarity table used at extraction time: popularity ranks
/// trading interest, not scarcity.
const TLD_POPULARITY: &[(&str, f64)] = &[
    ("eth", 1.0),
    ("crypto", 0.9),
    ("nft", 0.8),
    ("dao", 0.7),
    ("com", 0.6),
    ("org", 0.5),
    ("net", 0.4),
    ("io", 0.3),
];

const DEFAULT_TLD_POPULARITY: f64 = 0.2;

fn tld_popularity(tld: &str) -> f64 {
    TLD_POPULARITY
        .iter()
        .find(|(known, _)| *known == tld)
        .map_or(DEFAULT_TLD_POPULARITY, |(_, popularity)| *popularity)
}

/// The scoring policy in effect for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Fixed trait weights, no market data involved.
    TraitWeighted,
    /// Market-enriched weights over volume, trend and sentiment.
    MarketAware,
}

impl ScoringPolicy {
    /// Selects the policy from the presence of market context.
    #[must_use]
    pub fn select(market: Option<&MarketContext>) -> Self {
        match market {
            Some(_) => Self::MarketAware,
            None => Self::TraitWeighted,
        }
    }

    /// Policy name for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TraitWeighted => "trait-weighted",
            Self::MarketAware => "market-aware",
        }
    }
}

/// Combines traits into a single score using configured weight tables.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    trait_weights: TraitWeights,
    market_weights: MarketWeights,
}

impl ScoringEngine {
    #[must_use]
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            trait_weights: config.trait_weights,
            market_weights: config.market_weights,
        }
    }

    /// Scores a domain's traits, selecting the policy from the presence of
    /// market context. The result is clamped to 0.0-100.0.
    #[must_use]
    pub fn score(&self, traits: &DomainTraits, market: Option<&MarketContext>) -> ScoreResult {
        let policy = ScoringPolicy::select(market);
        let raw = match (policy, market) {
            (ScoringPolicy::MarketAware, Some(m)) => self.market_aware(traits, m),
            _ => self.trait_weighted(traits),
        };
        let score = raw.clamp(0.0, 100.0);
        debug!(
            domain = %traits.domain(),
            policy = policy.name(),
            score,
            "scored domain"
        );
        ScoreResult::new(score, reasoning(traits, score), traits.clone())
    }

    /// Trait-weighted policy: `100 x sum(weight x normalized factor)`.
    fn trait_weighted(&self, traits: &DomainTraits) -> f64 {
        let w = &self.trait_weights;
        let length_factor = length_factor(traits.length);

        100.0
            * (w.length * length_factor
                + w.keyword_value * traits.keyword_value
                + w.rarity * traits.rarity
                + w.tld_rarity * traits.tld_rarity
                + w.on_chain_activity * traits.on_chain_activity)
    }

    /// Market-aware policy: each factor expressed on the 0-100 scale before
    /// weighting. The volume term can go negative for thin markets below
    /// $1000 and is absorbed by the final clamp.
    fn market_aware(&self, traits: &DomainTraits, market: &MarketContext) -> f64 {
        let w = &self.market_weights;
        let mut score = 0.0;

        score += w.length * (100.0 - (traits.length as f64 - 3.0) * 5.0).max(0.0);
        score += w.tld_popularity * tld_popularity(&traits.tld) * 100.0;
        score += w.keyword_value * traits.keyword_value * 100.0;

        if market.market_volume > 0.0 {
            score += w.market_volume * ((market.market_volume / 1000.0).ln() * 20.0).min(100.0);
        }

        let trend = (50.0 + market.price_change_24h * 10.0).clamp(0.0, 100.0);
        score += w.price_trend * trend;

        let sentiment = (50.0 + market.social_sentiment * 50.0).clamp(0.0, 100.0);
        score += w.social_sentiment * sentiment;

        score
    }
}

/// Optimal label length for the trait-weighted policy.
const OPTIMAL_LENGTH: f64 = 6.0;

fn length_factor(length: usize) -> f64 {
    (10.0 - (length as f64 - OPTIMAL_LENGTH).abs()).max(0.0) / 10.0
}

/// Builds the qualitative reasoning: triggered per-trait rules followed by
/// one overall-assessment sentence keyed by score tier.
fn reasoning(traits: &DomainTraits, score: f64) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    reasons.push(if traits.length <= 4 {
        "Very short domain name, highly valuable"
    } else if traits.length <= 6 {
        "Short domain name, good value"
    } else if traits.length <= 8 {
        "Medium length domain name"
    } else {
        "Longer domain name, reduced value"
    });

    if traits.keyword_value > 0.8 {
        reasons.push("Contains high-value keywords");
    } else if traits.keyword_value > 0.5 {
        reasons.push("Contains valuable keywords");
    }

    if traits.tld_rarity > 0.8 {
        reasons.push("Rare and valuable TLD");
    } else if traits.tld_rarity > 0.6 {
        reasons.push("Good TLD choice");
    }

    if traits.rarity > 0.8 {
        reasons.push("Unique character pattern");
    } else if traits.rarity < 0.3 {
        reasons.push("Common character pattern");
    }

    if traits.on_chain_activity > 0.7 {
        reasons.push("High on-chain activity");
    }

    let assessment = if score >= 80.0 {
        "Excellent investment potential"
    } else if score >= 60.0 {
        "Good investment potential"
    } else if score >= 40.0 {
        "Moderate investment potential"
    } else {
        "Limited investment potential"
    };

    format!("{}. {}.", reasons.join(". "), assessment)
}
