//! Optional market signals enriching scoring, valuation and risk.

use std::fmt;

use serde::{Deserialize, Serialize};

/// External market context for a domain.
///
/// Absence of this context selects the trait-weighted scoring policy and
/// neutral trend defaults throughout the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    /// Price change over the last 24 hours, in percent.
    pub price_change_24h: f64,
    /// Trading volume over the observation window, in dollars.
    pub market_volume: f64,
    /// Aggregate social sentiment, -1.0 (bearish) to 1.0 (bullish).
    pub social_sentiment: f64,
}

impl MarketContext {
    /// Derives the market trend from the 24h price change.
    ///
    /// More than +5% is bullish, less than -5% is bearish.
    #[must_use]
    pub fn trend(&self) -> MarketTrend {
        if self.price_change_24h > 5.0 {
            MarketTrend::Bullish
        } else if self.price_change_24h < -5.0 {
            MarketTrend::Bearish
        } else {
            MarketTrend::Neutral
        }
    }
}

/// Direction of the market, derived from price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTrend {
    Bullish,
    #[default]
    Neutral,
    Bearish,
}

impl fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish"),
            Self::Neutral => write!(f, "neutral"),
            Self::Bearish => write!(f, "bearish"),
        }
    }
}
