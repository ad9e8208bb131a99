//! Risk assessment decision table.

use tracing::warn;

use crate::domain::{MarketContext, RiskAssessment, RiskTier};

/// Classifies risk from market context.
///
/// Volatility and liquidity come from the decision table; regulatory and
/// technical risk default to low pending real data feeds. Missing market
/// data is a recoverable condition: the neutral all-medium assessment is
/// substituted and logged, never raised as an error.
#[must_use]
pub fn assess_risk(market: Option<&MarketContext>) -> RiskAssessment {
    let Some(market) = market else {
        warn!("market data unavailable, substituting neutral risk assessment");
        return RiskAssessment::neutral();
    };

    let volatility = if market.price_change_24h.abs() > 20.0 {
        RiskTier::High
    } else if market.price_change_24h.abs() > 10.0 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    let liquidity = if market.market_volume < 1000.0 {
        RiskTier::High
    } else if market.market_volume < 10_000.0 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    RiskAssessment::from_factors(volatility, liquidity, RiskTier::Low, RiskTier::Low)
}
