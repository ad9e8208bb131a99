//! Risk tiers and the per-request risk assessment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of three risk tiers describing volatility or liquidity exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Numeric weight used when averaging tiers into an overall tier.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Per-request risk classification across four factors.
///
/// The overall tier is always derived from the four factor tiers and can
/// never be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    market_volatility: RiskTier,
    liquidity_risk: RiskTier,
    regulatory_risk: RiskTier,
    technical_risk: RiskTier,
    overall_risk: RiskTier,
}

impl RiskAssessment {
    /// Builds an assessment from the four factor tiers, deriving the
    /// overall tier from their average weight.
    #[must_use]
    pub fn from_factors(
        market_volatility: RiskTier,
        liquidity_risk: RiskTier,
        regulatory_risk: RiskTier,
        technical_risk: RiskTier,
    ) -> Self {
        let total = market_volatility.weight()
            + liquidity_risk.weight()
            + regulatory_risk.weight()
            + technical_risk.weight();
        let average = f64::from(total) / 4.0;

        let overall_risk = if average <= 1.5 {
            RiskTier::Low
        } else if average <= 2.5 {
            RiskTier::Medium
        } else {
            RiskTier::High
        };

        Self {
            market_volatility,
            liquidity_risk,
            regulatory_risk,
            technical_risk,
            overall_risk,
        }
    }

    /// The neutral assessment substituted when market data is missing.
    #[must_use]
    pub fn neutral() -> Self {
        Self::from_factors(
            RiskTier::Medium,
            RiskTier::Medium,
            RiskTier::Medium,
            RiskTier::Medium,
        )
    }

    #[must_use]
    pub const fn market_volatility(&self) -> RiskTier {
        self.market_volatility
    }

    #[must_use]
    pub const fn liquidity_risk(&self) -> RiskTier {
        self.liquidity_risk
    }

    #[must_use]
    pub const fn regulatory_risk(&self) -> RiskTier {
        self.regulatory_risk
    }

    #[must_use]
    pub const fn technical_risk(&self) -> RiskTier {
        self.technical_risk
    }

    #[must_use]
    pub const fn overall_risk(&self) -> RiskTier {
        self.overall_risk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_derived_from_average() {
        let low = RiskAssessment::from_factors(
            RiskTier::Low,
            RiskTier::Low,
            RiskTier::Low,
            RiskTier::Medium,
        );
        assert_eq!(low.overall_risk(), RiskTier::Low);

        let medium = RiskAssessment::from_factors(
            RiskTier::High,
            RiskTier::Medium,
            RiskTier::Low,
            RiskTier::Low,
        );
        assert_eq!(medium.overall_risk(), RiskTier::Medium);

        let high = RiskAssessment::from_factors(
            RiskTier::High,
            RiskTier::High,
            RiskTier::High,
            RiskTier::Medium,
        );
        assert_eq!(high.overall_risk(), RiskTier::High);
    }

    #[test]
    fn test_neutral_is_all_medium() {
        let neutral = RiskAssessment::neutral();
        assert_eq!(neutral.market_volatility(), RiskTier::Medium);
        assert_eq!(neutral.liquidity_risk(), RiskTier::Medium);
        assert_eq!(neutral.regulatory_risk(), RiskTier::Medium);
        assert_eq!(neutral.technical_risk(), RiskTier::Medium);
        assert_eq!(neutral.overall_risk(), RiskTier::Medium);
    }
}
