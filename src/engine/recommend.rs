//! Recommendation decision table: action, confidence, expected return.
//!
//! A pure decision table evaluated per request; no state survives a call.

use crate::domain::{
    Action, MarketTrend, Recommendation, RiskAssessment, RiskProfile, RiskTier, ScoreResult,
    UserProfile, Valuation,
};

/// Decides the action for a scored domain.
///
/// Total over every (score, risk, profile) combination.
#[must_use]
pub fn decide_action(score: f64, overall_risk: RiskTier, profile: RiskProfile) -> Action {
    if score >= 75.0 {
        if overall_risk == RiskTier::High && profile == RiskProfile::Conservative {
            Action::Hold
        } else {
            Action::Buy
        }
    } else if score >= 50.0 {
        if overall_risk == RiskTier::Low {
            Action::Buy
        } else {
            Action::Hold
        }
    } else if score < 30.0 {
        Action::Sell
    } else {
        Action::Hold
    }
}

/// Decision confidence: the score adjusted for risk appetite and budget fit.
///
/// The budget adjustment only applies when a profile was supplied; an
/// absent profile acts as moderate with no budget opinion.
#[must_use]
pub fn confidence(score: f64, profile: Option<&UserProfile>, valuation: Valuation) -> f64 {
    let mut confidence = score;

    if let Some(profile) = profile {
        confidence += match profile.risk_profile {
            RiskProfile::Conservative => -10.0,
            RiskProfile::Moderate => 0.0,
            RiskProfile::Aggressive => 10.0,
        };

        let budget = profile.budget_cents as f64;
        let cost = valuation.cents() as f64;
        if cost > budget * 0.5 {
            confidence -= 15.0; // too expensive for the budget
        } else if cost < budget * 0.1 {
            confidence += 5.0; // cheap relative to the budget
        }
    }

    confidence.clamp(0.0, 100.0)
}

/// Expected return in percent: score tier, trend and risk appetite summed.
#[must_use]
pub fn expected_return(score: f64, trend: MarketTrend, profile: RiskProfile) -> f64 {
    let base: f64 = if score >= 80.0 {
        25.0
    } else if score >= 60.0 {
        15.0
    } else if score >= 40.0 {
        5.0
    } else {
        -5.0
    };

    let trend_adjustment = match trend {
        MarketTrend::Bullish => 10.0,
        MarketTrend::Neutral => 0.0,
        MarketTrend::Bearish => -10.0,
    };

    let profile_adjustment = match profile {
        RiskProfile::Conservative => -5.0,
        RiskProfile::Moderate => 0.0,
        RiskProfile::Aggressive => 5.0,
    };

    (base + trend_adjustment + profile_adjustment).clamp(-50.0, 100.0)
}

/// Builds the reasoning text: score tier, risk tier, market trend, and a
/// profile-mismatch note, in that fixed order.
fn reasoning(score: f64, overall_risk: RiskTier, trend: MarketTrend, profile: RiskProfile) -> String {
    let mut parts: Vec<&str> = Vec::new();

    parts.push(if score >= 80.0 {
        "Excellent domain score indicates high potential value"
    } else if score >= 60.0 {
        "Good domain score suggests solid investment potential"
    } else if score >= 40.0 {
        "Average domain score - monitor for improvements"
    } else {
        "Low domain score suggests limited upside potential"
    });

    match overall_risk {
        RiskTier::High => parts.push("High risk profile requires careful consideration"),
        RiskTier::Low => parts.push("Low risk profile suitable for conservative investors"),
        RiskTier::Medium => {}
    }

    match trend {
        MarketTrend::Bullish => parts.push("Bullish market trend supports positive outlook"),
        MarketTrend::Bearish => parts.push("Bearish market trend suggests caution"),
        MarketTrend::Neutral => {}
    }

    if profile == RiskProfile::Conservative && overall_risk == RiskTier::High {
        parts.push("Conservative risk profile may not align with high-risk domain");
    } else if profile == RiskProfile::Aggressive && overall_risk == RiskTier::Low {
        parts.push("Aggressive risk profile may seek higher-risk opportunities");
    }

    format!("{}.", parts.join(". "))
}

/// Assembles a recommendation from the upstream stage outputs.
#[must_use]
pub fn recommend(
    score: &ScoreResult,
    risk: &RiskAssessment,
    trend: MarketTrend,
    profile: Option<&UserProfile>,
    valuation: Valuation,
) -> Recommendation {
    let risk_profile = profile.map(|p| p.risk_profile).unwrap_or_default();
    let overall = risk.overall_risk();

    Recommendation {
        action: decide_action(score.score(), overall, risk_profile),
        confidence: confidence(score.score(), profile, valuation),
        reasoning: reasoning(score.score(), overall, trend, risk_profile),
        expected_return_pct: expected_return(score.score(), trend, risk_profile),
        risk_level: overall,
        price_target_cents: valuation.cents(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_buys_unless_conservative_in_high_risk() {
        assert_eq!(
            decide_action(85.0, RiskTier::High, RiskProfile::Conservative),
            Action::Hold
        );
        assert_eq!(
            decide_action(85.0, RiskTier::High, RiskProfile::Moderate),
            Action::Buy
        );
        assert_eq!(
            decide_action(85.0, RiskTier::Low, RiskProfile::Conservative),
            Action::Buy
        );
    }

    #[test]
    fn test_mid_score_buys_only_in_low_risk() {
        assert_eq!(
            decide_action(60.0, RiskTier::Low, RiskProfile::Moderate),
            Action::Buy
        );
        assert_eq!(
            decide_action(60.0, RiskTier::Medium, RiskProfile::Moderate),
            Action::Hold
        );
    }

    #[test]
    fn test_low_score_sells_below_thirty() {
        assert_eq!(
            decide_action(20.0, RiskTier::Low, RiskProfile::Aggressive),
            Action::Sell
        );
        assert_eq!(
            decide_action(35.0, RiskTier::Low, RiskProfile::Aggressive),
            Action::Hold
        );
    }

    #[test]
    fn test_decide_action_is_total() {
        let scores = [0.0, 29.9, 30.0, 49.9, 50.0, 74.9, 75.0, 100.0];
        let risks = [RiskTier::Low, RiskTier::Medium, RiskTier::High];
        let profiles = [
            RiskProfile::Conservative,
            RiskProfile::Moderate,
            RiskProfile::Aggressive,
        ];
        for score in scores {
            for risk in risks {
                for profile in profiles {
                    // every combination yields exactly one action
                    let _ = decide_action(score, risk, profile);
                }
            }
        }
    }

    #[test]
    fn test_confidence_budget_adjustments() {
        let profile = UserProfile {
            risk_profile: RiskProfile::Moderate,
            budget_cents: 1_000_000,
            ..Default::default()
        };

        // too expensive: > 50% of budget
        let expensive = confidence(70.0, Some(&profile), Valuation::from_cents(600_000));
        assert_eq!(expensive, 55.0);

        // cheap: < 10% of budget
        let cheap = confidence(70.0, Some(&profile), Valuation::from_cents(50_000));
        assert_eq!(cheap, 75.0);

        // in between: no adjustment
        let fair = confidence(70.0, Some(&profile), Valuation::from_cents(300_000));
        assert_eq!(fair, 70.0);
    }

    #[test]
    fn test_confidence_skips_budget_without_profile() {
        let absent = confidence(70.0, None, Valuation::from_cents(u64::MAX));
        assert_eq!(absent, 70.0);
    }

    #[test]
    fn test_confidence_clamped() {
        let aggressive = UserProfile {
            risk_profile: RiskProfile::Aggressive,
            budget_cents: u64::MAX,
            ..Default::default()
        };
        let high = confidence(98.0, Some(&aggressive), Valuation::from_cents(1));
        assert_eq!(high, 100.0);
    }

    #[test]
    fn test_expected_return_bounds_and_adjustments() {
        assert_eq!(
            expected_return(85.0, MarketTrend::Bullish, RiskProfile::Aggressive),
            40.0
        );
        assert_eq!(
            expected_return(20.0, MarketTrend::Bearish, RiskProfile::Conservative),
            -20.0
        );
        let bounded = expected_return(0.0, MarketTrend::Bearish, RiskProfile::Conservative);
        assert!(bounded >= -50.0);
    }

    #[test]
    fn test_reasoning_mentions_profile_mismatch() {
        let text = reasoning(
            85.0,
            RiskTier::High,
            MarketTrend::Neutral,
            RiskProfile::Conservative,
        );
        assert!(text.contains("Conservative risk profile may not align"));

        let text = reasoning(
            85.0,
            RiskTier::Low,
            MarketTrend::Neutral,
            RiskProfile::Aggressive,
        );
        assert!(text.contains("Aggressive risk profile may seek"));
    }
}
