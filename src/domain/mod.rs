//! Engine-agnostic domain types.

mod market;
mod profile;
mod recommendation;
mod risk;
mod score;
mod traits;
mod valuation;

pub use market::{MarketContext, MarketTrend};
pub use profile::{RiskProfile, UserProfile};
pub use recommendation::{Action, Recommendation};
pub use risk::{RiskAssessment, RiskTier};
pub use score::{MarketWeights, ScoreResult, TraitWeights};
pub use traits::DomainTraits;
pub use valuation::Valuation;
