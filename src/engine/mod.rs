//! The four pipeline stages and their orchestration.

mod advisor;
mod extractor;
mod recommend;
mod risk;
mod scoring;
mod valuation;

pub use advisor::{Advisor, Analysis};
pub use extractor::{tld_rarity, TraitExtractor};
pub use recommend::{confidence, decide_action, expected_return, recommend};
pub use risk::assess_risk;
pub use scoring::{ScoringEngine, ScoringPolicy};
pub use valuation::Valuer;
