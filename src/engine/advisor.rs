//! Pipeline orchestration.
//!
//! The [`Advisor`] wires the four stages together: extraction, scoring,
//! valuation, risk and recommendation. Data flows strictly forward; no
//! stage mutates another's output. Apart from the injected random source
//! every stage is pure, so an advisor can be shared across threads freely.

use std::cmp::Ordering;
use std::sync::mpsc;
use std::thread;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{
    MarketContext, Recommendation, RiskAssessment, ScoreResult, UserProfile, Valuation,
};
use crate::engine::{assess_risk, recommend, ScoringEngine, TraitExtractor, Valuer};
use crate::error::Result;

/// Full pipeline output for one domain.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub domain: String,
    pub generated_at: DateTime<Utc>,
    pub score: ScoreResult,
    pub valuation: Valuation,
    pub risk: RiskAssessment,
    pub recommendation: Recommendation,
}

/// Runs the full analysis pipeline for domains.
#[derive(Debug, Clone)]
pub struct Advisor {
    extractor: TraitExtractor,
    scoring: ScoringEngine,
    valuer: Valuer,
}

impl Advisor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: TraitExtractor::new(),
            scoring: ScoringEngine::new(&config.scoring),
            valuer: Valuer::new(&config.valuation)?,
        })
    }

    /// Analyzes a single domain.
    ///
    /// Extraction failures surface to the caller; missing market data and
    /// missing profile degrade to documented neutral defaults instead.
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        domain: &str,
        market: Option<&MarketContext>,
        profile: Option<&UserProfile>,
        rng: &mut R,
    ) -> Result<Analysis> {
        let traits = self.extractor.extract(domain)?;
        let score = self.scoring.score(&traits, market);
        let valuation = self.valuer.valuate(score.score(), &traits, rng);
        let risk = assess_risk(market);
        let trend = market.map(MarketContext::trend).unwrap_or_default();
        let recommendation = recommend(&score, &risk, trend, profile, valuation);

        info!(
            domain = %traits.domain(),
            score = score.score(),
            action = %recommendation.action,
            confidence = recommendation.confidence,
            "analysis complete"
        );

        Ok(Analysis {
            domain: traits.domain(),
            generated_at: Utc::now(),
            score,
            valuation,
            risk,
            recommendation,
        })
    }

    /// Analyzes many domains in parallel and ranks the results by
    /// confidence, descending.
    ///
    /// Each domain's pipeline run is independent, so the work fans out
    /// across worker threads with no shared mutable state. With a seed,
    /// each domain gets a generator derived from the seed and its input
    /// position, making the whole batch reproducible regardless of how
    /// domains land on threads. Domains that fail extraction are logged
    /// and skipped.
    #[must_use]
    pub fn analyze_many(
        &self,
        domains: &[String],
        market: Option<&MarketContext>,
        profile: Option<&UserProfile>,
        seed: Option<u64>,
    ) -> Vec<Analysis> {
        if domains.is_empty() {
            return Vec::new();
        }

        let workers = num_cpus::get().clamp(1, domains.len());
        let chunk_size = domains.len().div_ceil(workers);

        let mut analyses = thread::scope(|scope| {
            let (tx, rx) = mpsc::channel();

            for (worker, chunk) in domains.chunks(chunk_size).enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    for (offset, domain) in chunk.iter().enumerate() {
                        let position = worker * chunk_size + offset;
                        let mut rng = match seed {
                            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(position as u64)),
                            None => StdRng::from_entropy(),
                        };
                        let result = self.analyze(domain, market, profile, &mut rng);
                        if tx.send((domain, result)).is_err() {
                            return;
                        }
                    }
                });
            }
            drop(tx);

            let mut analyses = Vec::with_capacity(domains.len());
            for (domain, result) in rx {
                match result {
                    Ok(analysis) => analyses.push(analysis),
                    Err(e) => warn!(domain = %domain, error = %e, "skipping domain in batch"),
                }
            }
            analyses
        });

        analyses.sort_by(|a, b| {
            b.recommendation
                .confidence
                .partial_cmp(&a.recommendation.confidence)
                .unwrap_or(Ordering::Equal)
        });
        analyses
    }
}
