//! Namelord - Deterministic domain-name investment analysis.
//!
//! This crate scores blockchain domain names, estimates a monetary valuation,
//! classifies risk, and produces a buy/sell/hold recommendation with
//! human-readable reasoning.
//!
//! # Architecture
//!
//! Four stages compose into one forward-only pipeline:
//!
//! 1. **Trait extraction** - parse a raw domain string into normalized
//!    attributes (length, keyword value, rarity, TLD rarity, activity).
//! 2. **Scoring** - combine traits into a 0-100 score using one of two
//!    weight policies, selected by the presence of market data.
//! 3. **Valuation** - convert score and traits into integer cents, with an
//!    injected random source for market noise.
//! 4. **Risk & recommendation** - classify risk tiers and decide an action,
//!    confidence, and expected return for an optional user profile.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with weight tables
//! - [`domain`] - Plain data types: traits, market context, score, valuation,
//!   risk, recommendation
//! - [`engine`] - The pipeline stages and the orchestrating [`engine::Advisor`]
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface definitions
//!
//! # Example
//!
//! ```
//! use namelord::config::Config;
//! use namelord::engine::Advisor;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let advisor = Advisor::new(&Config::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let analysis = advisor.analyze("crypto.eth", None, None, &mut rng).unwrap();
//! assert!(analysis.score.score() >= 80.0);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
