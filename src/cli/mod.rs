//! Command-line interface definitions.

pub mod analyze;
pub mod batch;
pub mod check;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::config::Config;
use crate::domain::{MarketContext, RiskProfile, UserProfile};

/// Namelord - Deterministic domain-name investment analysis.
#[derive(Parser, Debug)]
#[command(name = "namelord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single domain
    Analyze(AnalyzeArgs),

    /// Analyze a file of domains, ranked by confidence
    Batch(BatchArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `namelord check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "namelord.toml")]
    pub config: PathBuf,
}

/// Output rendering for analysis commands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Optional market signals. Supplying any of them switches scoring to the
/// market-aware policy.
#[derive(Args, Debug)]
pub struct MarketArgs {
    /// 24h price change in percent
    #[arg(long)]
    pub price_change: Option<f64>,

    /// Trading volume in dollars
    #[arg(long)]
    pub volume: Option<f64>,

    /// Social sentiment, -1.0 to 1.0
    #[arg(long)]
    pub sentiment: Option<f64>,
}

impl MarketArgs {
    /// Builds a market context when any signal was supplied.
    ///
    /// Missing fields degrade to the neutral value (zero) with a warning,
    /// never to an error.
    #[must_use]
    pub fn to_context(&self) -> Option<MarketContext> {
        if self.price_change.is_none() && self.volume.is_none() && self.sentiment.is_none() {
            return None;
        }
        if self.price_change.is_none() || self.volume.is_none() || self.sentiment.is_none() {
            warn!("partial market data supplied, missing fields default to neutral");
        }
        Some(MarketContext {
            price_change_24h: self.price_change.unwrap_or(0.0),
            market_volume: self.volume.unwrap_or(0.0),
            social_sentiment: self.sentiment.unwrap_or(0.0),
        })
    }
}

/// Optional user profile flags.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Risk appetite
    #[arg(long, value_enum)]
    pub risk_profile: Option<RiskProfile>,

    /// Investment budget in cents
    #[arg(long)]
    pub budget_cents: Option<u64>,
}

impl ProfileArgs {
    /// Builds a user profile when any flag was supplied.
    #[must_use]
    pub fn to_profile(&self) -> Option<UserProfile> {
        if self.risk_profile.is_none() && self.budget_cents.is_none() {
            return None;
        }
        let mut profile = UserProfile::default();
        if let Some(risk_profile) = self.risk_profile {
            profile.risk_profile = risk_profile;
        }
        if let Some(budget_cents) = self.budget_cents {
            profile.budget_cents = budget_cents;
        }
        Some(profile)
    }
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Domain to analyze, e.g. 'crypto.eth'
    pub domain: String,

    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Seed for the valuation noise generator (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, default_value = "namelord.toml")]
    pub config: PathBuf,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one domain per line ('#' lines are comments)
    pub file: PathBuf,

    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Seed for the valuation noise generator (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, default_value = "namelord.toml")]
    pub config: PathBuf,
}

/// Loads the config file if present, defaults otherwise.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        Ok(Config::load(path)?)
    } else {
        Ok(Config::default())
    }
}
