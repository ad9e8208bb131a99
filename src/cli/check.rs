//! The `check` subcommand.

use anyhow::Context;

use crate::cli::{output, ConfigPathArg};
use crate::config::Config;

pub fn run_config(args: &ConfigPathArg) -> anyhow::Result<()> {
    Config::load(&args.config)
        .with_context(|| format!("invalid configuration at {}", args.config.display()))?;
    output::ok(&format!("{} is valid", args.config.display()));
    Ok(())
}
