//! The `analyze` subcommand.

use anyhow::Context;
use owo_colors::OwoColorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{load_config, output, AnalyzeArgs, OutputFormat};
use crate::domain::Action;
use crate::engine::{Advisor, Analysis};

pub fn run(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    config.logging.init();

    let advisor = Advisor::new(&config)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let analysis = advisor
        .analyze(
            &args.domain,
            args.market.to_context().as_ref(),
            args.profile.to_profile().as_ref(),
            &mut rng,
        )
        .with_context(|| format!("failed to analyze '{}'", args.domain))?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Table => render(&analysis),
    }
    Ok(())
}

fn render(analysis: &Analysis) {
    output::section(&analysis.domain);
    output::key_value("Score", format!("{:.1}/100", analysis.score.score()));
    output::key_value("Valuation", analysis.valuation);
    output::key_value("Action", colored_action(analysis.recommendation.action));
    output::key_value(
        "Confidence",
        format!("{:.0}%", analysis.recommendation.confidence),
    );
    output::key_value(
        "Expected return",
        format!("{:+.1}%", analysis.recommendation.expected_return_pct),
    );
    output::key_value("Risk", analysis.risk.overall_risk());
    println!();
    output::note(analysis.score.reasoning());
    output::note(&analysis.recommendation.reasoning);
}

fn colored_action(action: Action) -> String {
    match action {
        Action::Buy => action.green().to_string(),
        Action::Sell => action.red().to_string(),
        Action::Hold => action.yellow().to_string(),
    }
}
