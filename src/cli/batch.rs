//! The `batch` subcommand: analyze a file of domains in parallel.

use anyhow::Context;
use tabled::{Table, Tabled};

use crate::cli::{load_config, output, BatchArgs, OutputFormat};
use crate::engine::{Advisor, Analysis};

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Return")]
    expected_return: String,
    #[tabled(rename = "Valuation")]
    valuation: String,
    #[tabled(rename = "Risk")]
    risk: String,
}

impl From<&Analysis> for Row {
    fn from(analysis: &Analysis) -> Self {
        Self {
            domain: analysis.domain.clone(),
            score: format!("{:.1}", analysis.score.score()),
            action: analysis.recommendation.action.to_string(),
            confidence: format!("{:.0}%", analysis.recommendation.confidence),
            expected_return: format!("{:+.1}%", analysis.recommendation.expected_return_pct),
            valuation: analysis.valuation.to_string(),
            risk: analysis.risk.overall_risk().to_string(),
        }
    }
}

pub fn run(args: &BatchArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    config.logging.init();

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let domains: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect();

    let advisor = Advisor::new(&config)?;
    let analyses = advisor.analyze_many(
        &domains,
        args.market.to_context().as_ref(),
        args.profile.to_profile().as_ref(),
        args.seed,
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analyses)?),
        OutputFormat::Table => {
            let rows: Vec<Row> = analyses.iter().map(Row::from).collect();
            println!("{}", Table::new(rows));
            if analyses.len() < domains.len() {
                output::note(&format!(
                    "{} of {} domains skipped (invalid format)",
                    domains.len() - analyses.len(),
                    domains.len()
                ));
            }
        }
    }
    Ok(())
}
