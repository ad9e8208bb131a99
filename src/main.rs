use clap::Parser;
use namelord::cli::{self, CheckCommand, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Analyze(args) => cli::analyze::run(args),
        Commands::Batch(args) => cli::batch::run(args),
        Commands::Check(CheckCommand::Config(args)) => cli::check::run_config(args),
    };

    if let Err(e) = result {
        cli::output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
