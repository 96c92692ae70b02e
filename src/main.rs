//! Codescope CLI entry point.

use clap::Parser;
use codescope::cli::{self, Cli, Commands, EXIT_ERROR};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        std::process::exit(EXIT_ERROR);
    }

    let outcome = match &cli.command {
        Commands::Analyze(args) => cli::run_analyze(args),
        Commands::Init(args) => cli::run_init(args),
        Commands::Languages => cli::run_languages(),
    };

    let exit_code = match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
