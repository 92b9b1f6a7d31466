//! parcel-seed CLI
//!
//! Converts a property-records CSV into per-parcel JSON folders.

use clap::{CommandFactory, Parser};
use parcel_seed::cli::{Cli, Reporter, Runner};
use parcel_seed::types::LogLevel;
use std::io;

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::from(level).into()),
        )
        .with_writer(io::stderr)
        .init();

    let strict = config.strict;
    let runner = Runner::new(cli.input.clone(), config);
    let mut reporter = Reporter::new(io::stdout().lock());

    let outcome = runner.run(&mut reporter);
    drop(reporter);

    match outcome {
        Ok(report) => std::process::exit(report.exit_code(strict)),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    }
}
