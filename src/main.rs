// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! postcodes-decode CLI
//!
//! Command-line interface for decoding API payloads

use clap::Parser;
use postcodes_decode::cli::{Cli, Runner};
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean document
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
