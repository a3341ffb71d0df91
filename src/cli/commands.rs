//! CLI commands and argument parsing

use crate::endpoint::Endpoint;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Decode and validate postcode lookup API payloads
#[derive(Parser, Debug)]
#[command(name = "postcodes-decode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Payload format
    #[arg(short, long, global = true, default_value = "json")]
    pub input: InputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a payload returned by an endpoint
    Decode {
        /// Endpoint the payload came from (see `endpoints`)
        endpoint: Endpoint,

        /// Payload file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Classify a payload's envelope without decoding the result
    Classify {
        /// Payload file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// List supported endpoints
    Endpoints,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
    /// YAML
    Yaml,
}

/// Payload format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}
