//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InputFormat, OutputFormat};
use crate::endpoint::Endpoint;
use crate::envelope::Envelope;
use crate::error::Result as DecodeResult;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the CLI command, writing results to `out`
    ///
    /// A decoded error envelope is a successful run. A decode failure is
    /// written to `out` as structured JSON and returned as an error.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Commands::Decode { endpoint, file } => self.decode(*endpoint, file.as_deref(), out),
            Commands::Classify { file } => self.classify(file.as_deref(), out),
            Commands::Endpoints => self.endpoints(out),
        }
    }

    /// Decode a payload with one endpoint decoder
    fn decode(&self, endpoint: Endpoint, file: Option<&Path>, out: &mut impl Write) -> Result<()> {
        let bytes = read_payload(file)?;
        let decoded = match self.cli.input {
            InputFormat::Json => endpoint.decode_slice(&bytes),
            InputFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_slice(&bytes).context("Invalid YAML payload")?;
                endpoint.decode(&value)
            }
        };
        self.report(decoded, out)
    }

    /// Print the envelope classification
    fn classify(&self, file: Option<&Path>, out: &mut impl Write) -> Result<()> {
        let bytes = read_payload(file)?;
        let summary = match self.cli.input {
            InputFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_slice(&bytes).context("Invalid JSON payload")?;
                Envelope::parse(&value).map(|e| envelope_summary(&e))
            }
            InputFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_slice(&bytes).context("Invalid YAML payload")?;
                Envelope::parse(&value).map(|e| envelope_summary(&e))
            }
        };
        self.report(summary, out)
    }

    /// List supported endpoints
    fn endpoints(&self, out: &mut impl Write) -> Result<()> {
        let endpoints: Vec<_> = Endpoint::ALL
            .iter()
            .map(|endpoint| json!({"endpoint": endpoint, "route": endpoint.route()}))
            .collect();
        self.output(out, &endpoints)
    }

    /// Write a decode outcome, failing the run on a decode error
    fn report<T: Serialize>(&self, outcome: DecodeResult<T>, out: &mut impl Write) -> Result<()> {
        match outcome {
            Ok(value) => self.output(out, &value),
            Err(err) => {
                debug!("Decode failed: {err}");
                self.output(out, &json!({"error": err}))?;
                bail!("{err}")
            }
        }
    }

    /// Serialize `value` in the selected output format
    fn output<T: Serialize>(&self, out: &mut impl Write, value: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(value)?)?,
            OutputFormat::Pretty => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
            OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(value)?)?,
        }
        Ok(())
    }
}

fn envelope_summary<N>(envelope: &Envelope<'_, N>) -> serde_json::Value {
    json!({
        "code": envelope.code(),
        "message": envelope.message(),
        "status": envelope.status(),
        "kind": envelope.kind(),
    })
}

/// Read the payload from `file`, or stdin when none is given
fn read_payload(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(bytes)
        }
    }
}

