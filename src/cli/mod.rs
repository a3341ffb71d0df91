//! CLI module
//!
//! Command-line front end over the decoders.
//!
//! # Commands
//!
//! - `decode <endpoint> [FILE]` - Decode a payload and print the typed result
//! - `classify [FILE]` - Print the envelope classification only
//! - `endpoints` - List supported endpoints

mod commands;
mod runner;

pub use commands::{Cli, Commands, InputFormat, OutputFormat};
pub use runner::Runner;
