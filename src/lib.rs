// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Postcode API response decoding
//!
//! Strict decoding and validation of the JSON payloads returned by a UK
//! postcode and address lookup API. Every decoder either yields a fully
//! typed value or a structured [`DecodeError`] naming what is wrong.
//!
//! ## Features
//!
//! - **Envelope classification**: error, single, list and paginated list results
//! - **Premise records**: PAF addresses, including the `""` geodata quirk
//! - **Account records**: key status, key details, usage, licensees
//! - **List aggregation**: every bad element reported in one error
//! - **Value-model agnostic**: decoders run over `serde_json` or `serde_yaml` values
//!
//! ## Quick Start
//!
//! ```rust
//! use postcodes_decode::{decode_postcodes_response, Response};
//! use serde_json::json;
//!
//! let raw = json!({"code": 4040, "message": "Postcode not found"});
//! match decode_postcodes_response(&raw).unwrap() {
//!     Response::Error(err) => assert_eq!(err.status(), Some(404)),
//!     Response::Success(_) => unreachable!(),
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     Endpoint decoders                         │
//! │  decode_*_response(raw) → Response<T>   Endpoint::decode(raw) │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────────┬────────────────────┐
//! │   Envelope   │    Premise               │    Records         │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ code/message │ Address                  │ Suggestion, Key    │
//! │ result shape │ UmprnAddress             │ Licensee, Deletion │
//! └──────────────┴──────────────┬───────────┴────────────────────┘
//!                               │
//! ┌─────────────────────────────┴─────────────────────────────────┐
//! │  Normalize: AddressNumber, strict fields, RecordReader        │
//! │  Node: JsonNode over serde_json::Value / serde_yaml::Value    │
//! └───────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for decoding
pub mod error;

/// Read-only view over parsed JSON values
pub mod node;

/// Primitive field normalization
pub mod normalize;

/// Premise (address) records
pub mod premise;

/// Envelope validation and classification
pub mod envelope;

/// Non-address records
pub mod records;

/// Endpoint response decoders
pub mod endpoint;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{DecodeError, ElementFailure, ErrorKind, FieldError, Result};
pub use node::JsonNode;

pub use endpoint::{
    decode_address_query_response, decode_autocomplete_response, decode_deletion_response,
    decode_each, decode_key_status_response, decode_key_usage_response, decode_licensee_response,
    decode_licensees_list_response, decode_postcodes_response, decode_private_key_response,
    decode_udprn_response, decode_umprn_response, DecodedResponse, ElementResults, Endpoint,
    Response,
};
pub use envelope::{classify, http_status, ApiErrorResponse, Envelope, EnvelopeKind};
pub use normalize::{decode_address_number, AddressNumber};
pub use premise::{decode_address, decode_umprn_address, Address, UmprnAddress};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
