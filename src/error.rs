//! Error types for the decoding core
//!
//! Every decode path returns `Result<T, DecodeError>`. The enum carries one
//! variant per failure kind so callers can branch on [`DecodeError::kind`]
//! regardless of which endpoint or record produced the failure.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// A single field that failed normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted/indexed path of the field, e.g. `daily.limit` or `whitelist[2]`
    pub field: String,
    /// Shape the field should have had
    pub expected: &'static str,
    /// Shape actually found (`absent` when the field was missing)
    pub found: &'static str,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Create a field error for an absent field
    pub fn absent(field: impl Into<String>, expected: &'static str) -> Self {
        Self::new(field, expected, "absent")
    }

    /// Prefix the field path, used when a nested record reports upwards
    #[must_use]
    pub fn within(mut self, parent: &str) -> Self {
        self.field = if self.field.starts_with('[') {
            format!("{parent}{}", self.field)
        } else {
            format!("{parent}.{}", self.field)
        };
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}': expected {}, found {}",
            self.field, self.expected, self.found
        )
    }
}

/// One failed element of a list payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementFailure {
    /// Position of the element in the original list
    pub index: usize,
    /// Why the element failed
    pub error: DecodeError,
}

/// Discriminant of [`DecodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    MalformedEnvelope,
    InvalidPremise,
    MissingUmprn,
    MalformedField,
    InvalidRecord,
    AggregateElementFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MalformedEnvelope => "MalformedEnvelope",
            Self::InvalidPremise => "InvalidPremise",
            Self::MissingUmprn => "MissingUmprn",
            Self::MalformedField => "MalformedField",
            Self::InvalidRecord => "InvalidRecord",
            Self::AggregateElementFailure => "AggregateElementFailure",
        };
        f.write_str(name)
    }
}

/// The decode failure returned by every decoder in this crate
///
/// Serializes as a map with `kind`, a human-readable `message`, and the
/// variant's own members.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    // ============================================================================
    // Envelope Errors
    // ============================================================================
    #[error("Malformed envelope: {message}")]
    MalformedEnvelope { message: String },

    // ============================================================================
    // Record Errors
    // ============================================================================
    #[error("Invalid premise: {}", join_fields(.missing_fields))]
    InvalidPremise { missing_fields: Vec<FieldError> },

    #[error("Premise {udprn} has no UMPRN")]
    MissingUmprn { udprn: u64 },

    #[error("Malformed field {0}")]
    MalformedField(FieldError),

    #[error("Invalid {record}: {}", join_fields(.fields))]
    InvalidRecord {
        record: &'static str,
        fields: Vec<FieldError>,
    },

    // ============================================================================
    // List Errors
    // ============================================================================
    #[error("{} of {total} elements failed to decode: {}", .failures.len(), join_failures(.failures))]
    AggregateElementFailure {
        total: usize,
        failures: Vec<ElementFailure>,
    },
}

impl DecodeError {
    /// Create a malformed envelope error
    pub fn envelope(message: impl Into<String>) -> Self {
        Self::MalformedEnvelope {
            message: message.into(),
        }
    }

    /// Create a malformed field error
    pub fn field(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::MalformedField(FieldError::new(field, expected, found))
    }

    /// The kind of failure, for uniform branching
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedEnvelope { .. } => ErrorKind::MalformedEnvelope,
            Self::InvalidPremise { .. } => ErrorKind::InvalidPremise,
            Self::MissingUmprn { .. } => ErrorKind::MissingUmprn,
            Self::MalformedField(_) => ErrorKind::MalformedField,
            Self::InvalidRecord { .. } => ErrorKind::InvalidRecord,
            Self::AggregateElementFailure { .. } => ErrorKind::AggregateElementFailure,
        }
    }

    /// Field paths named by this error, in reported order
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            Self::InvalidPremise {
                missing_fields: fields,
            }
            | Self::InvalidRecord { fields, .. } => {
                fields.iter().map(|f| f.field.as_str()).collect()
            }
            Self::MalformedField(f) => vec![f.field.as_str()],
            _ => Vec::new(),
        }
    }

    /// Nested element failures of an aggregate error, in element order
    pub fn failures(&self) -> &[ElementFailure] {
        match self {
            Self::AggregateElementFailure { failures, .. } => failures,
            _ => &[],
        }
    }
}

impl Serialize for DecodeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind())?;
        map.serialize_entry("message", &self.to_string())?;
        match self {
            Self::MalformedEnvelope { .. } => {}
            Self::InvalidPremise { missing_fields } => {
                map.serialize_entry("missing_fields", missing_fields)?;
            }
            Self::MissingUmprn { udprn } => map.serialize_entry("udprn", udprn)?,
            Self::MalformedField(field) => {
                map.serialize_entry("field", &field.field)?;
                map.serialize_entry("expected", field.expected)?;
                map.serialize_entry("found", field.found)?;
            }
            Self::InvalidRecord { record, fields } => {
                map.serialize_entry("record", record)?;
                map.serialize_entry("fields", fields)?;
            }
            Self::AggregateElementFailure { total, failures } => {
                map.serialize_entry("total", total)?;
                map.serialize_entry("failures", failures)?;
            }
        }
        map.end()
    }
}

impl From<FieldError> for DecodeError {
    fn from(err: FieldError) -> Self {
        Self::MalformedField(err)
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_failures(failures: &[ElementFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("[{}] {}", f.index, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for the decoding core
pub type Result<T> = std::result::Result<T, DecodeError>;
