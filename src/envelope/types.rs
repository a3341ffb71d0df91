//! Envelope types

use serde::Serialize;
use std::fmt;

/// Shape of a response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnvelopeKind {
    /// Non-2xx code: `{code, message}` only
    Error,
    /// `result` is a single record
    SingleResult,
    /// `result` is an array, or an object carrying `hits`
    ListResult,
    /// A list result with `page`/`total`/`limit` alongside it
    PaginatedListResult,
}

impl EnvelopeKind {
    /// Whether the result holds a list of records
    pub fn is_list(self) -> bool {
        matches!(self, Self::ListResult | Self::PaginatedListResult)
    }
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::SingleResult => "single result",
            Self::ListResult => "list result",
            Self::PaginatedListResult => "paginated list result",
        };
        f.write_str(name)
    }
}

/// A decoded error envelope
///
/// This is a legitimate API outcome (key out of credit, postcode not found,
/// ...), not a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorResponse {
    pub code: i64,
    pub message: String,
}

impl ApiErrorResponse {
    /// HTTP status the code belongs to
    pub fn status(&self) -> Option<u16> {
        super::http_status(self.code)
    }
}

/// A validated envelope header with its classification
///
/// Borrows the raw payload; the result body is decoded by the endpoint
/// decoders.
#[derive(Debug, Clone)]
pub struct Envelope<'a, N> {
    pub(super) code: i64,
    pub(super) message: String,
    pub(super) status: u16,
    pub(super) kind: EnvelopeKind,
    pub(super) result: Option<&'a N>,
    pub(super) raw: &'a N,
}

impl<'a, N> Envelope<'a, N> {
    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status derived from the code
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn kind(&self) -> EnvelopeKind {
        self.kind
    }

    /// The `result` member, if present and not null
    pub fn result(&self) -> Option<&'a N> {
        self.result
    }

    /// The whole payload
    pub fn raw(&self) -> &'a N {
        self.raw
    }
}
