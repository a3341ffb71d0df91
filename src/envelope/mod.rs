//! Envelope discriminator
//!
//! Every API response is wrapped in a `{code, message, ...}` envelope. This
//! module validates that header and classifies the envelope as an error, a
//! single result, a list result, or a paginated list result.
//!
//! # Classification
//!
//! The status bucket of `code` (its leading three digits, e.g. `4040` is
//! HTTP 404) decides first: anything outside 2xx is an error envelope no
//! matter what else the body carries. A 2xx envelope must carry a `result`;
//! its shape then picks the remaining kinds.

mod classify;
mod types;

pub use classify::{classify, http_status};
pub use types::{ApiErrorResponse, Envelope, EnvelopeKind};
