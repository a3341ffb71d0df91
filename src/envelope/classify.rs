//! Envelope parsing and classification

use super::types::{ApiErrorResponse, Envelope, EnvelopeKind};
use crate::error::{DecodeError, Result};
use crate::node::JsonNode;
use tracing::debug;

const PAGINATION_FIELDS: [&str; 3] = ["page", "total", "limit"];

/// HTTP status carried by a response code: its leading three digits
///
/// `2000` is 200, `4040` is 404, `40401` is 404. Codes below 100 carry no
/// status.
pub fn http_status(code: i64) -> Option<u16> {
    if code < 100 {
        return None;
    }
    let mut status = code;
    while status >= 1000 {
        status /= 10;
    }
    u16::try_from(status).ok()
}

/// Classify a raw payload
pub fn classify<N: JsonNode>(raw: &N) -> Result<EnvelopeKind> {
    Envelope::parse(raw).map(|envelope| envelope.kind())
}

fn has_pagination<N: JsonNode>(node: &N) -> bool {
    PAGINATION_FIELDS
        .iter()
        .any(|field| node.present(field).is_some())
}

impl<'a, N: JsonNode> Envelope<'a, N> {
    /// Validate the envelope header and classify the payload
    ///
    /// Fails with [`DecodeError::MalformedEnvelope`] when `code` is not an
    /// integer with an HTTP status, `message` is not a string, or a 2xx
    /// envelope carries no `result`.
    pub fn parse(raw: &'a N) -> Result<Self> {
        if !raw.is_object() {
            return Err(DecodeError::envelope(format!(
                "expected an object, found {}",
                raw.type_name()
            )));
        }

        let code = match raw.field("code") {
            Some(value) => value.integer().ok_or_else(|| {
                DecodeError::envelope(format!(
                    "'code' must be an integer, found {}",
                    value.type_name()
                ))
            })?,
            None => return Err(DecodeError::envelope("missing 'code'")),
        };

        let message = match raw.field("message") {
            Some(value) => value.string().map(ToString::to_string).ok_or_else(|| {
                DecodeError::envelope(format!(
                    "'message' must be a string, found {}",
                    value.type_name()
                ))
            })?,
            None => return Err(DecodeError::envelope("missing 'message'")),
        };

        let status = http_status(code).ok_or_else(|| {
            DecodeError::envelope(format!("code {code} does not carry an HTTP status"))
        })?;

        let result = raw.present("result");

        let kind = if !(200..300).contains(&status) {
            EnvelopeKind::Error
        } else {
            let body = result.ok_or_else(|| {
                DecodeError::envelope(format!("success code {code} carries no result"))
            })?;

            if body.elements().is_some() {
                if has_pagination(raw) {
                    EnvelopeKind::PaginatedListResult
                } else {
                    EnvelopeKind::ListResult
                }
            } else if body.present("hits").is_some() {
                if has_pagination(body) {
                    EnvelopeKind::PaginatedListResult
                } else {
                    EnvelopeKind::ListResult
                }
            } else {
                EnvelopeKind::SingleResult
            }
        };

        debug!("Classified envelope {code} ({message}) as {kind}");

        Ok(Self {
            code,
            message,
            status,
            kind,
            result,
            raw,
        })
    }

    /// Convert an error envelope into its decoded form
    ///
    /// An error envelope that also carries a `result` is malformed.
    pub fn into_error_response(self) -> Result<ApiErrorResponse> {
        if self.kind != EnvelopeKind::Error {
            return Err(DecodeError::envelope(format!(
                "code {} is not an error code",
                self.code
            )));
        }
        if self.result.is_some() {
            return Err(DecodeError::envelope(format!(
                "error code {} carries a result",
                self.code
            )));
        }
        Ok(ApiErrorResponse {
            code: self.code,
            message: self.message,
        })
    }
}
