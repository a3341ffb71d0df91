//! Envelope composition shared by every endpoint decoder
//!
//! An endpoint decoder is the envelope check plus a result decoder. The
//! helpers here take the leaf decoder as a parameter, so the envelope is
//! handled once and only the payload decoder varies.

use super::types::{Response, ResultResponse};
use crate::envelope::{Envelope, EnvelopeKind};
use crate::error::{DecodeError, ElementFailure, Result};
use crate::node::JsonNode;
use tracing::warn;

/// Parse the envelope; decode error envelopes directly, hand results to `decode_result`
pub fn decode_envelope<'a, N, T>(
    raw: &'a N,
    decode_result: impl FnOnce(Envelope<'a, N>) -> Result<T>,
) -> Result<Response<T>>
where
    N: JsonNode,
{
    let envelope = Envelope::parse(raw)?;
    if envelope.kind() == EnvelopeKind::Error {
        return envelope.into_error_response().map(Response::Error);
    }
    decode_result(envelope).map(Response::Success)
}

/// Require one of `expected` kinds
pub fn expect_kind<N>(envelope: &Envelope<'_, N>, expected: &[EnvelopeKind]) -> Result<()> {
    if expected.contains(&envelope.kind()) {
        Ok(())
    } else {
        let wanted = expected
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        Err(DecodeError::envelope(format!(
            "expected {wanted}, found {}",
            envelope.kind()
        )))
    }
}

/// The `result` member of a success envelope
pub fn result_of<'a, N: JsonNode>(envelope: &Envelope<'a, N>) -> Result<&'a N> {
    envelope
        .result()
        .ok_or_else(|| DecodeError::envelope("missing 'result'"))
}

/// Decode a single-record result with `leaf`
pub fn single<'a, N, T>(
    envelope: Envelope<'a, N>,
    leaf: impl FnOnce(&'a N) -> Result<T>,
) -> Result<ResultResponse<T>>
where
    N: JsonNode,
{
    expect_kind(&envelope, &[EnvelopeKind::SingleResult])?;
    let result = leaf(result_of(&envelope)?)?;
    Ok(ResultResponse {
        code: envelope.code(),
        message: envelope.message().to_string(),
        result,
    })
}

/// Elements of an array member, or a malformed-envelope error naming `path`
pub fn array_at<'a, N: JsonNode>(node: &'a N, path: &str) -> Result<&'a [N]> {
    node.elements().ok_or_else(|| {
        DecodeError::envelope(format!(
            "'{path}' must be an array, found {}",
            node.type_name()
        ))
    })
}

/// The array under `result.<member>`
pub fn member_array<'a, N: JsonNode>(result: &'a N, member: &str) -> Result<&'a [N]> {
    let path = format!("result.{member}");
    match result.field(member) {
        Some(node) => array_at(node, &path),
        None => Err(DecodeError::envelope(format!("missing '{path}'"))),
    }
}

/// Per-element decode results of a list, in original order
#[derive(Debug, Clone, PartialEq)]
pub struct ElementResults<T> {
    results: Vec<Result<T>>,
}

impl<T> ElementResults<T> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Result for the element at `index`
    pub fn get(&self, index: usize) -> Option<&Result<T>> {
        self.results.get(index)
    }

    /// Decoded elements with their indices
    pub fn successes(&self) -> impl Iterator<Item = (usize, &T)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().ok().map(|v| (i, v)))
    }

    /// Failed elements with their indices
    pub fn failures(&self) -> impl Iterator<Item = (usize, &DecodeError)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().err().map(|e| (i, e)))
    }

    /// Owned per-element results, in original order
    pub fn into_results(self) -> Vec<Result<T>> {
        self.results
    }

    /// All elements, or one `AggregateElementFailure` naming every bad index
    pub fn into_aggregate(self) -> Result<Vec<T>> {
        let results = self.into_results();
        let total = results.len();
        let mut values = Vec::with_capacity(total);
        let mut failures = Vec::new();

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(value) => values.push(value),
                Err(error) => failures.push(ElementFailure { index, error }),
            }
        }

        if failures.is_empty() {
            Ok(values)
        } else {
            warn!(
                "{} of {} list elements failed to decode (first at index {})",
                failures.len(),
                total,
                failures[0].index
            );
            Err(DecodeError::AggregateElementFailure { total, failures })
        }
    }
}

/// Decode every element independently with `leaf`
///
/// A failed element never stops the others from being decoded.
pub fn decode_each<N, T>(items: &[N], leaf: impl Fn(&N) -> Result<T>) -> ElementResults<T> {
    ElementResults {
        results: items.iter().map(leaf).collect(),
    }
}

/// Decode every element, aggregating failures
pub fn decode_list<N, T>(items: &[N], leaf: impl Fn(&N) -> Result<T>) -> Result<Vec<T>> {
    decode_each(items, leaf).into_aggregate()
}
