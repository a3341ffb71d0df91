//! Endpoint identifiers and dispatch

use super::decoders::{
    decode_address_query_response, decode_autocomplete_response, decode_deletion_response,
    decode_key_status_response, decode_key_usage_response, decode_licensee_response,
    decode_licensees_list_response, decode_postcodes_response, decode_private_key_response,
    decode_udprn_response, decode_umprn_response,
};
use super::types::DecodedResponse;
use crate::error::{DecodeError, Result};
use crate::node::JsonNode;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The endpoint family a payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    Postcodes,
    Addresses,
    Autocomplete,
    Udprn,
    Umprn,
    KeyStatus,
    KeyDetails,
    KeyUsage,
    Licensee,
    Licensees,
    Deletion,
}

impl Endpoint {
    /// Every endpoint, in listing order
    pub const ALL: [Endpoint; 11] = [
        Self::Postcodes,
        Self::Addresses,
        Self::Autocomplete,
        Self::Udprn,
        Self::Umprn,
        Self::KeyStatus,
        Self::KeyDetails,
        Self::KeyUsage,
        Self::Licensee,
        Self::Licensees,
        Self::Deletion,
    ];

    /// Identifier used on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postcodes => "postcodes",
            Self::Addresses => "addresses",
            Self::Autocomplete => "autocomplete",
            Self::Udprn => "udprn",
            Self::Umprn => "umprn",
            Self::KeyStatus => "key-status",
            Self::KeyDetails => "key-details",
            Self::KeyUsage => "key-usage",
            Self::Licensee => "licensee",
            Self::Licensees => "licensees",
            Self::Deletion => "deletion",
        }
    }

    /// Request route producing this payload, for listings
    pub fn route(self) -> &'static str {
        match self {
            Self::Postcodes => "GET /v1/postcodes/:postcode",
            Self::Addresses => "GET /v1/addresses?query=",
            Self::Autocomplete => "GET /v1/autocomplete/addresses?query=",
            Self::Udprn => "GET /v1/udprn/:udprn",
            Self::Umprn => "GET /v1/umprn/:umprn",
            Self::KeyStatus => "GET /v1/keys/:key",
            Self::KeyDetails => "GET /v1/keys/:key?user_token=",
            Self::KeyUsage => "GET /v1/keys/:key/usage?user_token=",
            Self::Licensee => "GET|POST /v1/licensees/:licensee",
            Self::Licensees => "GET /v1/licensees",
            Self::Deletion => "DELETE /v1/licensees/:licensee",
        }
    }

    /// Decode a parsed payload with this endpoint's decoder
    pub fn decode<N: JsonNode>(self, raw: &N) -> Result<DecodedResponse> {
        debug!("Decoding {self} response");
        let decoded = match self {
            Self::Postcodes => {
                decode_postcodes_response(raw)?.into_decoded(DecodedResponse::Postcodes)
            }
            Self::Addresses => {
                decode_address_query_response(raw)?.into_decoded(DecodedResponse::Addresses)
            }
            Self::Autocomplete => {
                decode_autocomplete_response(raw)?.into_decoded(DecodedResponse::Autocomplete)
            }
            Self::Udprn => decode_udprn_response(raw)?.into_decoded(DecodedResponse::Udprn),
            Self::Umprn => decode_umprn_response(raw)?.into_decoded(DecodedResponse::Umprn),
            Self::KeyStatus => {
                decode_key_status_response(raw)?.into_decoded(DecodedResponse::KeyStatus)
            }
            Self::KeyDetails => {
                decode_private_key_response(raw)?.into_decoded(DecodedResponse::KeyDetails)
            }
            Self::KeyUsage => {
                decode_key_usage_response(raw)?.into_decoded(DecodedResponse::KeyUsage)
            }
            Self::Licensee => {
                decode_licensee_response(raw)?.into_decoded(DecodedResponse::Licensee)
            }
            Self::Licensees => {
                decode_licensees_list_response(raw)?.into_decoded(DecodedResponse::Licensees)
            }
            Self::Deletion => {
                decode_deletion_response(raw)?.into_decoded(DecodedResponse::Deletion)
            }
        };
        Ok(decoded)
    }

    /// Parse raw JSON bytes and decode them
    ///
    /// Bytes that are not JSON fail as a malformed envelope.
    pub fn decode_slice(self, bytes: &[u8]) -> Result<DecodedResponse> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| DecodeError::envelope(format!("payload is not valid JSON: {e}")))?;
        self.decode(&value)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.as_str() == s)
            .ok_or_else(|| {
                let known = Self::ALL.map(Endpoint::as_str).join(", ");
                format!("unknown endpoint '{s}' (expected one of: {known})")
            })
    }
}
