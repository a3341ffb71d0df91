//! Endpoint response types

use crate::envelope::ApiErrorResponse;
use crate::premise::{Address, UmprnAddress};
use crate::records::{
    AddressSuggestion, DeletionStatus, Key, KeyStatus, KeyUsage, Licensee, LicenseeList,
};
use serde::Serialize;

/// Outcome of a successfully decoded payload
///
/// An error envelope is a legitimate response, so it is a variant here
/// rather than a [`DecodeError`](crate::DecodeError).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response<T> {
    Success(T),
    Error(ApiErrorResponse),
}

impl<T> Response<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success body, if any
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(body) => Some(body),
            Self::Error(_) => None,
        }
    }

    /// The error envelope, if any
    pub fn error(&self) -> Option<&ApiErrorResponse> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Map the success body
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        match self {
            Self::Success(body) => Response::Success(f(body)),
            Self::Error(error) => Response::Error(error),
        }
    }
}

/// A success envelope carrying a result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultResponse<T> {
    pub code: i64,
    pub message: String,
    pub result: T,
}

/// Pagination metadata guaranteed by list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub total: u64,
    pub limit: u64,
}

/// Pagination metadata that only some responses carry
///
/// Each member stays `None` when absent; no default is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PossiblePagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl PossiblePagination {
    /// Whether the response carried any pagination member
    pub fn is_paginated(&self) -> bool {
        self.page.is_some() || self.total.is_some() || self.limit.is_some()
    }
}

/// Postcode lookup: an array of premises, paginated for multiple residence keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostcodesResponse {
    pub code: i64,
    pub message: String,
    pub result: Vec<Address>,
    #[serde(flatten)]
    pub pagination: PossiblePagination,
}

/// Result of a free-text address query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressQueryResults {
    pub hits: Vec<Address>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Result of an autocomplete query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionHits {
    pub hits: Vec<AddressSuggestion>,
}

pub type AddressQueryResponse = ResultResponse<AddressQueryResults>;
pub type AutocompleteResponse = ResultResponse<SuggestionHits>;
pub type UdprnResponse = ResultResponse<Address>;
pub type UmprnResponse = ResultResponse<UmprnAddress>;
pub type KeyStatusResponse = ResultResponse<KeyStatus>;
pub type PrivateKeyResponse = ResultResponse<Key>;
pub type KeyUsageResponse = ResultResponse<KeyUsage>;
pub type LicenseeResponse = ResultResponse<Licensee>;
pub type LicenseesResponse = ResultResponse<LicenseeList>;
pub type DeletionResponse = ResultResponse<DeletionStatus>;

/// Any decoded response, as produced by [`Endpoint::decode`](super::Endpoint::decode)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedResponse {
    Postcodes(PostcodesResponse),
    Addresses(AddressQueryResponse),
    Autocomplete(AutocompleteResponse),
    Udprn(UdprnResponse),
    Umprn(UmprnResponse),
    KeyStatus(KeyStatusResponse),
    KeyDetails(PrivateKeyResponse),
    KeyUsage(KeyUsageResponse),
    Licensee(LicenseeResponse),
    Licensees(LicenseesResponse),
    Deletion(DeletionResponse),
    Error(ApiErrorResponse),
}

impl DecodedResponse {
    /// Whether this is an error envelope
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl<T> Response<T> {
    /// Fold into a [`DecodedResponse`] using `wrap` for the success body
    pub fn into_decoded(self, wrap: impl FnOnce(T) -> DecodedResponse) -> DecodedResponse {
        match self {
            Self::Success(body) => wrap(body),
            Self::Error(error) => DecodedResponse::Error(error),
        }
    }
}
