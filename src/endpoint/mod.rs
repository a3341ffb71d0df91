//! Endpoint decoders
//!
//! One decoder per endpoint, each composing the envelope discriminator with a
//! leaf decoder.
//!
//! # Overview
//!
//! ```text
//! raw payload ─▶ Envelope::parse ─┬─ error code ─▶ Response::Error(ApiErrorResponse)
//!                                 └─ 2xx ─▶ leaf decoder per record ─▶ Response::Success(..)
//! ```
//!
//! Lists decode every element and report all failures together as one
//! `AggregateElementFailure`. [`decode_each`] exposes the per-element results
//! for callers that want the good elements of a partly bad list.

mod compose;
mod decoders;
mod dispatch;
mod types;

pub use compose::{decode_each, decode_envelope, decode_list, single, ElementResults};
pub use decoders::{
    decode_address_query_response, decode_autocomplete_response, decode_deletion_response,
    decode_key_status_response, decode_key_usage_response, decode_licensee_response,
    decode_licensees_list_response, decode_postcodes_response, decode_private_key_response,
    decode_udprn_response, decode_umprn_response,
};
pub use dispatch::Endpoint;
pub use types::{
    AddressQueryResponse, AddressQueryResults, AutocompleteResponse, DecodedResponse,
    DeletionResponse, KeyStatusResponse, KeyUsageResponse, LicenseeResponse, LicenseesResponse,
    Pagination, PossiblePagination, PostcodesResponse, PrivateKeyResponse, Response,
    ResultResponse, SuggestionHits, UdprnResponse, UmprnResponse,
};
