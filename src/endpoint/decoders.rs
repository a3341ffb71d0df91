//! One decoder per API endpoint

use super::compose::{
    array_at, decode_envelope, decode_list, expect_kind, member_array, result_of, single,
};
use super::types::{
    AddressQueryResponse, AddressQueryResults, AutocompleteResponse, DeletionResponse,
    KeyStatusResponse, KeyUsageResponse, LicenseeResponse, LicenseesResponse, Pagination,
    PossiblePagination, PostcodesResponse, PrivateKeyResponse, Response, ResultResponse,
    SuggestionHits, UdprnResponse, UmprnResponse,
};
use crate::envelope::EnvelopeKind;
use crate::error::Result;
use crate::node::JsonNode;
use crate::premise::{decode_address, decode_umprn_address};
use crate::records::{
    decode_deletion_status, decode_key, decode_key_status, decode_key_usage, decode_licensee,
    decode_suggestion, read_record, LicenseeList,
};

const LISTS: [EnvelopeKind; 2] = [EnvelopeKind::ListResult, EnvelopeKind::PaginatedListResult];

// ============================================================================
// Address Endpoints
// ============================================================================

/// `GET /postcodes/:postcode`
///
/// `result` is an array of premises. Multiple residence keys may add
/// `page`/`total`/`limit` beside it; each is kept only if present.
pub fn decode_postcodes_response<N: JsonNode>(raw: &N) -> Result<Response<PostcodesResponse>> {
    decode_envelope(raw, |envelope| {
        expect_kind(&envelope, &LISTS)?;
        let items = array_at(result_of(&envelope)?, "result")?;
        let result = decode_list(items, decode_address)?;
        let pagination = read_record("pagination", envelope.raw(), |r| PossiblePagination {
            page: r.optional_whole_number("page"),
            total: r.optional_whole_number("total"),
            limit: r.optional_whole_number("limit"),
        })?;

        Ok(PostcodesResponse {
            code: envelope.code(),
            message: envelope.message().to_string(),
            result,
            pagination,
        })
    })
}

/// `GET /addresses?query=`
///
/// No matches is an empty `hits` array, not an error envelope.
pub fn decode_address_query_response<N: JsonNode>(
    raw: &N,
) -> Result<Response<AddressQueryResponse>> {
    decode_envelope(raw, |envelope| {
        expect_kind(&envelope, &[EnvelopeKind::PaginatedListResult])?;
        let result = result_of(&envelope)?;
        let hits = decode_list(member_array(result, "hits")?, decode_address)?;
        let pagination = read_record("pagination", result, |r| Pagination {
            page: r.whole_number("page"),
            total: r.whole_number("total"),
            limit: r.whole_number("limit"),
        })?;

        Ok(ResultResponse {
            code: envelope.code(),
            message: envelope.message().to_string(),
            result: AddressQueryResults { hits, pagination },
        })
    })
}

/// `GET /autocomplete/addresses?query=`
pub fn decode_autocomplete_response<N: JsonNode>(
    raw: &N,
) -> Result<Response<AutocompleteResponse>> {
    decode_envelope(raw, |envelope| {
        expect_kind(&envelope, &LISTS)?;
        let result = result_of(&envelope)?;
        let hits = decode_list(member_array(result, "hits")?, decode_suggestion)?;

        Ok(ResultResponse {
            code: envelope.code(),
            message: envelope.message().to_string(),
            result: SuggestionHits { hits },
        })
    })
}

/// `GET /udprn/:udprn`
pub fn decode_udprn_response<N: JsonNode>(raw: &N) -> Result<Response<UdprnResponse>> {
    decode_envelope(raw, |envelope| single(envelope, decode_address))
}

/// `GET /umprn/:umprn`
pub fn decode_umprn_response<N: JsonNode>(raw: &N) -> Result<Response<UmprnResponse>> {
    decode_envelope(raw, |envelope| single(envelope, decode_umprn_address))
}

// ============================================================================
// Key Endpoints
// ============================================================================

/// `GET /keys/:key`
pub fn decode_key_status_response<N: JsonNode>(raw: &N) -> Result<Response<KeyStatusResponse>> {
    decode_envelope(raw, |envelope| single(envelope, decode_key_status))
}

/// `GET /keys/:key?user_token=`
pub fn decode_private_key_response<N: JsonNode>(
    raw: &N,
) -> Result<Response<PrivateKeyResponse>> {
    decode_envelope(raw, |envelope| single(envelope, decode_key))
}

/// `GET /keys/:key/usage?user_token=`
pub fn decode_key_usage_response<N: JsonNode>(raw: &N) -> Result<Response<KeyUsageResponse>> {
    decode_envelope(raw, |envelope| single(envelope, decode_key_usage))
}

// ============================================================================
// Licensee Endpoints
// ============================================================================

/// `GET /licensees/:licensee`, and the create/update responses
pub fn decode_licensee_response<N: JsonNode>(raw: &N) -> Result<Response<LicenseeResponse>> {
    decode_envelope(raw, |envelope| single(envelope, decode_licensee))
}

/// `GET /licensees`
///
/// `result` is `{licensees, hasMore}`; each licensee decodes independently.
pub fn decode_licensees_list_response<N: JsonNode>(
    raw: &N,
) -> Result<Response<LicenseesResponse>> {
    decode_envelope(raw, |envelope| {
        single(envelope, |result| {
            let licensees = decode_list(member_array(result, "licensees")?, decode_licensee)?;
            let has_more = read_record("licensee list", result, |r| r.boolean("hasMore"))?;
            Ok(LicenseeList {
                licensees,
                has_more,
            })
        })
    })
}

/// `DELETE /licensees/:licensee`
pub fn decode_deletion_response<N: JsonNode>(raw: &N) -> Result<Response<DeletionResponse>> {
    decode_envelope(raw, |envelope| single(envelope, decode_deletion_status))
}
