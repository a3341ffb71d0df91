//! Integration tests over captured API payloads
//!
//! Tests the full flow: raw bytes → envelope → typed response → JSON output

use postcodes_decode::endpoint::{DecodedResponse, Endpoint};
use postcodes_decode::{
    classify, decode_licensees_list_response, decode_postcodes_response,
    decode_private_key_response, decode_umprn_response, AddressNumber, DecodeError, EnvelopeKind,
    ErrorKind, Response,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

const POSTCODE_LOOKUP: &str = include_str!("fixtures/postcode_lookup.json");
const UMPRN_LOOKUP: &str = include_str!("fixtures/umprn_lookup.json");
const KEY_DETAILS: &str = include_str!("fixtures/key_details.json");
const LICENSEES: &str = include_str!("fixtures/licensees.json");
const AUTOCOMPLETE: &str = include_str!("fixtures/autocomplete.json");
const INVALID_KEY: &str = include_str!("fixtures/invalid_key.json");

fn parse(fixture: &str) -> Value {
    serde_json::from_str(fixture).unwrap()
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test_case(POSTCODE_LOOKUP, EnvelopeKind::ListResult ; "postcode lookup")]
#[test_case(UMPRN_LOOKUP, EnvelopeKind::SingleResult ; "umprn lookup")]
#[test_case(KEY_DETAILS, EnvelopeKind::SingleResult ; "key details")]
#[test_case(LICENSEES, EnvelopeKind::SingleResult ; "licensees")]
#[test_case(AUTOCOMPLETE, EnvelopeKind::ListResult ; "autocomplete")]
#[test_case(INVALID_KEY, EnvelopeKind::Error ; "invalid key")]
fn test_classify_fixture(fixture: &str, expected: EnvelopeKind) {
    assert_eq!(classify(&parse(fixture)).unwrap(), expected);
}

// ============================================================================
// Postcode Lookup Tests
// ============================================================================

#[test]
fn test_postcode_lookup_fixture() {
    let response = decode_postcodes_response(&parse(POSTCODE_LOOKUP))
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(response.result.len(), 2);

    let house = &response.result[0];
    assert_eq!(house.udprn, 25_962_203);
    assert_eq!(house.eastings, AddressNumber::from(524_466_u64));

    let flat = &response.result[1];
    assert_eq!(flat.sub_building_name, "Basement Flat");
    assert_eq!(flat.longitude, AddressNumber::Empty);
    assert_eq!(flat.latitude, AddressNumber::Empty);
    assert!(flat.umprn.is_none());

    // Unknown members are dropped, the rest serializes unchanged
    let out = serde_json::to_value(&response).unwrap();
    assert_eq!(out["result"][0], parse(POSTCODE_LOOKUP)["result"][0]);
    assert_eq!(out["result"][1]["longitude"], json!(""));
    assert!(out["result"][1].get("uprn").is_none());
}

#[test]
fn test_postcode_lookup_fixture_with_bad_elements() {
    let mut raw = parse(POSTCODE_LOOKUP);
    raw["result"][1]["udprn"] = json!("25962215");
    raw["result"][1]["eastings"] = json!(null);

    let err = decode_postcodes_response(&raw).unwrap_err();
    let DecodeError::AggregateElementFailure { total, failures } = &err else {
        panic!("expected aggregate failure, got {err:?}");
    };
    assert_eq!(*total, 2);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].index, 1);
    assert_eq!(failures[0].error.field_names(), vec!["udprn", "eastings"]);
}

// ============================================================================
// Single Result Tests
// ============================================================================

#[test]
fn test_umprn_lookup_fixture() {
    let raw = parse(UMPRN_LOOKUP);
    let response = decode_umprn_response(&raw).unwrap().success().unwrap();
    assert_eq!(response.result.umprn(), 50_906_690);
    assert_eq!(response.result.organisation_name, "University of Warwick");
    assert_eq!(serde_json::to_value(&response).unwrap(), raw);
}

#[test]
fn test_umprn_lookup_fixture_without_umprn() {
    let mut raw = parse(UMPRN_LOOKUP);
    raw["result"]["umprn"] = json!("");
    let err = decode_umprn_response(&raw).unwrap_err();
    assert_eq!(err, DecodeError::MissingUmprn { udprn: 52_126_786 });
}

#[test]
fn test_key_details_fixture() {
    let raw = parse(KEY_DETAILS);
    let key = decode_private_key_response(&raw)
        .unwrap()
        .success()
        .unwrap()
        .result;
    assert_eq!(key.lookups_remaining, serde_json::Number::from(18_742_u64));
    assert_eq!(key.daily_limit.limit, None);
    assert_eq!(key.individual_limit.limit, Some(serde_json::Number::from(250_u64)));
    assert_eq!(key.current_purchases[1].expires, None);
    assert_eq!(serde_json::to_value(&key).unwrap(), raw["result"]);
}

#[test]
fn test_licensees_fixture() {
    let raw = parse(LICENSEES);
    let list = decode_licensees_list_response(&raw)
        .unwrap()
        .success()
        .unwrap()
        .result;
    assert!(list.has_more);
    let names: Vec<&str> = list.licensees.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Lettings", "Widget Co"]);
    assert_eq!(list.licensees[0].daily.limit, Some(serde_json::Number::from(1000_u64)));
    assert_eq!(list.licensees[1].daily.limit, None);
    assert_eq!(serde_json::to_value(&list).unwrap(), raw["result"]);
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test_case(Endpoint::Postcodes, POSTCODE_LOOKUP ; "postcodes")]
#[test_case(Endpoint::Umprn, UMPRN_LOOKUP ; "umprn")]
#[test_case(Endpoint::KeyDetails, KEY_DETAILS ; "key details")]
#[test_case(Endpoint::Licensees, LICENSEES ; "licensees")]
#[test_case(Endpoint::Autocomplete, AUTOCOMPLETE ; "autocomplete")]
fn test_decode_slice_fixture(endpoint: Endpoint, fixture: &str) {
    let decoded = endpoint.decode_slice(fixture.as_bytes()).unwrap();
    assert!(!decoded.is_error());
}

#[test]
fn test_invalid_key_on_every_endpoint() {
    for endpoint in Endpoint::ALL {
        let decoded = endpoint.decode_slice(INVALID_KEY.as_bytes()).unwrap();
        let DecodedResponse::Error(error) = decoded else {
            panic!("{endpoint} did not yield an error response");
        };
        assert_eq!(error.code, 4010);
        assert_eq!(error.status(), Some(401));
    }
}

#[test]
fn test_fixture_on_wrong_endpoint() {
    let err = Endpoint::Deletion
        .decode_slice(KEY_DETAILS.as_bytes())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRecord);
    assert_eq!(err.field_names(), vec!["deleted"]);
}

#[test]
fn test_error_response_map() {
    let response = decode_postcodes_response(&parse(INVALID_KEY)).unwrap();
    let mapped = response.map(|body| body.result.len());
    assert!(matches!(mapped, Response::Error(ref e) if e.code == 4010));
}
