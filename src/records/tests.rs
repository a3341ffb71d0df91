//! Tests for the non-address record decoders

use super::*;
use crate::error::{DecodeError, ErrorKind};
use pretty_assertions::assert_eq;
use serde_json::{json, Number, Value};
use test_case::test_case;

fn key_details() -> Value {
    json!({
        "lookups_remaining": 1794,
        "daily_limit": {"limit": null, "consumed": 12},
        "individual_limit": {"limit": 50},
        "allowed_urls": ["https://www.example.com", "https://shop.example.com"],
        "notifications": {"emails": ["ops@example.com"], "enabled": true},
        "automated_topups": {"enabled": false},
        "current_purchases": [
            {"expires": "2027-03-01T00:00:00.000Z", "purchased": 2000, "consumed": 206},
            {"expires": null, "purchased": 100, "consumed": 0}
        ]
    })
}

fn licensee() -> Value {
    json!({
        "id": "sl_hK9Cs3AhUtuvFqcNnxbZdD",
        "key": "ak_hK9Cs3AhUtuvFqcNnxbZdD",
        "name": "Acme Ltd",
        "address": "1 High Street, Anytown",
        "postcode": "AB1 2CD",
        "createdAt": "2026-01-12T09:30:00.000Z",
        "whitelist": ["https://b.acme.test", "https://a.acme.test"],
        "daily": {"limit": 1000, "count": 7, "updatedAt": "2026-10-19T08:00:00.000Z"}
    })
}

// ============================================================================
// Suggestion Tests
// ============================================================================

#[test]
fn test_decode_suggestion() {
    let raw = json!({
        "suggestion": "Flat 1, 10 Downing Street, London, SW1A",
        "urls": {"udprn": "/v1/udprn/23747771", "umprn": "/v1/umprn/50906690"},
        "udprn": 23_747_771,
        "umprn": 50_906_690
    });
    let suggestion = decode_suggestion(&raw).unwrap();
    assert_eq!(
        suggestion,
        AddressSuggestion {
            suggestion: "Flat 1, 10 Downing Street, London, SW1A".to_string(),
            urls: SuggestionUrls {
                udprn: "/v1/udprn/23747771".to_string(),
                umprn: Some("/v1/umprn/50906690".to_string()),
            },
            udprn: 23_747_771,
            umprn: Some(50_906_690),
        }
    );
    assert_eq!(serde_json::to_value(&suggestion).unwrap(), raw);
}

#[test]
fn test_decode_suggestion_without_umprn() {
    let raw = json!({
        "suggestion": "10 Downing Street, London, SW1A",
        "urls": {"udprn": "/v1/udprn/23747771"},
        "udprn": 23_747_771
    });
    let suggestion = decode_suggestion(&raw).unwrap();
    assert_eq!(suggestion.umprn, None);
    assert_eq!(suggestion.urls.umprn, None);
    assert_eq!(serde_json::to_value(&suggestion).unwrap(), raw);
}

#[test]
fn test_decode_suggestion_reports_nested_fields() {
    let raw = json!({"suggestion": 1, "urls": {"udprn": 8}, "udprn": "8"});
    let err = decode_suggestion(&raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRecord);
    assert_eq!(err.field_names(), vec!["suggestion", "urls.udprn", "udprn"]);
}

// ============================================================================
// Key Tests
// ============================================================================

#[test]
fn test_decode_key_status() {
    assert_eq!(
        decode_key_status(&json!({"available": true})),
        Ok(KeyStatus { available: true })
    );
    assert!(decode_key_status(&json!({"available": "yes"})).is_err());
}

#[test]
fn test_decode_key() {
    let key = decode_key(&key_details()).unwrap();
    assert_eq!(key.lookups_remaining, Number::from(1794_u64));
    assert_eq!(key.daily_limit, DailyLimit { limit: None, consumed: 12 });
    assert_eq!(key.individual_limit.limit, Some(Number::from(50_u64)));
    assert_eq!(key.current_purchases.len(), 2);
    assert_eq!(key.current_purchases[1].expires, None);
    assert_eq!(serde_json::to_value(&key).unwrap(), key_details());
}

#[test]
fn test_decode_key_accepts_any_number() {
    let mut raw = key_details();
    raw["lookups_remaining"] = json!(12.5);
    raw["individual_limit"]["limit"] = json!(-1);

    let key = decode_key(&raw).unwrap();
    assert_eq!(key.lookups_remaining, Number::from_f64(12.5).unwrap());
    assert_eq!(key.individual_limit.limit, Some(Number::from(-1_i64)));
    assert_eq!(serde_json::to_value(&key).unwrap(), raw);
}

#[test]
fn test_decode_key_rejects_non_numbers() {
    let mut raw = key_details();
    raw["lookups_remaining"] = json!("1794");
    raw["individual_limit"]["limit"] = json!("");

    let err = decode_key(&raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRecord);
    assert_eq!(
        err.field_names(),
        vec!["lookups_remaining", "individual_limit.limit"]
    );
}

#[test]
fn test_decode_key_collects_nested_failures() {
    let mut raw = key_details();
    raw["daily_limit"]["limit"] = json!("");
    raw["notifications"]["emails"][0] = json!(false);
    raw["current_purchases"][1]["purchased"] = json!(null);
    raw.as_object_mut().unwrap().remove("automated_topups");

    let err = decode_key(&raw).unwrap_err();
    assert_eq!(
        err.field_names(),
        vec![
            "daily_limit.limit",
            "notifications.emails[0]",
            "automated_topups",
            "current_purchases[1].purchased",
        ]
    );
}

#[test]
fn test_decode_key_usage() {
    let raw = json!({
        "start": "2026-10-01T00:00:00.000Z",
        "end": "2026-10-03T00:00:00.000Z",
        "total": 12,
        "dailyCount": [
            {"date": "2026-10-01T00:00:00.000Z", "count": 5},
            {"date": "2026-10-02T00:00:00.000Z", "count": 7}
        ]
    });
    let usage = decode_key_usage(&raw).unwrap();
    assert_eq!(usage.total, 12);
    assert_eq!(usage.daily_count[1].count, 7);
    assert_eq!(serde_json::to_value(&usage).unwrap(), raw);
}

// ============================================================================
// Licensee Tests
// ============================================================================

#[test]
fn test_decode_licensee() {
    let decoded = decode_licensee(&licensee()).unwrap();
    assert_eq!(decoded.name, "Acme Ltd");
    assert_eq!(
        decoded.whitelist,
        vec!["https://b.acme.test".to_string(), "https://a.acme.test".to_string()]
    );
    assert_eq!(decoded.daily.limit, Some(Number::from(1000_u64)));
    assert_eq!(serde_json::to_value(&decoded).unwrap(), licensee());
}

#[test]
fn test_decode_licensee_null_limit() {
    let mut raw = licensee();
    raw["daily"]["limit"] = json!(null);
    let decoded = decode_licensee(&raw).unwrap();
    assert_eq!(decoded.daily.limit, None);
    assert_eq!(serde_json::to_value(&decoded).unwrap()["daily"]["limit"], json!(null));
}

#[test_case(json!(-1) ; "negative")]
#[test_case(json!(2.5) ; "fraction")]
#[test_case(json!(0) ; "zero")]
fn test_decode_licensee_accepts_limit(limit: Value) {
    let mut raw = licensee();
    raw["daily"]["limit"] = limit.clone();
    let decoded = decode_licensee(&raw).unwrap();
    assert_eq!(decoded.daily.limit.map(Value::Number), Some(limit));
}

#[test_case(json!("") ; "empty string")]
#[test_case(json!("1000") ; "numeric string")]
#[test_case(json!(true) ; "boolean")]
fn test_decode_licensee_rejects_limit(limit: Value) {
    let mut raw = licensee();
    raw["daily"]["limit"] = limit;
    let err = decode_licensee(&raw).unwrap_err();
    assert_eq!(err.field_names(), vec!["daily.limit"]);
}

#[test]
fn test_decode_licensee_rejects_absent_limit() {
    let mut raw = licensee();
    raw["daily"].as_object_mut().unwrap().remove("limit");
    assert!(decode_licensee(&raw).is_err());
}

#[test]
fn test_decode_licensee_non_object() {
    let err = decode_licensee(&json!(["sl_1"])).unwrap_err();
    assert_eq!(err, DecodeError::field("licensee", "object", "array"));
}

// ============================================================================
// Deletion / Request Body Tests
// ============================================================================

#[test]
fn test_decode_deletion_status() {
    assert_eq!(
        decode_deletion_status(&json!({"deleted": 1})),
        Ok(DeletionStatus { deleted: 1 })
    );
    let err = decode_deletion_status(&json!({"deleted": true})).unwrap_err();
    assert_eq!(err.to_string(), "Invalid deletion status: 'deleted': expected non-negative integer, found boolean");
}

#[test]
fn test_new_licensee_serializes_without_unset_fields() {
    let body = NewLicensee {
        name: "Acme Ltd".to_string(),
        address: "1 High Street".to_string(),
        postcode: "AB1 2CD".to_string(),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"name": "Acme Ltd", "address": "1 High Street", "postcode": "AB1 2CD"})
    );

    let body = NewLicensee {
        whitelist: Some(vec!["https://acme.test".to_string()]),
        daily: Some(NewLicenseeDailyLimit { limit: 500 }),
        ..body
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["daily"], json!({"limit": 500}));
    assert_eq!(value["whitelist"], json!(["https://acme.test"]));
}
