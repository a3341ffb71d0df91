//! Record decoder implementations

use super::types::{
    AddressSuggestion, AutomatedTopupConfiguration, DailyCount, DailyLimit, DeletionStatus,
    IndividualLimit, Key, KeyStatus, KeyUsage, Licensee, LicenseeDailyLimit,
    NotificationsConfiguration, Purchase, SuggestionUrls,
};
use crate::error::{DecodeError, Result};
use crate::node::JsonNode;
use crate::normalize::RecordReader;

/// Run `read` over an object node, wrapping failures as `InvalidRecord`
pub(crate) fn read_record<'a, N, T>(
    record: &'static str,
    raw: &'a N,
    read: impl FnOnce(&mut RecordReader<'a, N>) -> T,
) -> Result<T>
where
    N: JsonNode,
{
    let mut reader =
        RecordReader::new(raw).map_err(|found| DecodeError::field(record, "object", found))?;
    let value = read(&mut reader);
    reader
        .finish(value)
        .map_err(|fields| DecodeError::InvalidRecord { record, fields })
}

// ============================================================================
// Autocomplete
// ============================================================================

/// Decode one autocomplete hit
pub fn decode_suggestion<N: JsonNode>(raw: &N) -> Result<AddressSuggestion> {
    read_record("suggestion", raw, |r| AddressSuggestion {
        suggestion: r.string("suggestion"),
        urls: r.object("urls", |u| SuggestionUrls {
            udprn: u.string("udprn"),
            umprn: u.optional_string("umprn"),
        }),
        udprn: r.whole_number("udprn"),
        umprn: r.optional_whole_number("umprn"),
    })
}

// ============================================================================
// Keys
// ============================================================================

/// Decode a public key availability record
pub fn decode_key_status<N: JsonNode>(raw: &N) -> Result<KeyStatus> {
    read_record("key status", raw, |r| KeyStatus {
        available: r.boolean("available"),
    })
}

/// Decode a private key detail record
pub fn decode_key<N: JsonNode>(raw: &N) -> Result<Key> {
    read_record("key", raw, |r| Key {
        lookups_remaining: r.number("lookups_remaining"),
        daily_limit: r.object("daily_limit", |d| DailyLimit {
            limit: d.number_or_null("limit"),
            consumed: d.whole_number("consumed"),
        }),
        individual_limit: r.object("individual_limit", |i| IndividualLimit {
            limit: i.number_or_null("limit"),
        }),
        allowed_urls: r.string_list("allowed_urls"),
        notifications: r.object("notifications", |n| NotificationsConfiguration {
            emails: n.string_list("emails"),
            enabled: n.boolean("enabled"),
        }),
        automated_topups: r.object("automated_topups", |a| AutomatedTopupConfiguration {
            enabled: a.boolean("enabled"),
        }),
        current_purchases: r.list("current_purchases", |p| Purchase {
            expires: p.string_or_null("expires"),
            purchased: p.whole_number("purchased"),
            consumed: p.whole_number("consumed"),
        }),
    })
}

/// Decode a key usage record
pub fn decode_key_usage<N: JsonNode>(raw: &N) -> Result<KeyUsage> {
    read_record("key usage", raw, |r| KeyUsage {
        start: r.string("start"),
        end: r.string("end"),
        total: r.whole_number("total"),
        daily_count: r.list("dailyCount", |d| DailyCount {
            date: d.string("date"),
            count: d.whole_number("count"),
        }),
    })
}

// ============================================================================
// Licensees
// ============================================================================

/// Decode a licensee record
///
/// `whitelist` keeps its order; `daily.limit` is a number or null.
pub fn decode_licensee<N: JsonNode>(raw: &N) -> Result<Licensee> {
    read_record("licensee", raw, |r| Licensee {
        id: r.string("id"),
        key: r.string("key"),
        name: r.string("name"),
        address: r.string("address"),
        postcode: r.string("postcode"),
        created_at: r.string("createdAt"),
        whitelist: r.string_list("whitelist"),
        daily: r.object("daily", |d| LicenseeDailyLimit {
            limit: d.number_or_null("limit"),
            count: d.whole_number("count"),
            updated_at: d.string("updatedAt"),
        }),
    })
}

// ============================================================================
// Deletion
// ============================================================================

/// Decode a deletion outcome
pub fn decode_deletion_status<N: JsonNode>(raw: &N) -> Result<DeletionStatus> {
    read_record("deletion status", raw, |r| DeletionStatus {
        deleted: r.whole_number("deleted"),
    })
}
