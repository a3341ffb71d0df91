//! Record types
//!
//! Field names serialize back to the API's wire names.

use serde::Serialize;
use serde_json::Number;

// ============================================================================
// Autocomplete
// ============================================================================

/// Relative paths resolving a suggestion to its full premise
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SuggestionUrls {
    /// e.g. `/v1/udprn/7944730`
    pub udprn: String,
    /// e.g. `/v1/umprn/11168744`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umprn: Option<String>,
}

/// One autocomplete hit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AddressSuggestion {
    /// Partial address matching the query
    pub suggestion: String,
    pub urls: SuggestionUrls,
    pub udprn: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umprn: Option<u64>,
}

// ============================================================================
// Keys
// ============================================================================

/// Public availability of an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeyStatus {
    pub available: bool,
}

/// Daily usage limit and today's consumption
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DailyLimit {
    /// `None` when no limit is configured
    pub limit: Option<Number>,
    pub consumed: u64,
}

/// Per-IP daily limit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IndividualLimit {
    /// `None` when no limit is configured
    pub limit: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NotificationsConfiguration {
    pub emails: Vec<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AutomatedTopupConfiguration {
    pub enabled: bool,
}

/// A purchased batch of lookups
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Purchase {
    /// `None` when no expiry is set
    pub expires: Option<String>,
    pub purchased: u64,
    pub consumed: u64,
}

/// Private key details, retrieved with a user token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    pub lookups_remaining: Number,
    pub daily_limit: DailyLimit,
    pub individual_limit: IndividualLimit,
    pub allowed_urls: Vec<String>,
    pub notifications: NotificationsConfiguration,
    pub automated_topups: AutomatedTopupConfiguration,
    pub current_purchases: Vec<Purchase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

/// Historical usage of a key over an interval
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct KeyUsage {
    pub start: String,
    pub end: String,
    pub total: u64,
    #[serde(rename = "dailyCount")]
    pub daily_count: Vec<DailyCount>,
}

// ============================================================================
// Licensees
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LicenseeDailyLimit {
    /// `None` when no limit is configured
    pub limit: Option<Number>,
    pub count: u64,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Licensee {
    pub id: String,
    pub key: String,
    pub name: String,
    pub address: String,
    pub postcode: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Allowed URLs in configured precedence order
    pub whitelist: Vec<String>,
    pub daily: LicenseeDailyLimit,
}

/// One page of the licensee list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LicenseeList {
    pub licensees: Vec<Licensee>,
    /// More licensees follow the last one in this page
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Body of a licensee creation request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewLicensee {
    pub name: String,
    pub address: String,
    pub postcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<NewLicenseeDailyLimit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NewLicenseeDailyLimit {
    pub limit: u64,
}

// ============================================================================
// Deletion
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeletionStatus {
    /// Number of deleted records
    pub deleted: u64,
}
