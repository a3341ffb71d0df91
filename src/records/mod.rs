//! Non-address record decoders
//!
//! Autocomplete suggestions, API key status/detail/usage, licensees and
//! deletion outcomes. Each decoder validates every field in one pass and
//! fails with [`DecodeError::InvalidRecord`](crate::DecodeError::InvalidRecord)
//! naming all offending fields.
//!
//! Numeric fields here are true numbers. Limits use `null` for "no limit
//! configured", which stays distinct from zero; the empty-string quirk of
//! premise geodata does not apply.

mod decoders;
mod types;

pub use decoders::{
    decode_deletion_status, decode_key, decode_key_status, decode_key_usage, decode_licensee,
    decode_suggestion,
};
pub use types::{
    AddressSuggestion, AutomatedTopupConfiguration, DailyCount, DailyLimit, DeletionStatus,
    IndividualLimit, Key, KeyStatus, KeyUsage, Licensee, LicenseeDailyLimit, LicenseeList,
    NewLicensee, NewLicenseeDailyLimit, NotificationsConfiguration, Purchase, SuggestionUrls,
};

pub(crate) use decoders::read_record;

#[cfg(test)]
mod tests;
