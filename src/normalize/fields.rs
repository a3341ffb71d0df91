//! Field-level normalization functions
//!
//! Each function takes the field path (for error reporting) and the raw
//! member lookup result, `None` meaning the member was absent.

use super::types::AddressNumber;
use crate::error::FieldError;
use crate::node::JsonNode;
use serde_json::Number;

const NUMBER: &str = "finite number";
const NUMBER_OR_EMPTY: &str = "finite number or empty string";
const NUMBER_OR_NULL: &str = "finite number or null";
const STRING: &str = "string";
const STRING_OR_NULL: &str = "string or null";
const WHOLE_NUMBER: &str = "non-negative integer";
const BOOLEAN: &str = "boolean";
const STRING_ARRAY: &str = "array of strings";

/// Decode a required number-or-empty-string field
pub fn decode_address_number<N: JsonNode>(
    field: &str,
    raw: Option<&N>,
) -> Result<AddressNumber, FieldError> {
    let value = raw.ok_or_else(|| FieldError::absent(field, NUMBER_OR_EMPTY))?;

    if let Some(n) = value.json_number() {
        return Ok(AddressNumber::Number(n));
    }
    if value.string() == Some("") {
        return Ok(AddressNumber::Empty);
    }

    Err(FieldError::new(field, NUMBER_OR_EMPTY, value.type_name()))
}

/// Decode a number-or-empty-string field that may be absent (but not null)
pub fn decode_optional_address_number<N: JsonNode>(
    field: &str,
    raw: Option<&N>,
) -> Result<Option<AddressNumber>, FieldError> {
    raw.map(|value| decode_address_number(field, Some(value)))
        .transpose()
}

/// Decode a required string field
///
/// Numbers and booleans are rejected rather than stringified.
pub fn decode_string<N: JsonNode>(field: &str, raw: Option<&N>) -> Result<String, FieldError> {
    let value = raw.ok_or_else(|| FieldError::absent(field, STRING))?;
    value
        .string()
        .map(ToString::to_string)
        .ok_or_else(|| FieldError::new(field, STRING, value.type_name()))
}

/// Decode a string field that may be absent (but not null)
pub fn decode_optional_string<N: JsonNode>(
    field: &str,
    raw: Option<&N>,
) -> Result<Option<String>, FieldError> {
    raw.map(|value| decode_string(field, Some(value))).transpose()
}

/// Decode a required field holding a string or null
pub fn decode_string_or_null<N: JsonNode>(
    field: &str,
    raw: Option<&N>,
) -> Result<Option<String>, FieldError> {
    let value = raw.ok_or_else(|| FieldError::absent(field, STRING_OR_NULL))?;
    if value.is_null() {
        return Ok(None);
    }
    value
        .string()
        .map(|s| Some(s.to_string()))
        .ok_or_else(|| FieldError::new(field, STRING_OR_NULL, value.type_name()))
}

/// Decode a required non-negative integer (identifiers, counts)
pub fn decode_whole_number<N: JsonNode>(field: &str, raw: Option<&N>) -> Result<u64, FieldError> {
    let value = raw.ok_or_else(|| FieldError::absent(field, WHOLE_NUMBER))?;
    value
        .unsigned()
        .ok_or_else(|| FieldError::new(field, WHOLE_NUMBER, value.type_name()))
}

/// Decode a non-negative integer that may be absent (but not null)
pub fn decode_optional_whole_number<N: JsonNode>(
    field: &str,
    raw: Option<&N>,
) -> Result<Option<u64>, FieldError> {
    raw.map(|value| decode_whole_number(field, Some(value)))
        .transpose()
}

/// Decode a required finite number of any sign or scale
///
/// Strings, including `""`, are rejected.
pub fn decode_number<N: JsonNode>(field: &str, raw: Option<&N>) -> Result<Number, FieldError> {
    let value = raw.ok_or_else(|| FieldError::absent(field, NUMBER))?;
    value
        .json_number()
        .ok_or_else(|| FieldError::new(field, NUMBER, value.type_name()))
}

/// Decode a required limit field: a finite number, or null for "unset"
///
/// Null and zero stay distinct. The empty string is rejected.
pub fn decode_number_or_null<N: JsonNode>(
    field: &str,
    raw: Option<&N>,
) -> Result<Option<Number>, FieldError> {
    let value = raw.ok_or_else(|| FieldError::absent(field, NUMBER_OR_NULL))?;
    if value.is_null() {
        return Ok(None);
    }
    value
        .json_number()
        .map(Some)
        .ok_or_else(|| FieldError::new(field, NUMBER_OR_NULL, value.type_name()))
}

/// Decode a required boolean field
pub fn decode_bool<N: JsonNode>(field: &str, raw: Option<&N>) -> Result<bool, FieldError> {
    let value = raw.ok_or_else(|| FieldError::absent(field, BOOLEAN))?;
    value
        .boolean()
        .ok_or_else(|| FieldError::new(field, BOOLEAN, value.type_name()))
}

/// Decode a required array of strings, preserving element order
///
/// Every non-string element is reported as `field[i]`.
pub fn decode_string_list<N: JsonNode>(
    field: &str,
    raw: Option<&N>,
) -> Result<Vec<String>, Vec<FieldError>> {
    let value = raw.ok_or_else(|| vec![FieldError::absent(field, STRING_ARRAY)])?;
    let elements = value
        .elements()
        .ok_or_else(|| vec![FieldError::new(field, STRING_ARRAY, value.type_name())])?;

    let mut strings = Vec::with_capacity(elements.len());
    let mut errors = Vec::new();
    for (i, element) in elements.iter().enumerate() {
        match element.string() {
            Some(s) => strings.push(s.to_string()),
            None => errors.push(FieldError::new(
                format!("{field}[{i}]"),
                STRING,
                element.type_name(),
            )),
        }
    }

    if errors.is_empty() {
        Ok(strings)
    } else {
        Err(errors)
    }
}
