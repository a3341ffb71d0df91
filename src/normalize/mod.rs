//! Primitive field normalizer
//!
//! Leaf-level decoding shared by every record decoder.
//!
//! # Overview
//!
//! The API renders some numeric premise fields (geodata, UMPRN) as `""` when
//! the source data has no value. That quirk is handled here and nowhere else:
//! [`decode_address_number`] yields an [`AddressNumber`], everything else is a
//! strict string, boolean or whole number with no silent coercion.
//!
//! [`RecordReader`] builds on these functions to validate a whole record in
//! one pass, collecting every offending field instead of stopping at the
//! first.

mod fields;
mod reader;
mod types;

pub use fields::{
    decode_address_number, decode_bool, decode_number, decode_number_or_null, decode_optional_address_number,
    decode_optional_string, decode_optional_whole_number, decode_string, decode_string_list,
    decode_string_or_null, decode_whole_number,
};
pub use reader::RecordReader;
pub use types::AddressNumber;
