//! Premise decoder
//!
//! Decodes one PAF premise record into an [`Address`], or into an
//! [`UmprnAddress`] when the endpoint resolves a specific multiple-residence
//! sub-premise.
//!
//! Unknown members on the record are ignored so new upstream fields never
//! break decoding.

mod decoder;
mod types;

pub use decoder::{decode_address, decode_umprn_address};
pub use types::{Address, UmprnAddress};
