//! Premise types

use crate::normalize::AddressNumber;
use serde::{Serialize, Serializer};
use std::ops::Deref;

/// A single premise on the Postcode Address File
///
/// String fields with no value are `""`, never absent. The four geodata
/// fields and `umprn` are [`AddressNumber`]s and may be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Address {
    pub postcode: String,
    pub postcode_inward: String,
    pub postcode_outward: String,
    pub post_town: String,
    pub dependant_locality: String,
    pub double_dependant_locality: String,
    pub thoroughfare: String,
    pub dependant_thoroughfare: String,
    pub building_number: String,
    pub building_name: String,
    pub sub_building_name: String,
    pub po_box: String,
    pub department_name: String,
    pub organisation_name: String,
    /// Unique Delivery Point Reference Number
    pub udprn: u64,
    /// Only present when multiple residence data was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umprn: Option<AddressNumber>,
    pub postcode_type: String,
    pub su_organisation_indicator: String,
    pub delivery_point_suffix: String,
    pub line_1: String,
    pub line_2: String,
    pub line_3: String,
    pub premise: String,
    pub longitude: AddressNumber,
    pub latitude: AddressNumber,
    pub eastings: AddressNumber,
    pub northings: AddressNumber,
    pub country: String,
    pub traditional_county: String,
    pub administrative_county: String,
    pub postal_county: String,
    pub county: String,
    pub district: String,
    pub ward: String,
}

/// A multiple-residence premise whose UMPRN is guaranteed populated
///
/// Only [`decode_umprn_address`](super::decode_umprn_address) builds one.
/// Derefs to the underlying [`Address`].
#[derive(Debug, Clone, PartialEq)]
pub struct UmprnAddress {
    address: Address,
    umprn: u64,
}

impl UmprnAddress {
    pub(super) fn new(address: Address, umprn: u64) -> Self {
        Self { address, umprn }
    }

    /// Unique Multiple Residence Reference Number
    pub fn umprn(&self) -> u64 {
        self.umprn
    }

    /// The full premise record
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn into_address(self) -> Address {
        self.address
    }
}

impl Deref for UmprnAddress {
    type Target = Address;

    fn deref(&self) -> &Address {
        &self.address
    }
}

impl Serialize for UmprnAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.address.serialize(serializer)
    }
}
