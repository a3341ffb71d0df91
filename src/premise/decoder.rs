//! Premise decoding

use super::types::{Address, UmprnAddress};
use crate::error::{DecodeError, Result};
use crate::node::JsonNode;
use crate::normalize::{AddressNumber, RecordReader};

/// Decode a premise record
///
/// Fails with [`DecodeError::InvalidPremise`] listing every absent or
/// mistyped field.
pub fn decode_address<N: JsonNode>(raw: &N) -> Result<Address> {
    let mut r = RecordReader::new(raw)
        .map_err(|found| DecodeError::field("address", "object", found))?;

    let address = Address {
        postcode: r.string("postcode"),
        postcode_inward: r.string("postcode_inward"),
        postcode_outward: r.string("postcode_outward"),
        post_town: r.string("post_town"),
        dependant_locality: r.string("dependant_locality"),
        double_dependant_locality: r.string("double_dependant_locality"),
        thoroughfare: r.string("thoroughfare"),
        dependant_thoroughfare: r.string("dependant_thoroughfare"),
        building_number: r.string("building_number"),
        building_name: r.string("building_name"),
        sub_building_name: r.string("sub_building_name"),
        po_box: r.string("po_box"),
        department_name: r.string("department_name"),
        organisation_name: r.string("organisation_name"),
        udprn: r.whole_number("udprn"),
        umprn: r.optional_address_number("umprn"),
        postcode_type: r.string("postcode_type"),
        su_organisation_indicator: r.string("su_organisation_indicator"),
        delivery_point_suffix: r.string("delivery_point_suffix"),
        line_1: r.string("line_1"),
        line_2: r.string("line_2"),
        line_3: r.string("line_3"),
        premise: r.string("premise"),
        longitude: r.address_number("longitude"),
        latitude: r.address_number("latitude"),
        eastings: r.address_number("eastings"),
        northings: r.address_number("northings"),
        country: r.string("country"),
        traditional_county: r.string("traditional_county"),
        administrative_county: r.string("administrative_county"),
        postal_county: r.string("postal_county"),
        county: r.string("county"),
        district: r.string("district"),
        ward: r.string("ward"),
    };

    r.finish(address)
        .map_err(|missing_fields| DecodeError::InvalidPremise { missing_fields })
}

/// Decode a multiple-residence premise
///
/// Fails with [`DecodeError::MissingUmprn`] when `umprn` is absent or `""`.
pub fn decode_umprn_address<N: JsonNode>(raw: &N) -> Result<UmprnAddress> {
    let address = decode_address(raw)?;

    let umprn = match &address.umprn {
        Some(number @ AddressNumber::Number(_)) => number
            .as_u64()
            .ok_or_else(|| DecodeError::field("umprn", "non-negative integer", "number"))?,
        Some(AddressNumber::Empty) | None => {
            return Err(DecodeError::MissingUmprn {
                udprn: address.udprn,
            })
        }
    };

    Ok(UmprnAddress::new(address, umprn))
}
