//! Normalized primitive types

use serde::{Serialize, Serializer};
use serde_json::Number;
use std::fmt;

/// Largest magnitude at which every whole f64 is an exact integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A numeric premise value that may be unpopulated
///
/// Longitude, latitude, eastings, northings and UMPRN come back as `""`
/// when the premise has no value. Never null, never a non-empty string.
/// A number keeps its written form, so `51` and `51.0` serialize back as
/// they were read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddressNumber {
    /// A finite number
    Number(Number),
    /// The empty string
    #[default]
    Empty,
}

impl AddressNumber {
    /// Wrap a float; `None` when it is not finite
    pub fn from_f64(n: f64) -> Option<Self> {
        Number::from_f64(n).map(Self::Number)
    }

    /// The number, if populated
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Empty => None,
        }
    }

    /// The number as a non-negative integer, if it is one
    ///
    /// Whole floats such as `50906690.0` count.
    pub fn as_u64(&self) -> Option<u64> {
        let Self::Number(n) = self else {
            return None;
        };
        n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < MAX_EXACT_INTEGER)
                .map(|f| f as u64)
        })
    }

    /// Whether the value is the empty string
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<u64> for AddressNumber {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for AddressNumber {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl fmt::Display for AddressNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Empty => Ok(()),
        }
    }
}

impl Serialize for AddressNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => n.serialize(serializer),
            Self::Empty => serializer.serialize_str(""),
        }
    }
}
