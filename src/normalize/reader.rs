//! Collect-all record validation

use super::fields;
use super::types::AddressNumber;
use crate::error::FieldError;
use crate::node::JsonNode;
use serde_json::Number;

/// Reads the fields of one object node, recording every failure
///
/// Accessors never fail: a bad field is recorded and a placeholder returned,
/// so a decoder can read all of its fields and then call [`finish`] once.
/// Placeholders never escape, since `finish` discards the value whenever a
/// failure was recorded.
///
/// [`finish`]: RecordReader::finish
#[derive(Debug)]
pub struct RecordReader<'a, N> {
    node: &'a N,
    errors: Vec<FieldError>,
}

impl<'a, N: JsonNode> RecordReader<'a, N> {
    /// Start reading an object node
    ///
    /// Returns the node's shape name if it is not an object.
    pub fn new(node: &'a N) -> Result<Self, &'static str> {
        if node.is_object() {
            Ok(Self {
                node,
                errors: Vec::new(),
            })
        } else {
            Err(node.type_name())
        }
    }

    fn raw(&self, field: &str) -> Option<&'a N> {
        self.node.field(field)
    }

    fn take<T: Default>(&mut self, result: Result<T, FieldError>) -> T {
        result.unwrap_or_else(|e| {
            self.errors.push(e);
            T::default()
        })
    }

    pub fn string(&mut self, field: &str) -> String {
        let result = fields::decode_string(field, self.raw(field));
        self.take(result)
    }

    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        let result = fields::decode_optional_string(field, self.raw(field));
        self.take(result)
    }

    pub fn string_or_null(&mut self, field: &str) -> Option<String> {
        let result = fields::decode_string_or_null(field, self.raw(field));
        self.take(result)
    }

    pub fn address_number(&mut self, field: &str) -> AddressNumber {
        let result = fields::decode_address_number(field, self.raw(field));
        self.take(result)
    }

    pub fn optional_address_number(&mut self, field: &str) -> Option<AddressNumber> {
        let result = fields::decode_optional_address_number(field, self.raw(field));
        self.take(result)
    }

    pub fn whole_number(&mut self, field: &str) -> u64 {
        let result = fields::decode_whole_number(field, self.raw(field));
        self.take(result)
    }

    pub fn optional_whole_number(&mut self, field: &str) -> Option<u64> {
        let result = fields::decode_optional_whole_number(field, self.raw(field));
        self.take(result)
    }

    pub fn number(&mut self, field: &str) -> Number {
        fields::decode_number(field, self.raw(field)).unwrap_or_else(|e| {
            self.errors.push(e);
            Number::from(0_u64)
        })
    }

    pub fn number_or_null(&mut self, field: &str) -> Option<Number> {
        let result = fields::decode_number_or_null(field, self.raw(field));
        self.take(result)
    }

    pub fn boolean(&mut self, field: &str) -> bool {
        let result = fields::decode_bool(field, self.raw(field));
        self.take(result)
    }

    pub fn string_list(&mut self, field: &str) -> Vec<String> {
        match fields::decode_string_list(field, self.raw(field)) {
            Ok(strings) => strings,
            Err(errors) => {
                self.errors.extend(errors);
                Vec::new()
            }
        }
    }

    /// Read a nested object, reporting its failures as `field.child`
    pub fn object<T: Default>(
        &mut self,
        field: &str,
        read: impl FnOnce(&mut RecordReader<'a, N>) -> T,
    ) -> T {
        match self.raw(field) {
            Some(value) => match RecordReader::new(value) {
                Ok(mut child) => {
                    let out = read(&mut child);
                    self.errors
                        .extend(child.errors.into_iter().map(|e| e.within(field)));
                    out
                }
                Err(found) => {
                    self.errors.push(FieldError::new(field, "object", found));
                    T::default()
                }
            },
            None => {
                self.errors.push(FieldError::absent(field, "object"));
                T::default()
            }
        }
    }

    /// Read an array of objects in order, reporting failures as `field[i].child`
    pub fn list<T>(
        &mut self,
        field: &str,
        mut read: impl FnMut(&mut RecordReader<'a, N>) -> T,
    ) -> Vec<T> {
        let Some(value) = self.raw(field) else {
            self.errors.push(FieldError::absent(field, "array"));
            return Vec::new();
        };
        let Some(elements) = value.elements() else {
            self.errors
                .push(FieldError::new(field, "array", value.type_name()));
            return Vec::new();
        };

        let mut out = Vec::with_capacity(elements.len());
        for (i, element) in elements.iter().enumerate() {
            let path = format!("{field}[{i}]");
            match RecordReader::new(element) {
                Ok(mut child) => {
                    out.push(read(&mut child));
                    self.errors
                        .extend(child.errors.into_iter().map(|e| e.within(&path)));
                }
                Err(found) => self.errors.push(FieldError::new(path, "object", found)),
            }
        }
        out
    }

    /// Return `value` if every field was valid, else every recorded failure
    pub fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}
