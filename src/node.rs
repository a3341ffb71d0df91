//! Tree-shaped value model
//!
//! Decoders never depend on a particular serialization library. They read
//! payloads through [`JsonNode`], which any map/array/string/number/bool/null
//! tree can implement. Implementations ship for `serde_json::Value` and
//! `serde_yaml::Value`.

/// Read-only view over one node of a parsed payload
pub trait JsonNode: Sized {
    /// Member of an object node; `None` for absent members and non-objects
    fn field(&self, name: &str) -> Option<&Self>;

    /// Whether the node is an object
    fn is_object(&self) -> bool;

    /// Elements of an array node
    fn elements(&self) -> Option<&[Self]>;

    /// Contents of a string node
    fn string(&self) -> Option<&str>;

    /// Numeric value of a number node
    fn number(&self) -> Option<f64>;

    /// Value of a number node, keeping whether it was written as an integer
    ///
    /// `None` for non-numbers and for non-finite numbers.
    fn json_number(&self) -> Option<serde_json::Number> {
        if let Some(n) = self.unsigned() {
            return Some(n.into());
        }
        if let Some(n) = self.integer() {
            return Some(n.into());
        }
        self.number().and_then(serde_json::Number::from_f64)
    }

    /// Value of a number node holding a non-negative integer
    fn unsigned(&self) -> Option<u64>;

    /// Value of a number node holding an integer
    fn integer(&self) -> Option<i64>;

    /// Value of a boolean node
    fn boolean(&self) -> Option<bool>;

    /// Whether the node is null
    fn is_null(&self) -> bool;

    /// Short name of the node's shape, used in error messages
    fn type_name(&self) -> &'static str;

    /// Member that is present and not null
    fn present(&self, name: &str) -> Option<&Self> {
        self.field(name).filter(|v| !v.is_null())
    }
}

impl JsonNode for serde_json::Value {
    fn field(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn is_object(&self) -> bool {
        serde_json::Value::is_object(self)
    }

    fn elements(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn string(&self) -> Option<&str> {
        self.as_str()
    }

    fn number(&self) -> Option<f64> {
        self.as_f64()
    }

    fn json_number(&self) -> Option<serde_json::Number> {
        self.as_number().cloned()
    }

    fn unsigned(&self) -> Option<u64> {
        self.as_u64()
    }

    fn integer(&self) -> Option<i64> {
        self.as_i64()
    }

    fn boolean(&self) -> Option<bool> {
        self.as_bool()
    }

    fn is_null(&self) -> bool {
        serde_json::Value::is_null(self)
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(s) if s.is_empty() => "empty string",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

impl JsonNode for serde_yaml::Value {
    fn field(&self, name: &str) -> Option<&Self> {
        self.as_mapping()?.get(name)
    }

    fn is_object(&self) -> bool {
        self.is_mapping()
    }

    fn elements(&self) -> Option<&[Self]> {
        self.as_sequence().map(Vec::as_slice)
    }

    fn string(&self) -> Option<&str> {
        self.as_str()
    }

    fn number(&self) -> Option<f64> {
        self.as_f64()
    }

    fn unsigned(&self) -> Option<u64> {
        self.as_u64()
    }

    fn integer(&self) -> Option<i64> {
        self.as_i64()
    }

    fn boolean(&self) -> Option<bool> {
        self.as_bool()
    }

    fn is_null(&self) -> bool {
        serde_yaml::Value::is_null(self)
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(s) if s.is_empty() => "empty string",
            Self::String(_) => "string",
            Self::Sequence(_) => "array",
            Self::Mapping(_) => "object",
            Self::Tagged(_) => "tagged value",
        }
    }
}
