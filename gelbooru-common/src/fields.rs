//! Typed accessors over a JSON object that report failures as [`DecodeError`]s.
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Borrowed view of one JSON object from an API response.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Fails with a type mismatch on the (empty) root path if `value` is not an object.
    pub fn new(value: &'a Value) -> Result<Self, DecodeError> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or_else(|| mismatch("", "object"))
    }

    fn required(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.map.get(key).ok_or_else(|| DecodeError::MissingField {
            field: key.to_string(),
        })
    }

    /// Absent keys and JSON `null` are both treated as "no value".
    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub fn string(&self, key: &str) -> Result<&'a str, DecodeError> {
        self.required(key)?
            .as_str()
            .ok_or_else(|| mismatch(key, "string"))
    }

    pub fn optional_string(&self, key: &str) -> Result<Option<&'a str>, DecodeError> {
        self.optional(key)
            .map(|v| v.as_str().ok_or_else(|| mismatch(key, "string")))
            .transpose()
    }

    pub fn signed<T: TryFrom<i64>>(&self, key: &str) -> Result<T, DecodeError> {
        self.required(key)?
            .as_i64()
            .and_then(|n| T::try_from(n).ok())
            .ok_or_else(|| mismatch(key, "integer"))
    }

    pub fn unsigned<T: TryFrom<u64>>(&self, key: &str) -> Result<T, DecodeError> {
        as_unsigned(self.required(key)?).ok_or_else(|| mismatch(key, "unsigned integer"))
    }

    pub fn optional_unsigned<T: TryFrom<u64>>(
        &self,
        key: &str,
    ) -> Result<Option<T>, DecodeError> {
        self.optional(key)
            .map(|v| as_unsigned(v).ok_or_else(|| mismatch(key, "unsigned integer")))
            .transpose()
    }

    pub fn object(&self, key: &str) -> Result<Fields<'a>, DecodeError> {
        Fields::new(self.required(key)?).map_err(|e| e.within(key))
    }

    pub fn optional_array(&self, key: &str) -> Result<Option<&'a [Value]>, DecodeError> {
        self.optional(key)
            .map(|v| {
                v.as_array()
                    .map(Vec::as_slice)
                    .ok_or_else(|| mismatch(key, "array"))
            })
            .transpose()
    }
}

fn as_unsigned<T: TryFrom<u64>>(value: &Value) -> Option<T> {
    value.as_u64().and_then(|n| T::try_from(n).ok())
}

fn mismatch(key: &str, expected: &'static str) -> DecodeError {
    DecodeError::TypeMismatch {
        field: key.to_string(),
        expected,
    }
}
