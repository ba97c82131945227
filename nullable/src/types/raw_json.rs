use bytes::Bytes;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::NULL_LITERAL;
use crate::driver::{Scanner, Valuer, Value};
use crate::error::{DecodeError, ScanError};

/// A nullable, pre-encoded JSON value.
///
/// The payload is stored verbatim and written back out verbatim. An empty
/// payload counts as absent regardless of `valid`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawJson {
    pub value: Bytes,
    pub valid: bool,
}

impl RawJson {
    /// Wraps bytes that are assumed to already be well-formed JSON.
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self {
            value: value.into(),
            valid: true,
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    pub fn make(value: Option<&[u8]>) -> Self {
        match value {
            Some(value) => Self::new(Bytes::copy_from_slice(value)),
            None => Self::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        !self.valid || self.value.is_empty()
    }

    pub fn as_option(&self) -> Option<&[u8]> {
        (!self.is_null()).then_some(self.value.as_ref())
    }

    /// Validates and stores a single JSON value of any kind.
    pub fn unmarshal_json(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        if bytes == NULL_LITERAL {
            *self = Self::null();
            return Ok(());
        }
        let raw: &RawValue = serde_json::from_slice(bytes)?;
        *self = Self::new(Bytes::copy_from_slice(raw.get().as_bytes()));
        Ok(())
    }

    pub fn marshal_json(&self) -> Vec<u8> {
        if self.is_null() {
            NULL_LITERAL.to_vec()
        } else {
            self.value.to_vec()
        }
    }
}

impl From<Option<Box<RawValue>>> for RawJson {
    fn from(value: Option<Box<RawValue>>) -> Self {
        match value {
            Some(raw) => Self::new(std::string::String::from(Box::<str>::from(raw))),
            None => Self::null(),
        }
    }
}

impl Serialize for RawJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            return serializer.serialize_none();
        }
        let raw: &RawValue = serde_json::from_slice(&self.value).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Box<RawValue>>::deserialize(deserializer)?;
        Ok(raw.into())
    }
}

impl Scanner for RawJson {
    fn scan(&mut self, src: &Value) -> Result<(), ScanError> {
        if src.is_null() {
            *self = Self::null();
            return Ok(());
        }
        let text = src.as_string()?;
        *self = Self::new(text.into_owned());
        Ok(())
    }
}

impl Valuer for RawJson {
    fn value(&self) -> Value {
        if self.is_null() {
            Value::Null
        } else {
            Value::String(std::string::String::from_utf8_lossy(&self.value).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarshal_json() {
        let mut n = RawJson::default();
        n.unmarshal_json(b"[1,2,3]").unwrap();
        assert_eq!(n, RawJson::new(&b"[1,2,3]"[..]));

        n.unmarshal_json(br#" {"a": "b"} "#).unwrap();
        assert_eq!(n.value, &br#"{"a": "b"}"#[..]);

        n.unmarshal_json(b"null").unwrap();
        assert!(n.is_null());

        assert!(n.unmarshal_json(b"").is_err());
        assert!(n.unmarshal_json(b"[1,2").is_err());
        assert!(n.unmarshal_json(b"nope").is_err());
    }

    #[test]
    fn test_marshal_json() {
        assert_eq!(RawJson::new(&b"[1,2,3]"[..]).marshal_json(), b"[1,2,3]");
        assert_eq!(RawJson::null().marshal_json(), b"null");

        let empty = RawJson {
            value: Bytes::new(),
            valid: true,
        };
        assert_eq!(empty.marshal_json(), b"null");
        assert_eq!(empty.value(), Value::Null);
    }

    #[test]
    fn test_scan() {
        let mut n = RawJson::null();
        n.scan(&Value::from(r#"{"k":1}"#)).unwrap();
        assert_eq!(n, RawJson::new(r#"{"k":1}"#));

        n.scan(&Value::from(b"[true]".to_vec())).unwrap();
        assert_eq!(n.marshal_json(), b"[true]");

        n.scan(&Value::Null).unwrap();
        assert_eq!(n, RawJson::null());
    }

    #[test]
    fn test_value() {
        assert_eq!(RawJson::new("[1]").value(), Value::from("[1]"));
        assert_eq!(RawJson::null().value(), Value::Null);
    }

    #[test]
    fn test_serde() {
        let n: RawJson = serde_json::from_str(r#"{"x": [1, 2]}"#).unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), r#"{"x": [1, 2]}"#);

        let n: RawJson = serde_json::from_str("null").unwrap();
        assert!(n.is_null());
        assert_eq!(serde_json::to_string(&n).unwrap(), "null");
    }
}
