use serde::Serializer;

use crate::driver::Value;
use crate::error::ScanError;
use crate::types::Scalar;

impl Scalar for i64 {
    fn zero() -> Self {
        0
    }

    fn scan_scalar(src: &Value) -> Result<Self, ScanError> {
        src.as_i64()
    }

    fn scalar_value(&self) -> Value {
        Value::Int(*self)
    }

    fn serialize_scalar<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*self)
    }
}

super::nullable_scalar! {
    /// A nullable 64-bit signed integer.
    Int(i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scanner, Valuer};

    #[test]
    fn test_unmarshal_json() {
        let mut n = Int::default();
        n.unmarshal_json(b"123").unwrap();
        assert_eq!(n, Int::new(123));

        n.unmarshal_json(b"null").unwrap();
        assert!(!n.valid);
        assert_eq!(n.value, 0);

        assert!(n.unmarshal_json(br#"{"key":"value"}"#).is_err());
        assert!(n.unmarshal_json(b"").is_err());
        assert!(n.unmarshal_json(b"12.5").is_err());
        assert!(n.unmarshal_json(b"\"123\"").is_err());
    }

    #[test]
    fn test_failed_unmarshal_keeps_value() {
        let mut n = Int::new(7);
        assert!(n.unmarshal_json(b"true").is_err());
        assert_eq!(n, Int::new(7));
    }

    #[test]
    fn test_marshal_json() {
        assert_eq!(Int::new(123).marshal_json(), b"123");
        assert_eq!(Int::new(-9).marshal_json(), b"-9");
        assert_eq!(Int::new(0).marshal_json(), b"0");
        assert_eq!(Int::null().marshal_json(), b"null");
        let stale = Int {
            value: 55,
            valid: false,
        };
        assert_eq!(stale.marshal_json(), b"null");
    }

    #[test]
    fn test_scan() {
        let mut n = Int::null();
        n.scan(&Value::Int(123)).unwrap();
        assert_eq!(n, Int::new(123));

        n.scan(&Value::from("456")).unwrap();
        assert_eq!(n, Int::new(456));

        n.scan(&Value::Null).unwrap();
        assert_eq!(n, Int::null());

        assert!(n.scan(&Value::Bool(true)).is_err());
        assert!(n.scan(&Value::from("abc")).is_err());
    }

    #[test]
    fn test_value() {
        assert_eq!(Int::new(123).value(), Value::Int(123));
        assert_eq!(Int::null().value(), Value::Null);
    }

    #[test]
    fn test_make() {
        let i = 123i64;
        let n = Int::make(Some(&i));
        assert!(n.valid);
        assert_eq!(n.value, 123);

        let n = Int::make(None);
        assert!(!n.valid);
        assert_eq!(n.value, 0);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Option::<i64>::from(Int::new(4)), Some(4));
        assert_eq!(Option::<i64>::from(Int::null()), None);
        assert_eq!(Int::from(Some(4)), Int::new(4));
        assert_eq!(Int::new(4).as_option(), Some(&4));
    }
}
