use serde::Serializer;

use crate::driver::Value;
use crate::error::ScanError;
use crate::types::Scalar;

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn scan_scalar(src: &Value) -> Result<Self, ScanError> {
        src.as_f64()
    }

    fn scalar_value(&self) -> Value {
        Value::Float(*self)
    }

    fn serialize_scalar<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // JSON has no literal for NaN or the infinities.
        if self.is_finite() {
            serializer.serialize_f64(*self)
        } else {
            serializer.serialize_none()
        }
    }
}

super::nullable_scalar! {
    /// A nullable 64-bit float.
    Float(f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scanner, Valuer};

    #[test]
    fn test_unmarshal_json() {
        let mut n = Float::default();
        n.unmarshal_json(b"123.123").unwrap();
        assert_eq!(n, Float::new(123.123));

        n.unmarshal_json(b"1e3").unwrap();
        assert_eq!(n, Float::new(1000.0));

        n.unmarshal_json(b"42").unwrap();
        assert_eq!(n, Float::new(42.0));

        n.unmarshal_json(b"null").unwrap();
        assert_eq!(n, Float::null());

        assert!(n.unmarshal_json(br#"{"key":"value"}"#).is_err());
        assert!(n.unmarshal_json(b"").is_err());
    }

    #[test]
    fn test_marshal_json() {
        assert_eq!(Float::new(123.123).marshal_json(), b"123.123");
        assert_eq!(Float::null().marshal_json(), b"null");
        assert_eq!(Float::new(f64::NAN).marshal_json(), b"null");
        assert_eq!(Float::new(f64::INFINITY).marshal_json(), b"null");
    }

    #[test]
    fn test_round_trip() {
        for v in [0.0, -1.5, 123.123, 1e-7, 6.02e23] {
            let n = Float::new(v);
            let mut decoded = Float::default();
            decoded.unmarshal_json(&n.marshal_json()).unwrap();
            assert_eq!(decoded, n);
        }
    }

    #[test]
    fn test_scan() {
        let mut n = Float::null();
        n.scan(&Value::Float(123.0)).unwrap();
        assert_eq!(n, Float::new(123.0));

        n.scan(&Value::Int(2)).unwrap();
        assert_eq!(n, Float::new(2.0));

        n.scan(&Value::Null).unwrap();
        assert_eq!(n, Float::null());

        assert!(n.scan(&Value::Bool(true)).is_err());
    }

    #[test]
    fn test_value() {
        assert_eq!(Float::new(123.123).value(), Value::Float(123.123));
        assert_eq!(Float::null().value(), Value::Null);
    }

    #[test]
    fn test_make() {
        let f = 123.123;
        let n = Float::make(Some(&f));
        assert!(n.valid);
        assert_eq!(n.value, 123.123);

        let n = Float::make(None);
        assert!(!n.valid);
        assert_eq!(n.value, 0.0);
    }
}
