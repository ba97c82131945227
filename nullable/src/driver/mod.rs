mod value;

use bytes::Bytes;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

use crate::error::ScanError;

pub use self::value::{Value, ValueType};

/// Populates `self` from a value handed back by a driver.
pub trait Scanner {
    fn scan(&mut self, src: &Value) -> Result<(), ScanError>;
}

/// Produces a value a driver can bind as a parameter.
pub trait Valuer {
    fn value(&self) -> Value;
}

/// A type that [`Null`](crate::Null) can carry across the driver boundary.
///
/// `scan` only ever sees non-null values; `Null<T>` handles the sentinel
/// itself. [`DriverType::to_value`] is the native representation, used when
/// the type exposes no [`Valuer`] of its own through
/// [`DriverType::as_valuer`].
pub trait DriverType: Scanner + Default {
    fn to_value(&self) -> Value;

    fn as_valuer(&self) -> Option<&dyn Valuer> {
        None
    }
}

macro_rules! native_driver_types {
    ($($ty:ty => |$src:ident| $scan:expr, |$this:ident| $value:expr;)+) => {$(
        impl Scanner for $ty {
            fn scan(&mut self, $src: &Value) -> Result<(), ScanError> {
                *self = $scan;
                Ok(())
            }
        }

        impl DriverType for $ty {
            fn to_value(&self) -> Value {
                let $this = self;
                $value
            }
        }
    )+};
}

native_driver_types! {
    i64 => |src| src.as_i64()?, |this| Value::Int(*this);
    i32 => |src| {
        let i = src.as_i64()?;
        i32::try_from(i).map_err(|e| ScanError::conversion(src, "int32", e))?
    }, |this| Value::Int(*this as i64);
    f64 => |src| src.as_f64()?, |this| Value::Float(*this);
    bool => |src| src.as_bool()?, |this| Value::Bool(*this);
    String => |src| src.as_string()?.into_owned(), |this| Value::String(this.clone());
    Vec<u8> => |src| src.as_bytes()?.to_vec(), |this| Value::Bytes(Bytes::copy_from_slice(this));
    Bytes => |src| Bytes::copy_from_slice(src.as_bytes()?), |this| Value::Bytes(this.clone());
}

#[cfg(feature = "chrono")]
native_driver_types! {
    DateTime<Utc> => |src| src.as_timestamp()?.with_timezone(&Utc), |this| Value::Timestamp(this.fixed_offset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_scan() {
        let mut i = 0i64;
        i.scan(&Value::Int(123)).unwrap();
        assert_eq!(i, 123);

        let mut small = 0i32;
        small.scan(&Value::Int(7)).unwrap();
        assert_eq!(small, 7);
        assert!(small.scan(&Value::Int(i64::MAX)).is_err());

        let mut s = String::new();
        s.scan(&Value::Int(5)).unwrap();
        assert_eq!(s, "5");

        let mut b = Vec::<u8>::new();
        b.scan(&Value::from("abc")).unwrap();
        assert_eq!(b, b"abc");

        let mut flag = false;
        assert!(flag.scan(&Value::Null).is_err());
    }

    #[test]
    fn test_native_value() {
        assert_eq!(123i64.to_value(), Value::Int(123));
        assert_eq!(7i32.to_value(), Value::Int(7));
        assert_eq!("hi".to_string().to_value(), Value::from("hi"));
        assert_eq!(vec![1u8, 2].to_value(), Value::Bytes(Bytes::from_static(&[1, 2])));
        assert!(1.5f64.as_valuer().is_none());
    }
}
