mod bool;
mod float;
mod int;
mod raw_json;
mod string;
#[cfg(feature = "chrono")]
mod time;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::Value;
use crate::error::{DecodeError, ScanError};

pub use self::bool::Bool;
pub use self::float::Float;
pub use self::int::Int;
pub use self::raw_json::RawJson;
pub use self::string::String;
#[cfg(feature = "chrono")]
pub use self::time::Time;

/// Payload behavior behind each thin nullable struct.
///
/// The text codec defaults to the payload's own serde implementation.
pub(crate) trait Scalar: Clone + Serialize + DeserializeOwned {
    /// The payload carried while the value is absent.
    fn zero() -> Self;

    fn scan_scalar(src: &Value) -> Result<Self, ScanError>;

    fn scalar_value(&self) -> Value;

    fn serialize_scalar<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::deserialize(deserializer)
    }
}

/// Routes a payload through [`Scalar::deserialize_scalar`] so that
/// `Option<Payload<P>>` picks up JSON `null` as absence.
pub(crate) struct Payload<P>(pub(crate) P);

impl<'de, P: Scalar> Deserialize<'de> for Payload<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        P::deserialize_scalar(deserializer).map(Payload)
    }
}

pub(crate) fn decode_literal<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub(crate) fn encode_literal<T: Serialize>(value: &T) -> Vec<u8> {
    // Scalar payloads have no failing serialization; non-finite floats come out as `null`.
    serde_json::to_vec(value).unwrap_or_else(|_| crate::NULL_LITERAL.to_vec())
}

/// Generates a thin nullable struct around a [`Scalar`] payload.
macro_rules! nullable_scalar {
    ($(#[$meta:meta])* $name:ident($payload:ty)) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            pub value: $payload,
            pub valid: bool,
        }

        impl $name {
            pub fn new(value: $payload) -> Self {
                Self { value, valid: true }
            }

            pub fn null() -> Self {
                Self {
                    value: <$payload as $crate::types::Scalar>::zero(),
                    valid: false,
                }
            }

            /// Copies the referenced value in, or builds an absent value when
            /// there is none.
            pub fn make(value: Option<&$payload>) -> Self {
                value.cloned().into()
            }

            pub fn is_null(&self) -> bool {
                !self.valid
            }

            pub fn as_option(&self) -> Option<&$payload> {
                self.valid.then_some(&self.value)
            }

            /// Decodes a single JSON literal into `self`.
            ///
            /// Only the exact, lowercase literal `null` marks absence. Empty
            /// input is an error. On error `self` is left untouched.
            pub fn unmarshal_json(&mut self, bytes: &[u8]) -> Result<(), $crate::error::DecodeError> {
                if bytes == $crate::NULL_LITERAL {
                    *self = Self::null();
                    return Ok(());
                }
                *self = $crate::types::decode_literal(bytes)?;
                Ok(())
            }

            /// Encodes `self` as a single JSON literal; absent values are
            /// always `null`.
            pub fn marshal_json(&self) -> Vec<u8> {
                $crate::types::encode_literal(self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::null()
            }
        }

        impl From<$payload> for $name {
            fn from(value: $payload) -> Self {
                Self::new(value)
            }
        }

        impl From<Option<$payload>> for $name {
            fn from(value: Option<$payload>) -> Self {
                match value {
                    Some(value) => Self::new(value),
                    None => Self::null(),
                }
            }
        }

        impl From<$name> for Option<$payload> {
            fn from(value: $name) -> Self {
                value.valid.then_some(value.value)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if self.valid {
                    <$payload as $crate::types::Scalar>::serialize_scalar(&self.value, serializer)
                } else {
                    serializer.serialize_none()
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let payload = <Option<$crate::types::Payload<$payload>> as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(payload.map(|p| p.0).into())
            }
        }

        impl $crate::driver::Scanner for $name {
            fn scan(&mut self, src: &$crate::driver::Value) -> Result<(), $crate::error::ScanError> {
                if src.is_null() {
                    *self = Self::null();
                    return Ok(());
                }
                *self = Self::new(<$payload as $crate::types::Scalar>::scan_scalar(src)?);
                Ok(())
            }
        }

        impl $crate::driver::Valuer for $name {
            fn value(&self) -> $crate::driver::Value {
                if self.valid {
                    <$payload as $crate::types::Scalar>::scalar_value(&self.value)
                } else {
                    $crate::driver::Value::Null
                }
            }
        }
    };
}

pub(crate) use nullable_scalar;
