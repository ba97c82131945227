use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverType, Scanner, Valuer, Value};
use crate::error::{DecodeError, ScanError};

/// A nullable box around any `T`.
///
/// Unlike the concrete family in [`types`](crate::types), `Null<T>` has no
/// codec of its own: text goes through `T`'s serde implementation and driver
/// values through `T`'s [`DriverType`] implementation. The box only adds the
/// `valid` flag and the dispatch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Null<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Null<T> {
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }
}

impl<T: Default> Null<T> {
    pub fn null() -> Self {
        Self::default()
    }
}

impl<T: Clone + Default> Null<T> {
    /// Copies the referenced value in, or builds an absent value when there
    /// is none.
    pub fn make(value: Option<&T>) -> Self {
        value.cloned().into()
    }
}

impl<T: DeserializeOwned> Null<T> {
    /// Decodes a single JSON literal into `self`.
    ///
    /// `null` is matched ignoring ASCII case here (`NULL` and `Null` are
    /// absent too), unlike the concrete family which only accepts the exact
    /// lowercase literal. The payload is left as it was when the input is a
    /// null literal. A failed decode leaves `valid == false` and returns the
    /// error.
    pub fn unmarshal_json(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        if bytes.eq_ignore_ascii_case(crate::NULL_LITERAL) {
            self.valid = false;
            return Ok(());
        }
        let decoded = if bytes.is_empty() {
            Err(DecodeError::Empty)
        } else {
            serde_json::from_slice::<T>(bytes).map_err(DecodeError::from)
        };
        match decoded {
            Ok(value) => {
                self.value = value;
                self.valid = true;
                Ok(())
            }
            Err(error) => {
                tracing::debug!(%error, payload = std::any::type_name::<T>(), "decode into Null failed");
                self.valid = false;
                Err(error)
            }
        }
    }
}

impl<T: Serialize> Null<T> {
    /// Encodes the payload with `T`'s own encoding, unwrapped.
    ///
    /// An absent value produces `None`: no text at all, as opposed to an
    /// empty payload or the literal `null`. Rendering absence is left to the
    /// surrounding structural encoder.
    pub fn marshal_json(&self) -> serde_json::Result<Option<Vec<u8>>> {
        if !self.valid {
            return Ok(None);
        }
        serde_json::to_vec(&self.value).map(Some)
    }
}

impl<T: Default> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::null(),
        }
    }
}

impl<T> From<Null<T>> for Option<T> {
    fn from(value: Null<T>) -> Self {
        value.valid.then_some(value.value)
    }
}

impl<T: Serialize> Serialize for Null<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            self.value.serialize(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Null<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

impl<T: DriverType> Scanner for Null<T> {
    fn scan(&mut self, src: &Value) -> Result<(), ScanError> {
        if src.is_null() {
            self.value = T::default();
            self.valid = false;
            return Ok(());
        }
        self.value.scan(src)?;
        self.valid = true;
        Ok(())
    }
}

impl<T: DriverType> Valuer for Null<T> {
    /// Produces the driver value for the box.
    ///
    /// When `T` exposes its own [`Valuer`], that valuer is asked for a value
    /// even if `valid` is false: an absent compound value is sent as `T`'s
    /// representation of its current (usually default) payload, not as
    /// [`Value::Null`]. Without one, absence maps to [`Value::Null`].
    fn value(&self) -> Value {
        if let Some(valuer) = self.value.as_valuer() {
            return valuer.value();
        }
        if self.valid {
            self.value.to_value()
        } else {
            Value::Null
        }
    }
}
