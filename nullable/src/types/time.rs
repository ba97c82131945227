use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::driver::Value;
use crate::error::ScanError;
use crate::types::Scalar;

impl Scalar for DateTime<FixedOffset> {
    /// The Unix epoch at offset `+00:00`.
    fn zero() -> Self {
        DateTime::<Utc>::default().into()
    }

    fn scan_scalar(src: &Value) -> Result<Self, ScanError> {
        src.as_timestamp()
    }

    fn scalar_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn serialize_scalar<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn deserialize_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = std::string::String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text).map_err(D::Error::custom)
    }
}

super::nullable_scalar! {
    /// A nullable timestamp with its UTC offset.
    ///
    /// The text form is a quoted RFC 3339 string; a zero offset is written
    /// as `Z`.
    Time(DateTime<FixedOffset>)
}

impl From<DateTime<Utc>> for Time {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value.into())
    }
}
