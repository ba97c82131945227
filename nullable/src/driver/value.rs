use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use bytes::Bytes;
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};

use crate::error::ScanError;

/// A value exchanged with a database driver.
///
/// This is the closed set of native types a relational access layer binds as
/// parameters and hands back as result columns. [`Value::Null`] is the
/// "no value" sentinel.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Bytes(Bytes),
    String(String),
    #[cfg(feature = "chrono")]
    Timestamp(DateTime<FixedOffset>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueType {
    Null,
    Int,
    Float,
    Bool,
    Bytes,
    String,
    Timestamp,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Int => "int64",
            ValueType::Float => "float64",
            ValueType::Bool => "bool",
            ValueType::Bytes => "bytes",
            ValueType::String => "string",
            ValueType::Timestamp => "timestamp",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn type_of(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::Bytes(_) => ValueType::Bytes,
            Value::String(_) => ValueType::String,
            #[cfg(feature = "chrono")]
            Value::Timestamp(_) => ValueType::Timestamp,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts to a signed integer. Floats must be integral and in range;
    /// text must be a decimal integer.
    pub fn as_i64(&self) -> Result<i64, ScanError> {
        const WANT: &str = "int64";
        match self {
            Value::Int(i) => Ok(*i),
            // i64::MAX is not representable as f64, so the upper bound is exclusive.
            Value::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
                Ok(*f as i64)
            }
            Value::Float(f) => Err(ScanError::conversion(
                self,
                WANT,
                format_args!("{f} is not an integer in range"),
            )),
            Value::String(_) | Value::Bytes(_) => {
                let text = self.text(WANT)?;
                text.parse::<i64>()
                    .map_err(|e| ScanError::conversion(self, WANT, e))
            }
            _ => Err(ScanError::unexpected_type(self, WANT)),
        }
    }

    pub fn as_f64(&self) -> Result<f64, ScanError> {
        const WANT: &str = "float64";
        match self {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            Value::String(_) | Value::Bytes(_) => {
                let text = self.text(WANT)?;
                text.parse::<f64>()
                    .map_err(|e| ScanError::conversion(self, WANT, e))
            }
            _ => Err(ScanError::unexpected_type(self, WANT)),
        }
    }

    /// Converts to a boolean. Integers must be 0 or 1; text follows the usual
    /// driver spellings (`1`, `t`, `true`, `TRUE`, ...).
    pub fn as_bool(&self) -> Result<bool, ScanError> {
        const WANT: &str = "bool";
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Int(1) => Ok(true),
            Value::Int(0) => Ok(false),
            Value::Int(i) => Err(ScanError::conversion(
                self,
                WANT,
                format_args!("{i} is not 0 or 1"),
            )),
            Value::String(_) | Value::Bytes(_) => match self.text(WANT)? {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
                other => Err(ScanError::conversion(
                    self,
                    WANT,
                    format_args!("{other:?} is not a boolean"),
                )),
            },
            _ => Err(ScanError::unexpected_type(self, WANT)),
        }
    }

    /// Renders any non-null value as text.
    ///
    /// This is looser than the other conversions: bytes are read
    /// as (lossy) UTF-8 and numbers, booleans and timestamps are formatted.
    pub fn as_string(&self) -> Result<Cow<'_, str>, ScanError> {
        match self {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            Value::Bytes(b) => Ok(String::from_utf8_lossy(b)),
            Value::Int(i) => Ok(Cow::Owned(i.to_string())),
            Value::Float(f) => Ok(Cow::Owned(f.to_string())),
            Value::Bool(true) => Ok(Cow::Borrowed("true")),
            Value::Bool(false) => Ok(Cow::Borrowed("false")),
            #[cfg(feature = "chrono")]
            Value::Timestamp(t) => Ok(Cow::Owned(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))),
            Value::Null => Err(ScanError::unexpected_type(self, "string")),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], ScanError> {
        match self {
            Value::Bytes(b) => Ok(b.as_ref()),
            Value::String(s) => Ok(s.as_bytes()),
            _ => Err(ScanError::unexpected_type(self, "bytes")),
        }
    }

    #[cfg(feature = "chrono")]
    pub fn as_timestamp(&self) -> Result<DateTime<FixedOffset>, ScanError> {
        match self {
            Value::Timestamp(t) => Ok(*t),
            _ => Err(ScanError::unexpected_type(self, "timestamp")),
        }
    }

    // Strict text view used by the numeric and boolean parsers: bytes must be UTF-8.
    fn text(&self, want: &'static str) -> Result<&str, ScanError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            Value::Bytes(b) => {
                std::str::from_utf8(b).map_err(|e| ScanError::conversion(self, want, e))
            }
            _ => Err(ScanError::unexpected_type(self, want)),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v.into())
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Value::Bytes(v)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Timestamp(v.fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
