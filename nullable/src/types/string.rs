use std::string::String as StdString;

use crate::driver::Value;
use crate::error::ScanError;
use crate::types::Scalar;

impl Scalar for StdString {
    fn zero() -> Self {
        StdString::new()
    }

    // Anything with a text rendering is accepted, not just driver strings.
    fn scan_scalar(src: &Value) -> Result<Self, ScanError> {
        src.as_string().map(|s| s.into_owned())
    }

    fn scalar_value(&self) -> Value {
        Value::String(self.clone())
    }
}

super::nullable_scalar! {
    /// A nullable string.
    String(StdString)
}

impl From<&str> for String {
    fn from(value: &str) -> Self {
        Self::new(value.into())
    }
}
