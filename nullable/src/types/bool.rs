use crate::driver::Value;
use crate::error::ScanError;
use crate::types::Scalar;

impl Scalar for bool {
    fn zero() -> Self {
        false
    }

    fn scan_scalar(src: &Value) -> Result<Self, ScanError> {
        src.as_bool()
    }

    fn scalar_value(&self) -> Value {
        Value::Bool(*self)
    }
}

super::nullable_scalar! {
    /// A nullable boolean.
    Bool(bool)
}
