use std::fmt::Display;

use thiserror::Error;

use crate::driver::Value;

/// Failure to decode a JSON literal into a nullable value.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unexpected end of JSON input")]
    Empty,
    #[error("invalid JSON literal: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to populate a value from a driver [`Value`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScanError {
    #[error("unsupported scan, storing driver value of type {got} into type {want}")]
    UnexpectedType { got: &'static str, want: &'static str },
    #[error("converting driver value {value:?} to {want}: {reason}")]
    Conversion {
        want: &'static str,
        value: Value,
        reason: String,
    },
    #[error("{0}")]
    Custom(String),
}

impl ScanError {
    /// Builds an error for a user-defined [`Scanner`](crate::Scanner).
    pub fn custom(msg: impl Display) -> Self {
        ScanError::Custom(msg.to_string())
    }

    pub(crate) fn unexpected_type(value: &Value, want: &'static str) -> Self {
        let got = value.type_of().as_str();
        tracing::debug!(got, want, "rejected driver value");
        ScanError::UnexpectedType { got, want }
    }

    pub(crate) fn conversion(value: &Value, want: &'static str, reason: impl Display) -> Self {
        let reason = reason.to_string();
        tracing::debug!(got = value.type_of().as_str(), want, %reason, "driver value conversion failed");
        ScanError::Conversion {
            want,
            value: value.clone(),
            reason,
        }
    }
}
