//! Nullable value wrappers.
//!
//! Every wrapper pairs a payload with a `valid` flag and converts across two
//! boundaries: a single JSON literal (the text interchange boundary) and an
//! opaque [`driver::Value`] exchanged with a relational access layer.
//!
//! Two designs live side by side:
//!
//! * [`types`] holds the concrete family ([`types::String`], [`types::Bool`],
//!   [`types::Int`], [`types::Float`], [`types::Time`] and [`types::RawJson`]),
//!   which always renders absence as the literal `null`.
//! * [`Null`] boxes any `T`, delegating to `T`'s serde implementation and to
//!   its [`DriverType`] implementation.
//!
//! ```
//! use nullable::types::Int;
//!
//! let mut n = Int::default();
//! n.unmarshal_json(b"123").unwrap();
//! assert_eq!(n, Int::new(123));
//! assert_eq!(n.marshal_json(), b"123");
//!
//! n.unmarshal_json(b"null").unwrap();
//! assert!(n.is_null());
//! assert_eq!(n.marshal_json(), b"null");
//! ```

/// The driver boundary: opaque values and the scanner/valuer capabilities.
pub mod driver;
/// Conversion errors.
pub mod error;
mod null;
/// The concrete nullable scalar family.
pub mod types;

pub use driver::{DriverType, Scanner, Valuer, Value, ValueType};
pub use error::{DecodeError, ScanError};
pub use null::Null;

/// The JSON absence marker.
pub(crate) const NULL_LITERAL: &[u8] = b"null";
