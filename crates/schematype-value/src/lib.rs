//! Typed values for JSON Schema keyword payloads.
//!
//! Raw nodes produced by a JSON parser are converted, per declared data type,
//! into immutable typed values:
//! - Scalars must match the declared kind exactly (integers widen to numbers)
//! - Array types accept a sequence or a bare scalar (wrapped as one element)
//! - Sequences are copied on construction and on read
//!
//! Conversion is pure and synchronous; every type here is `Send + Sync`.

pub mod convert;
pub mod data_type;
pub mod error;
pub mod raw;
pub mod registry;
pub mod value;

pub use data_type::{DataType, ScalarKind, ValueKind};
pub use error::{Result, ValueError};
pub use raw::{RawNode, RawScalar};
pub use registry::{TypeBinding, TypeRegistry};
pub use value::TypedValue;
