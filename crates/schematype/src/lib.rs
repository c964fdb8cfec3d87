//! Typed JSON Schema keyword values.
//!
//! schematype converts untyped JSON parser output into immutable, typed
//! values according to the data type each schema keyword declares.
//!
//! # Crate Structure
//!
//! - [`value`] — Data types, raw nodes, typed values, and conversion
//! - [`keyword`] — Keyword bindings, the keyword catalog, and schema loading

/// Re-export value types.
pub mod value {
    pub use schematype_value::*;
}

/// Re-export keyword types.
pub mod keyword {
    pub use schematype_keyword::*;
}

pub use schematype_keyword::{Keyword, KeywordCatalog, KeywordError, LoadedSchema, SchemaLoader};
pub use schematype_value::{DataType, RawNode, RawScalar, TypedValue, ValueError};
