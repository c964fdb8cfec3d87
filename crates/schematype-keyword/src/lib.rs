//! JSON Schema keyword bindings.
//!
//! Every keyword is bound to the data type its value must carry. A schema
//! loader looks the keyword up in a [`KeywordCatalog`], then converts the raw
//! value through that data type into a [`TypedValue`](schematype_value::TypedValue).

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod keyword;
pub mod loader;

pub use catalog::KeywordCatalog;
pub use config::{CatalogConfig, LoaderConfig, DEFAULT_MAX_FILE_SIZE};
pub use document::read_document;
pub use error::{KeywordError, Result};
pub use keyword::Keyword;
pub use loader::{LoadedSchema, SchemaLoader};
