use crate::data_type::DataType;

/// Errors that can occur while converting raw nodes into typed values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The raw node's runtime shape does not match the declared data type.
    #[error("type mismatch: expected {expected}, found {found}{}", index_suffix(.index))]
    TypeMismatch {
        expected: DataType,
        found: &'static str,
        index: Option<usize>,
    },

    /// The parsed JSON value has no raw node representation.
    #[error("unsupported JSON value: {0}")]
    UnsupportedJson(String),

    /// No data type is known under the given name.
    #[error("unknown data type: {0}")]
    UnknownDataType(String),

    /// The data type registry is inconsistent.
    #[error("invalid data type registry: {0}")]
    Configuration(String),
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!(" at index {index}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ValueError>;
