use schematype_value::ValueError;

/// Errors that can occur while binding, cataloging, or loading keywords.
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// A keyword was declared with an empty name.
    #[error("keyword name must not be empty")]
    EmptyName,

    /// The keyword name is already bound in the catalog.
    #[error("keyword already registered: {0}")]
    DuplicateKeyword(String),

    /// No keyword is registered under the given name.
    #[error("unknown keyword: {0}")]
    UnknownKeyword(String),

    /// The keyword's value could not be converted to its data type.
    #[error("invalid value for keyword {keyword}: {source}")]
    Value {
        keyword: String,
        #[source]
        source: ValueError,
    },

    /// The data type name in a catalog definition is not recognized.
    #[error("keyword {keyword}: {source}")]
    Definition {
        keyword: String,
        #[source]
        source: ValueError,
    },

    /// A schema or catalog document was not a JSON object.
    #[error("{0} must be a JSON object")]
    NotAnObject(&'static str),

    /// One or more keyword values were rejected.
    #[error("schema rejected: {}", summarize(.errors))]
    Rejected { errors: Vec<KeywordError> },

    /// A document could not be read from disk.
    #[error("failed reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A document was refused before parsing (size or count limit, file type).
    #[error("refusing to load {0}")]
    Refused(String),

    /// The document is not valid JSON.
    #[error("document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

fn summarize(errors: &[KeywordError]) -> String {
    let mut message = String::new();
    for (i, err) in errors.iter().enumerate() {
        if i > 0 {
            message.push_str("; ");
        }
        message.push_str(&err.to_string());
    }
    message
}

pub type Result<T> = std::result::Result<T, KeywordError>;
