use std::fmt;
use std::io;

use schematype_keyword::KeywordError;
use schematype_value::ValueError;

// Exit codes follow sysexits-style semantics where one exists.
pub const SUCCESS: i32 = 0;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const NO_INPUT: i32 = 66;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn io_code(kind: io::ErrorKind) -> i32 {
    match kind {
        io::ErrorKind::NotFound => NO_INPUT,
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::InvalidData => DATA_INVALID,
        _ => INTERNAL,
    }
}

pub fn value_error(context: &str, err: ValueError) -> CliError {
    let code = match err {
        ValueError::TypeMismatch { .. } | ValueError::UnsupportedJson(_) => DATA_INVALID,
        ValueError::UnknownDataType(_) => USAGE,
        ValueError::Configuration(_) => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn keyword_error(context: &str, err: KeywordError) -> CliError {
    let code = match &err {
        KeywordError::UnknownKeyword(_) => USAGE,
        KeywordError::Io { source, .. } => io_code(source.kind()),
        KeywordError::Refused(_)
        | KeywordError::Value { .. }
        | KeywordError::Rejected { .. }
        | KeywordError::NotAnObject(_)
        | KeywordError::InvalidJson(_)
        | KeywordError::EmptyName
        | KeywordError::DuplicateKeyword(_)
        | KeywordError::Definition { .. } => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}
