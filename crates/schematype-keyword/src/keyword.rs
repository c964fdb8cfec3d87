use std::fmt;

use schematype_value::{DataType, RawNode, TypedValue};

use crate::error::{KeywordError, Result};

/// A named schema directive and the data type its value must carry.
///
/// Immutable once built; the name is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword {
    name: String,
    data_type: DataType,
}

impl Keyword {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KeywordError::EmptyName);
        }
        Ok(Self { name, data_type })
    }

    pub fn string(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::String)
    }

    pub fn integer(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::Integer)
    }

    pub fn number(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::Boolean)
    }

    pub fn string_array(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::StringArray)
    }

    pub fn integer_array(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::IntegerArray)
    }

    pub fn number_array(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::NumberArray)
    }

    pub fn boolean_array(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DataType::BooleanArray)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Convert a raw value given for this keyword.
    pub fn convert(&self, raw: &RawNode) -> Result<TypedValue> {
        self.data_type
            .convert(raw)
            .map_err(|source| KeywordError::Value {
                keyword: self.name.clone(),
                source,
            })
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)
    }
}
