//! Data types recognized for keyword values.
//!
//! Four scalar types and one array type per scalar. Each data type is bound to
//! exactly one representation kind; the binding is fixed at compile time and
//! checked again when the global [`TypeRegistry`](crate::TypeRegistry) is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ValueError};
use crate::raw::RawNode;
use crate::registry::TypeRegistry;
use crate::value::TypedValue;

/// The scalar kinds a typed value can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Representation a typed value uses: one scalar, or a fixed-length sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar(ScalarKind),
    Array(ScalarKind),
}

impl ValueKind {
    pub fn scalar_kind(self) -> ScalarKind {
        match self {
            ValueKind::Scalar(kind) | ValueKind::Array(kind) => kind,
        }
    }

    pub fn is_array(self) -> bool {
        matches!(self, ValueKind::Array(_))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar(kind) => write!(f, "{kind}"),
            ValueKind::Array(kind) => write!(f, "[{kind}]"),
        }
    }
}

/// JSON Schema data type a keyword value is declared to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataType {
    String,
    Integer,
    Number,
    Boolean,
    StringArray,
    IntegerArray,
    NumberArray,
    BooleanArray,
}

impl DataType {
    /// Every data type, in declaration order.
    pub const ALL: [DataType; 8] = [
        DataType::String,
        DataType::Integer,
        DataType::Number,
        DataType::Boolean,
        DataType::StringArray,
        DataType::IntegerArray,
        DataType::NumberArray,
        DataType::BooleanArray,
    ];

    /// Stable display name used in diagnostics and generated output.
    pub fn name(self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::StringArray => "string_array",
            DataType::IntegerArray => "integer_array",
            DataType::NumberArray => "number_array",
            DataType::BooleanArray => "boolean_array",
        }
    }

    /// Looks up a data type by display name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|data_type| data_type.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValueError::UnknownDataType(name.to_string()))
    }

    /// Representation kind values of this type are held in.
    pub fn kind(self) -> ValueKind {
        match self {
            DataType::String => ValueKind::Scalar(ScalarKind::String),
            DataType::Integer => ValueKind::Scalar(ScalarKind::Integer),
            DataType::Number => ValueKind::Scalar(ScalarKind::Number),
            DataType::Boolean => ValueKind::Scalar(ScalarKind::Boolean),
            DataType::StringArray => ValueKind::Array(ScalarKind::String),
            DataType::IntegerArray => ValueKind::Array(ScalarKind::Integer),
            DataType::NumberArray => ValueKind::Array(ScalarKind::Number),
            DataType::BooleanArray => ValueKind::Array(ScalarKind::Boolean),
        }
    }

    pub fn scalar_kind(self) -> ScalarKind {
        self.kind().scalar_kind()
    }

    pub fn is_array(self) -> bool {
        self.kind().is_array()
    }

    /// Converts a raw node declared to be of this type.
    pub fn convert(self, raw: &RawNode) -> Result<TypedValue> {
        TypeRegistry::global().convert(self, raw)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}
