use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::data_type::{DataType, ValueKind};

/// Immutable, type-checked keyword value.
///
/// Sequences are copied when the value is built and again by the owned
/// accessors (`strings`, `integers`, ...). The borrowed accessors hand out
/// read-only slices; no accessor exposes mutable access to the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    payload: Payload,
}

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    StringArray(Box<[String]>),
    IntegerArray(Box<[i64]>),
    NumberArray(Box<[f64]>),
    BooleanArray(Box<[bool]>),
}

impl TypedValue {
    pub(crate) fn string(value: String) -> Self {
        Self {
            payload: Payload::String(value),
        }
    }

    pub(crate) fn integer(value: i64) -> Self {
        Self {
            payload: Payload::Integer(value),
        }
    }

    pub(crate) fn number(value: f64) -> Self {
        Self {
            payload: Payload::Number(value),
        }
    }

    pub(crate) fn boolean(value: bool) -> Self {
        Self {
            payload: Payload::Boolean(value),
        }
    }

    pub(crate) fn string_array(items: Vec<String>) -> Self {
        Self {
            payload: Payload::StringArray(items.into_boxed_slice()),
        }
    }

    pub(crate) fn integer_array(items: Vec<i64>) -> Self {
        Self {
            payload: Payload::IntegerArray(items.into_boxed_slice()),
        }
    }

    pub(crate) fn number_array(items: Vec<f64>) -> Self {
        Self {
            payload: Payload::NumberArray(items.into_boxed_slice()),
        }
    }

    pub(crate) fn boolean_array(items: Vec<bool>) -> Self {
        Self {
            payload: Payload::BooleanArray(items.into_boxed_slice()),
        }
    }

    /// Data type this value was converted as.
    pub fn data_type(&self) -> DataType {
        match self.payload {
            Payload::String(_) => DataType::String,
            Payload::Integer(_) => DataType::Integer,
            Payload::Number(_) => DataType::Number,
            Payload::Boolean(_) => DataType::Boolean,
            Payload::StringArray(_) => DataType::StringArray,
            Payload::IntegerArray(_) => DataType::IntegerArray,
            Payload::NumberArray(_) => DataType::NumberArray,
            Payload::BooleanArray(_) => DataType::BooleanArray,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.data_type().kind()
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.payload {
            Payload::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.payload {
            Payload::Number(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match &self.payload {
            Payload::StringArray(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match &self.payload {
            Payload::IntegerArray(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&[f64]> {
        match &self.payload {
            Payload::NumberArray(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_booleans(&self) -> Option<&[bool]> {
        match &self.payload {
            Payload::BooleanArray(items) => Some(items),
            _ => None,
        }
    }

    /// Fresh copy of a string-array payload.
    pub fn strings(&self) -> Option<Vec<String>> {
        self.as_strings().map(<[String]>::to_vec)
    }

    /// Fresh copy of an integer-array payload.
    pub fn integers(&self) -> Option<Vec<i64>> {
        self.as_integers().map(<[i64]>::to_vec)
    }

    /// Fresh copy of a number-array payload.
    pub fn numbers(&self) -> Option<Vec<f64>> {
        self.as_numbers().map(<[f64]>::to_vec)
    }

    /// Fresh copy of a boolean-array payload.
    pub fn booleans(&self) -> Option<Vec<bool>> {
        self.as_booleans().map(<[bool]>::to_vec)
    }

    /// Element count; scalars count as one.
    pub fn len(&self) -> usize {
        match &self.payload {
            Payload::StringArray(items) => items.len(),
            Payload::IntegerArray(items) => items.len(),
            Payload::NumberArray(items) => items.len(),
            Payload::BooleanArray(items) => items.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// JSON form of the payload.
    pub fn to_json(&self) -> Value {
        match &self.payload {
            Payload::String(s) => Value::from(s.as_str()),
            Payload::Integer(i) => Value::from(*i),
            Payload::Number(f) => Value::from(*f),
            Payload::Boolean(b) => Value::from(*b),
            Payload::StringArray(items) => Value::from(items.to_vec()),
            Payload::IntegerArray(items) => Value::from(items.to_vec()),
            Payload::NumberArray(items) => Value::from(items.to_vec()),
            Payload::BooleanArray(items) => Value::from(items.to_vec()),
        }
    }
}

impl fmt::Display for TypedValue {
    /// Scalars render as-is; arrays render each element joined by `,`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::String(s) => f.write_str(s),
            Payload::Integer(i) => write!(f, "{i}"),
            Payload::Number(n) => write_number(f, *n),
            Payload::Boolean(b) => write!(f, "{b}"),
            Payload::StringArray(items) => join(f, items, |f, s| f.write_str(s)),
            Payload::IntegerArray(items) => join(f, items, |f, i| write!(f, "{i}")),
            Payload::NumberArray(items) => join(f, items, |f, n| write_number(f, *n)),
            Payload::BooleanArray(items) => join(f, items, |f, b| write!(f, "{b}")),
        }
    }
}

// `{:?}` keeps the fractional part of whole floats ("3.0", not "3").
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    write!(f, "{n:?}")
}

fn join<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_render_naturally() {
        assert_eq!(TypedValue::integer(7).to_string(), "7");
        assert_eq!(TypedValue::integer(-42).to_string(), "-42");
        assert_eq!(TypedValue::boolean(true).to_string(), "true");
        assert_eq!(TypedValue::string("x".to_string()).to_string(), "x");
        assert_eq!(TypedValue::number(3.0).to_string(), "3.0");
        assert_eq!(TypedValue::number(2.5).to_string(), "2.5");
    }

    #[test]
    fn arrays_join_every_element() {
        let strings = TypedValue::string_array(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(strings.to_string(), "a,b");

        let numbers = TypedValue::number_array(vec![1.0, 2.5, 3.0]);
        assert_eq!(numbers.to_string(), "1.0,2.5,3.0");

        let booleans = TypedValue::boolean_array(vec![true, false]);
        assert_eq!(booleans.to_string(), "true,false");

        assert_eq!(TypedValue::integer_array(Vec::new()).to_string(), "");
    }

    #[test]
    fn owned_accessor_returns_independent_copies() {
        let value = TypedValue::integer_array(vec![1, 2, 3]);

        let mut first = value.integers().unwrap();
        let second = value.integers().unwrap();
        first[0] = 99;
        first.push(4);

        assert_eq!(second, vec![1, 2, 3]);
        assert_eq!(value.as_integers().unwrap(), &[1, 2, 3]);
        assert_eq!(value.len(), 3);
    }

    #[test]
    fn accessors_match_payload_only() {
        let value = TypedValue::string("x".to_string());
        assert_eq!(value.as_str(), Some("x"));
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.strings(), None);
        assert_eq!(value.len(), 1);
        assert!(!value.is_empty());
        assert_eq!(value.data_type(), DataType::String);
    }

    #[test]
    fn json_form_matches_payload() {
        assert_eq!(TypedValue::number(3.0).to_json(), json!(3.0));
        assert_eq!(
            TypedValue::string_array(vec!["a".to_string()]).to_json(),
            json!(["a"])
        );
        let serialized = serde_json::to_string(&TypedValue::boolean_array(vec![true])).unwrap();
        assert_eq!(serialized, "[true]");
    }
}
