//! Conversion routines, one per data type.
//!
//! Each routine takes a raw node already declared to be of its data type and
//! either builds a typed value or reports a [`ValueError::TypeMismatch`].
//! The only coercions are integer → number widening and wrapping a bare
//! scalar into a one-element array.

use tracing::{debug, trace};

use crate::data_type::DataType;
use crate::error::{Result, ValueError};
use crate::raw::{RawNode, RawScalar};
use crate::value::TypedValue;

/// Scalar rule shared by a scalar type and its array form.
type ScalarRule<T> = fn(&RawScalar) -> Option<T>;

pub fn to_string(raw: &RawNode) -> Result<TypedValue> {
    scalar(DataType::String, raw, string_rule).map(TypedValue::string)
}

pub fn to_integer(raw: &RawNode) -> Result<TypedValue> {
    scalar(DataType::Integer, raw, integer_rule).map(TypedValue::integer)
}

/// Integers widen to the nearest `f64`; magnitudes above 2^53 may round.
pub fn to_number(raw: &RawNode) -> Result<TypedValue> {
    scalar(DataType::Number, raw, number_rule).map(TypedValue::number)
}

pub fn to_boolean(raw: &RawNode) -> Result<TypedValue> {
    scalar(DataType::Boolean, raw, boolean_rule).map(TypedValue::boolean)
}

pub fn to_string_array(raw: &RawNode) -> Result<TypedValue> {
    array(DataType::StringArray, raw, string_rule).map(TypedValue::string_array)
}

pub fn to_integer_array(raw: &RawNode) -> Result<TypedValue> {
    array(DataType::IntegerArray, raw, integer_rule).map(TypedValue::integer_array)
}

pub fn to_number_array(raw: &RawNode) -> Result<TypedValue> {
    array(DataType::NumberArray, raw, number_rule).map(TypedValue::number_array)
}

pub fn to_boolean_array(raw: &RawNode) -> Result<TypedValue> {
    array(DataType::BooleanArray, raw, boolean_rule).map(TypedValue::boolean_array)
}

fn string_rule(raw: &RawScalar) -> Option<String> {
    match raw {
        RawScalar::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn integer_rule(raw: &RawScalar) -> Option<i64> {
    match raw {
        RawScalar::Integer(i) => Some(*i),
        _ => None,
    }
}

// Integers widen (rounding past 2^53); numbers never narrow to integers.
fn number_rule(raw: &RawScalar) -> Option<f64> {
    match raw {
        RawScalar::Number(f) => Some(*f),
        RawScalar::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

fn boolean_rule(raw: &RawScalar) -> Option<bool> {
    match raw {
        RawScalar::Boolean(b) => Some(*b),
        _ => None,
    }
}

fn scalar<T>(expected: DataType, raw: &RawNode, rule: ScalarRule<T>) -> Result<T> {
    let value = match raw {
        RawNode::Scalar(scalar) => rule(scalar),
        RawNode::Sequence(_) => None,
    };

    match value {
        Some(value) => {
            trace!(data_type = %expected, "converted scalar");
            Ok(value)
        }
        None => Err(mismatch(expected, raw.kind_name(), None)),
    }
}

fn array<T>(expected: DataType, raw: &RawNode, rule: ScalarRule<T>) -> Result<Vec<T>> {
    let items = match raw {
        RawNode::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                rule(item).ok_or_else(|| mismatch(expected, item.kind_name(), Some(index)))
            })
            .collect::<Result<Vec<T>>>()?,
        RawNode::Scalar(scalar) => {
            let item = rule(scalar).ok_or_else(|| mismatch(expected, scalar.kind_name(), None))?;
            vec![item]
        }
    };

    trace!(data_type = %expected, len = items.len(), "converted array");
    Ok(items)
}

fn mismatch(expected: DataType, found: &'static str, index: Option<usize>) -> ValueError {
    debug!(data_type = %expected, found, ?index, "type mismatch");
    ValueError::TypeMismatch {
        expected,
        found,
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: Vec<RawScalar>) -> RawNode {
        RawNode::Sequence(items)
    }

    #[test]
    fn scalar_round_trips_through_display() {
        assert_eq!(to_integer(&7i64.into()).unwrap().to_string(), "7");
        assert_eq!(to_boolean(&true.into()).unwrap().to_string(), "true");
        assert_eq!(to_string(&"hello".into()).unwrap().to_string(), "hello");
        assert_eq!(to_number(&2.5.into()).unwrap().to_string(), "2.5");
    }

    #[test]
    fn number_widens_whole_numbers() {
        let value = to_number(&3i64.into()).unwrap();
        assert_eq!(value.as_f64(), Some(3.0));
        assert_eq!(value.data_type(), DataType::Number);
    }

    #[test]
    fn widening_rounds_past_f64_precision() {
        let exact = to_number(&9_007_199_254_740_992i64.into()).unwrap();
        assert_eq!(exact.as_f64(), Some(9_007_199_254_740_992.0));

        let rounded = to_number(&9_007_199_254_740_993i64.into()).unwrap();
        assert_eq!(rounded.as_f64(), Some(9_007_199_254_740_992.0));
        assert_eq!(rounded.to_string(), "9007199254740992.0");
    }

    #[test]
    fn number_array_widens_per_element() {
        let raw = seq(vec![1i64.into(), 2.5.into(), 3i64.into()]);
        let value = to_number_array(&raw).unwrap();
        assert_eq!(value.numbers().unwrap(), vec![1.0, 2.5, 3.0]);
        assert_eq!(value.to_string(), "1.0,2.5,3.0");
    }

    #[test]
    fn integer_never_accepts_floats() {
        assert!(matches!(
            to_integer(&3.0.into()),
            Err(ValueError::TypeMismatch {
                expected: DataType::Integer,
                found: "number",
                index: None,
            })
        ));
    }

    #[test]
    fn scalar_types_reject_sequences_and_wrong_kinds() {
        assert!(matches!(
            to_integer(&true.into()),
            Err(ValueError::TypeMismatch {
                expected: DataType::Integer,
                found: "boolean",
                ..
            })
        ));
        assert!(matches!(
            to_string(&seq(vec!["a".into()])),
            Err(ValueError::TypeMismatch {
                found: "sequence",
                ..
            })
        ));
        assert!(to_boolean(&"true".into()).is_err());
        assert!(to_number(&"1.5".into()).is_err());
    }

    #[test]
    fn array_wraps_bare_scalar() {
        let value = to_string_array(&"x".into()).unwrap();
        assert_eq!(value.strings().unwrap(), vec!["x".to_string()]);
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn array_keeps_input_order() {
        let value = to_string_array(&seq(vec!["a".into(), "b".into()])).unwrap();
        assert_eq!(value.strings().unwrap(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(value.to_string(), "a,b");
    }

    #[test]
    fn array_rejects_heterogeneous_elements() {
        let raw = seq(vec![1i64.into(), "a".into()]);
        assert_eq!(
            to_integer_array(&raw).unwrap_err(),
            ValueError::TypeMismatch {
                expected: DataType::IntegerArray,
                found: "string",
                index: Some(1),
            }
        );
    }

    #[test]
    fn wrapped_scalar_uses_the_scalar_rule() {
        assert_eq!(
            to_number_array(&4i64.into()).unwrap().numbers().unwrap(),
            vec![4.0]
        );
        assert!(matches!(
            to_boolean_array(&1i64.into()),
            Err(ValueError::TypeMismatch {
                expected: DataType::BooleanArray,
                index: None,
                ..
            })
        ));
    }

    #[test]
    fn empty_sequence_yields_empty_array() {
        let value = to_boolean_array(&seq(Vec::new())).unwrap();
        assert!(value.is_empty());
        assert_eq!(value.booleans().unwrap(), Vec::<bool>::new());
    }

    #[test]
    fn conversion_does_not_touch_input() {
        let raw = seq(vec!["a".into(), "b".into()]);
        let before = raw.clone();
        let first = to_string_array(&raw).unwrap();
        let second = to_string_array(&raw).unwrap();
        assert_eq!(raw, before);
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first, second);
    }
}
