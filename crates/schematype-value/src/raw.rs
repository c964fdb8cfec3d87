//! Raw nodes: the untyped shapes a JSON parser hands to conversion.

use serde_json::Value;

use crate::error::{Result, ValueError};

/// A single untyped scalar as produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum RawScalar {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
}

impl RawScalar {
    /// Runtime kind name used in mismatch diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawScalar::String(_) => "string",
            RawScalar::Integer(_) => "integer",
            RawScalar::Number(_) => "number",
            RawScalar::Boolean(_) => "boolean",
        }
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(RawScalar::String(s.clone())),
            Value::Bool(b) => Ok(RawScalar::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(RawScalar::Integer(i))
                } else if n.is_u64() {
                    Err(ValueError::UnsupportedJson(format!(
                        "integer {n} is out of 64-bit signed range"
                    )))
                } else {
                    n.as_f64().map(RawScalar::Number).ok_or_else(|| {
                        ValueError::UnsupportedJson(format!("number {n} is not representable"))
                    })
                }
            }
            Value::Null => Err(ValueError::UnsupportedJson("null".to_string())),
            Value::Array(_) => Err(ValueError::UnsupportedJson("nested array".to_string())),
            Value::Object(_) => Err(ValueError::UnsupportedJson("object".to_string())),
        }
    }
}

/// Untyped parser output: one scalar, or an ordered sequence of scalars.
///
/// Sequences may mix kinds; homogeneity is enforced by conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawNode {
    Scalar(RawScalar),
    Sequence(Vec<RawScalar>),
}

impl RawNode {
    /// Adapts a parsed `serde_json` value.
    ///
    /// `null`, objects, nested arrays and integers beyond `i64` have no raw
    /// representation and fail with [`ValueError::UnsupportedJson`].
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    RawScalar::from_json(item).map_err(|err| match err {
                        ValueError::UnsupportedJson(msg) => {
                            ValueError::UnsupportedJson(format!("{msg} at index {index}"))
                        }
                        other => other,
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(RawNode::Sequence),
            other => RawScalar::from_json(other).map(RawNode::Scalar),
        }
    }

    /// Parses JSON text and adapts the result.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| ValueError::UnsupportedJson(format!("invalid JSON: {err}")))?;
        Self::from_json(&value)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, RawNode::Sequence(_))
    }

    /// Runtime kind name used in mismatch diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawNode::Scalar(scalar) => scalar.kind_name(),
            RawNode::Sequence(_) => "sequence",
        }
    }
}

impl TryFrom<&Value> for RawNode {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl From<RawScalar> for RawNode {
    fn from(scalar: RawScalar) -> Self {
        RawNode::Scalar(scalar)
    }
}

impl From<Vec<RawScalar>> for RawNode {
    fn from(items: Vec<RawScalar>) -> Self {
        RawNode::Sequence(items)
    }
}

impl From<&str> for RawScalar {
    fn from(s: &str) -> Self {
        RawScalar::String(s.to_string())
    }
}

impl From<String> for RawScalar {
    fn from(s: String) -> Self {
        RawScalar::String(s)
    }
}

impl From<i64> for RawScalar {
    fn from(i: i64) -> Self {
        RawScalar::Integer(i)
    }
}

impl From<f64> for RawScalar {
    fn from(f: f64) -> Self {
        RawScalar::Number(f)
    }
}

impl From<bool> for RawScalar {
    fn from(b: bool) -> Self {
        RawScalar::Boolean(b)
    }
}

impl From<&str> for RawNode {
    fn from(s: &str) -> Self {
        RawNode::Scalar(s.into())
    }
}

impl From<String> for RawNode {
    fn from(s: String) -> Self {
        RawNode::Scalar(s.into())
    }
}

impl From<i64> for RawNode {
    fn from(i: i64) -> Self {
        RawNode::Scalar(i.into())
    }
}

impl From<f64> for RawNode {
    fn from(f: f64) -> Self {
        RawNode::Scalar(f.into())
    }
}

impl From<bool> for RawNode {
    fn from(b: bool) -> Self {
        RawNode::Scalar(b.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn adapts_scalars() {
        assert_eq!(RawNode::from_json(&json!("x")).unwrap(), RawNode::from("x"));
        assert_eq!(RawNode::from_json(&json!(7)).unwrap(), RawNode::from(7i64));
        assert_eq!(RawNode::from_json(&json!(-2.5)).unwrap(), RawNode::from(-2.5));
        assert_eq!(RawNode::from_json(&json!(true)).unwrap(), RawNode::from(true));
    }

    #[test]
    fn adapts_mixed_sequence() {
        let raw = RawNode::from_json(&json!([1, "a", 2.5, false])).unwrap();
        assert_eq!(
            raw,
            RawNode::Sequence(vec![
                RawScalar::Integer(1),
                RawScalar::String("a".to_string()),
                RawScalar::Number(2.5),
                RawScalar::Boolean(false),
            ])
        );
        assert!(raw.is_sequence());
        assert_eq!(raw.kind_name(), "sequence");
    }

    #[test]
    fn rejects_shapes_without_raw_form() {
        for value in [json!(null), json!({"a": 1}), json!([[1]]), json!([1, null])] {
            assert!(
                matches!(RawNode::from_json(&value), Err(ValueError::UnsupportedJson(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unsigned_overflow() {
        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(
            RawNode::from_json(&value),
            Err(ValueError::UnsupportedJson(msg)) if msg.contains("out of 64-bit")
        ));
    }

    #[test]
    fn parse_reports_invalid_text() {
        assert!(RawNode::parse("[1, 2").is_err());
        assert_eq!(
            RawNode::parse("[\"a\"]").unwrap(),
            RawNode::Sequence(vec!["a".into()])
        );
    }

    #[test]
    fn element_errors_name_the_index() {
        let err = RawNode::from_json(&json!(["a", {}])).unwrap_err();
        assert_eq!(err, ValueError::UnsupportedJson("object at index 1".to_string()));
    }
}
