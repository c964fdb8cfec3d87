use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::convert;
use crate::data_type::{DataType, ScalarKind, ValueKind};
use crate::error::{Result, ValueError};
use crate::raw::{RawNode, RawScalar};
use crate::value::TypedValue;

/// Conversion routine bound to a data type.
pub type Converter = fn(&RawNode) -> Result<TypedValue>;

/// Binding of one data type to its conversion routine.
///
/// The representation kind is derived from the data type, so it cannot drift
/// from it; [`TypeRegistry::from_bindings`] checks the routine itself.
#[derive(Debug, Clone, Copy)]
pub struct TypeBinding {
    data_type: DataType,
    convert: Converter,
}

impl TypeBinding {
    pub fn new(data_type: DataType, convert: Converter) -> Self {
        Self { data_type, convert }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Representation kind values produced by this binding must have.
    pub fn kind(&self) -> ValueKind {
        self.data_type.kind()
    }

    pub fn converter(&self) -> Converter {
        self.convert
    }

    /// Run the routine on a sample of the bound scalar kind and confirm it
    /// yields a value of the bound data type.
    fn check(&self) -> Result<()> {
        let sample = RawNode::Scalar(sample_scalar(self.kind().scalar_kind()));
        match (self.convert)(&sample) {
            Ok(value) if value.data_type() == self.data_type => Ok(()),
            Ok(value) => Err(ValueError::Configuration(format!(
                "{} bound to a routine producing {} (requires {})",
                self.data_type,
                value.kind(),
                self.kind()
            ))),
            Err(err) => Err(ValueError::Configuration(format!(
                "{} bound to a routine that rejects {}: {err}",
                self.data_type,
                self.kind().scalar_kind()
            ))),
        }
    }
}

fn sample_scalar(kind: ScalarKind) -> RawScalar {
    match kind {
        ScalarKind::String => RawScalar::String(String::new()),
        ScalarKind::Integer => RawScalar::Integer(0),
        // Fractional so integer routines cannot accept it.
        ScalarKind::Number => RawScalar::Number(0.5),
        ScalarKind::Boolean => RawScalar::Boolean(false),
    }
}

static GLOBAL: Lazy<TypeRegistry> = Lazy::new(|| {
    TypeRegistry::from_bindings(standard_bindings())
        .unwrap_or_else(|err| panic!("data type registry failed to initialize: {err}"))
});

/// Total, fixed mapping from data type to conversion routine.
#[derive(Debug)]
pub struct TypeRegistry {
    bindings: HashMap<DataType, TypeBinding>,
}

impl TypeRegistry {
    /// Process-wide registry built from the standard bindings.
    ///
    /// # Panics
    ///
    /// Panics on first use if the standard bindings are inconsistent.
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Build a registry, checking that every data type is bound exactly once
    /// to a routine producing the representation kind it declares.
    pub fn from_bindings(bindings: impl IntoIterator<Item = TypeBinding>) -> Result<Self> {
        let mut map = HashMap::new();

        for binding in bindings {
            binding.check()?;
            if map.insert(binding.data_type, binding).is_some() {
                return Err(ValueError::Configuration(format!(
                    "{} bound more than once",
                    binding.data_type
                )));
            }
        }

        let missing: Vec<&str> = DataType::ALL
            .iter()
            .filter(|data_type| !map.contains_key(*data_type))
            .map(|data_type| data_type.name())
            .collect();
        if !missing.is_empty() {
            return Err(ValueError::Configuration(format!(
                "unbound data types: {}",
                missing.join(", ")
            )));
        }

        debug!(bindings = map.len(), "data type registry built");
        Ok(Self { bindings: map })
    }

    pub fn binding(&self, data_type: DataType) -> &TypeBinding {
        // Totality is checked in `from_bindings`.
        &self.bindings[&data_type]
    }

    /// Convert a raw node declared as `data_type`.
    pub fn convert(&self, data_type: DataType, raw: &RawNode) -> Result<TypedValue> {
        (self.binding(data_type).convert)(raw)
    }

    /// Look up a data type by display name.
    pub fn lookup(&self, name: &str) -> Result<DataType> {
        DataType::from_name(name)
    }

    /// Bindings in declaration order of [`DataType::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = &TypeBinding> + '_ {
        DataType::ALL.iter().map(move |data_type| self.binding(*data_type))
    }
}

pub fn standard_bindings() -> Vec<TypeBinding> {
    vec![
        TypeBinding::new(DataType::String, convert::to_string),
        TypeBinding::new(DataType::Integer, convert::to_integer),
        TypeBinding::new(DataType::Number, convert::to_number),
        TypeBinding::new(DataType::Boolean, convert::to_boolean),
        TypeBinding::new(DataType::StringArray, convert::to_string_array),
        TypeBinding::new(DataType::IntegerArray, convert::to_integer_array),
        TypeBinding::new(DataType::NumberArray, convert::to_number_array),
        TypeBinding::new(DataType::BooleanArray, convert::to_boolean_array),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_registry_is_total() {
        let registry = TypeRegistry::global();
        let bound: Vec<DataType> = registry.iter().map(|b| b.data_type()).collect();
        assert_eq!(bound, DataType::ALL.to_vec());
    }

    #[test]
    fn each_binding_produces_its_own_data_type() {
        let samples: [(DataType, RawNode); 8] = [
            (DataType::String, "s".into()),
            (DataType::Integer, 1i64.into()),
            (DataType::Number, 1.5.into()),
            (DataType::Boolean, false.into()),
            (DataType::StringArray, "s".into()),
            (DataType::IntegerArray, 1i64.into()),
            (DataType::NumberArray, 1i64.into()),
            (DataType::BooleanArray, true.into()),
        ];
        for (data_type, raw) in samples {
            let value = data_type.convert(&raw).unwrap();
            assert_eq!(value.data_type(), data_type);
            assert_eq!(value.kind(), data_type.kind());
        }
    }

    #[test]
    fn rejects_misbound_converter() {
        let mut bindings = standard_bindings();
        bindings[0] = TypeBinding::new(DataType::String, convert::to_integer);
        assert!(matches!(
            TypeRegistry::from_bindings(bindings),
            Err(ValueError::Configuration(msg)) if msg.starts_with("string bound to a routine that rejects string")
        ));
    }

    #[test]
    fn rejects_converter_of_wrong_shape() {
        let mut bindings = standard_bindings();
        bindings[4] = TypeBinding::new(DataType::StringArray, convert::to_string);
        assert!(matches!(
            TypeRegistry::from_bindings(bindings),
            Err(ValueError::Configuration(msg)) if msg == "string_array bound to a routine producing string (requires [string])"
        ));
    }

    #[test]
    fn rejects_widening_converter_for_integer() {
        let mut bindings = standard_bindings();
        bindings[1] = TypeBinding::new(DataType::Integer, convert::to_number);
        assert!(matches!(
            TypeRegistry::from_bindings(bindings),
            Err(ValueError::Configuration(msg)) if msg.contains("producing number (requires integer)")
        ));
    }

    #[test]
    fn binding_kind_follows_data_type() {
        for binding in standard_bindings() {
            assert_eq!(binding.kind(), binding.data_type().kind());
        }
    }

    #[test]
    fn rejects_rebinding() {
        let mut bindings = standard_bindings();
        bindings.push(TypeBinding::new(DataType::Integer, convert::to_integer));
        assert!(matches!(
            TypeRegistry::from_bindings(bindings),
            Err(ValueError::Configuration(msg)) if msg.contains("more than once")
        ));
    }

    #[test]
    fn rejects_partial_registry() {
        let bindings = standard_bindings()
            .into_iter()
            .filter(|b| b.data_type() != DataType::NumberArray);
        assert!(matches!(
            TypeRegistry::from_bindings(bindings),
            Err(ValueError::Configuration(msg)) if msg == "unbound data types: number_array"
        ));
    }

    #[test]
    fn convert_dispatches_by_data_type() {
        let registry = TypeRegistry::global();
        let raw = RawNode::Sequence(vec![RawScalar::Integer(1), RawScalar::Number(2.5)]);
        let value = registry.convert(DataType::NumberArray, &raw).unwrap();
        assert_eq!(value.numbers().unwrap(), vec![1.0, 2.5]);
        assert!(registry.convert(DataType::IntegerArray, &raw).is_err());
        assert_eq!(registry.lookup("boolean").unwrap(), DataType::Boolean);
    }
}
