use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use schematype_value::{DataType, RawNode, TypedValue};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::document::read_document;
use crate::error::{KeywordError, Result};
use crate::keyword::Keyword;

const STRING_KEYWORDS: [&str; 11] = [
    "$schema",
    "$id",
    "$anchor",
    "$dynamicAnchor",
    "$comment",
    "title",
    "description",
    "pattern",
    "format",
    "contentEncoding",
    "contentMediaType",
];

// `type` may be a single name or a list of names.
const STRING_ARRAY_KEYWORDS: [&str; 2] = ["type", "required"];

const NUMBER_KEYWORDS: [&str; 5] = [
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
];

const INTEGER_KEYWORDS: [&str; 8] = [
    "minLength",
    "maxLength",
    "minItems",
    "maxItems",
    "minContains",
    "maxContains",
    "minProperties",
    "maxProperties",
];

const BOOLEAN_KEYWORDS: [&str; 4] = ["uniqueItems", "readOnly", "writeOnly", "deprecated"];

static STANDARD: Lazy<KeywordCatalog> = Lazy::new(|| {
    KeywordCatalog::from_groups(&[
        (DataType::String, &STRING_KEYWORDS[..]),
        (DataType::StringArray, &STRING_ARRAY_KEYWORDS[..]),
        (DataType::Number, &NUMBER_KEYWORDS[..]),
        (DataType::Integer, &INTEGER_KEYWORDS[..]),
        (DataType::Boolean, &BOOLEAN_KEYWORDS[..]),
    ])
    .unwrap_or_else(|err| panic!("standard keyword catalog failed to initialize: {err}"))
});

/// Name-keyed registry of keyword bindings.
#[derive(Debug, Clone, Default)]
pub struct KeywordCatalog {
    keywords: HashMap<String, Keyword>,
}

impl KeywordCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft 2020-12 keywords whose values are primitives or primitive arrays.
    pub fn standard() -> &'static KeywordCatalog {
        &STANDARD
    }

    fn from_groups(groups: &[(DataType, &[&str])]) -> Result<Self> {
        let mut catalog = Self::new();
        for (data_type, names) in groups {
            for name in names.iter() {
                catalog.register(Keyword::new(*name, *data_type)?)?;
            }
        }
        Ok(catalog)
    }

    /// Register a keyword. Names are never rebound.
    pub fn register(&mut self, keyword: Keyword) -> Result<()> {
        if self.keywords.contains_key(keyword.name()) {
            return Err(KeywordError::DuplicateKeyword(keyword.name().to_string()));
        }
        debug!(keyword = keyword.name(), data_type = %keyword.data_type(), "registered keyword");
        self.keywords.insert(keyword.name().to_string(), keyword);
        Ok(())
    }

    /// Build a catalog from a JSON object mapping keyword names to data type names.
    pub fn from_json(catalog_json: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.extend_from_json(catalog_json)?;
        Ok(catalog)
    }

    /// Register every keyword defined in a JSON catalog document.
    pub fn extend_from_json(&mut self, catalog_json: &str) -> Result<()> {
        let value: Value = serde_json::from_str(catalog_json)?;
        let definitions = match &value {
            Value::Object(map) => map,
            _ => return Err(KeywordError::NotAnObject("keyword catalog")),
        };
        self.extend_from_map(definitions)
    }

    // All-or-nothing: nothing is registered unless every definition is valid.
    fn extend_from_map(&mut self, definitions: &Map<String, Value>) -> Result<()> {
        let mut keywords = Vec::with_capacity(definitions.len());
        for (name, type_name) in definitions {
            let data_type = match type_name {
                Value::String(type_name) => DataType::from_name(type_name),
                other => DataType::from_name(&other.to_string()),
            }
            .map_err(|source| KeywordError::Definition {
                keyword: name.clone(),
                source,
            })?;
            let keyword = Keyword::new(name.as_str(), data_type)?;
            if self.contains(keyword.name()) {
                return Err(KeywordError::DuplicateKeyword(name.clone()));
            }
            keywords.push(keyword);
        }

        for keyword in keywords {
            self.register(keyword)?;
        }
        Ok(())
    }

    /// Register every keyword of `other`; fails without changes if any name is taken.
    pub fn extend(&mut self, other: &KeywordCatalog) -> Result<()> {
        if let Some(name) = other.names().into_iter().find(|name| self.contains(name)) {
            return Err(KeywordError::DuplicateKeyword(name.to_string()));
        }
        for keyword in other.keywords.values() {
            self.register(keyword.clone())?;
        }
        Ok(())
    }

    /// Load a catalog file with default limits.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_with_config(path, CatalogConfig::default())
    }

    /// Load a catalog file with explicit limits.
    pub fn from_file_with_config(path: &Path, config: CatalogConfig) -> Result<Self> {
        let metadata = std::fs::symlink_metadata(path).map_err(|source| KeywordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if metadata.file_type().is_symlink() {
            return Err(KeywordError::Refused(format!(
                "catalog symlink: {}",
                path.display()
            )));
        }
        let content = read_document(path, config.max_catalog_file_size)?;

        let value: Value = serde_json::from_str(&content)?;
        let definitions = match &value {
            Value::Object(map) => map,
            _ => return Err(KeywordError::NotAnObject("keyword catalog")),
        };
        if definitions.len() > config.max_keywords {
            return Err(KeywordError::Refused(format!(
                "catalog with more than {} keywords: {}",
                config.max_keywords,
                definitions.len()
            )));
        }

        let mut catalog = Self::new();
        catalog.extend_from_map(definitions)?;
        debug!(path = %path.display(), keywords = catalog.len(), "loaded keyword catalog");
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Keyword> {
        self.keywords.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keywords.contains_key(name)
    }

    /// Data type bound to a keyword name.
    pub fn data_type_of(&self, name: &str) -> Result<DataType> {
        self.get(name)
            .map(Keyword::data_type)
            .ok_or_else(|| KeywordError::UnknownKeyword(name.to_string()))
    }

    /// Convert a raw value through the data type bound to `name`.
    pub fn convert(&self, name: &str, raw: &RawNode) -> Result<TypedValue> {
        self.get(name)
            .ok_or_else(|| KeywordError::UnknownKeyword(name.to_string()))?
            .convert(raw)
    }

    /// Registered keyword names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.keywords.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Keywords sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> + '_ {
        let mut keywords: Vec<&Keyword> = self.keywords.values().collect();
        keywords.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        keywords.into_iter()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
