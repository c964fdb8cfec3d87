//! Typed loading of a schema's top-level keywords.
//!
//! For each member of the schema object the loader looks up the keyword's
//! bound data type in a [`KeywordCatalog`] and converts the member's value
//! through it. Subschemas are not walked.

use std::collections::BTreeMap;

use schematype_value::{RawNode, TypedValue};
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::KeywordCatalog;
use crate::config::LoaderConfig;
use crate::error::{KeywordError, Result};

/// Typed keyword values read from one schema object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSchema {
    values: BTreeMap<String, TypedValue>,
    skipped: Vec<String>,
}

impl LoadedSchema {
    pub fn get(&self, keyword: &str) -> Option<&TypedValue> {
        self.values.get(keyword)
    }

    /// Keyword values sorted by keyword name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Members that were not in the catalog.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

/// Converts schema members through the keyword catalog.
pub struct SchemaLoader<'a> {
    catalog: &'a KeywordCatalog,
    config: LoaderConfig,
}

impl<'a> SchemaLoader<'a> {
    pub fn new(catalog: &'a KeywordCatalog) -> Self {
        Self::with_config(catalog, LoaderConfig::default())
    }

    pub fn with_config(catalog: &'a KeywordCatalog, config: LoaderConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parse schema text and load its keywords.
    pub fn load_str(&self, schema_json: &str) -> Result<LoadedSchema> {
        let schema: Value = serde_json::from_str(schema_json)?;
        self.load_value(&schema)
    }

    /// Load the keywords of a parsed schema object.
    pub fn load_value(&self, schema: &Value) -> Result<LoadedSchema> {
        let members = match schema {
            Value::Object(map) => map,
            _ => return Err(KeywordError::NotAnObject("schema")),
        };

        let mut loaded = LoadedSchema::default();
        let mut errors = Vec::new();

        for (name, value) in members {
            let result = match self.catalog.get(name) {
                Some(keyword) => RawNode::from_json(value)
                    .map_err(|source| KeywordError::Value {
                        keyword: name.clone(),
                        source,
                    })
                    .and_then(|raw| keyword.convert(&raw)),
                None if self.config.fail_on_unknown_keyword => {
                    Err(KeywordError::UnknownKeyword(name.clone()))
                }
                None => {
                    debug!(keyword = %name, "skipping keyword outside catalog");
                    loaded.skipped.push(name.clone());
                    continue;
                }
            };

            match result {
                Ok(typed) => {
                    loaded.values.insert(name.clone(), typed);
                }
                Err(err) if self.config.collect_errors => {
                    warn!(keyword = %name, error = %err, "keyword rejected");
                    if errors.len() < self.config.max_reported_errors {
                        errors.push(err);
                    }
                }
                Err(err) => return Err(err),
            }
        }

        if !errors.is_empty() {
            return Err(KeywordError::Rejected { errors });
        }

        debug!(
            keywords = loaded.len(),
            skipped = loaded.skipped.len(),
            "schema keywords loaded"
        );
        Ok(loaded)
    }
}
