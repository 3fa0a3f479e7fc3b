//! Record schemas documented alongside the plugins

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use connect_docs_generator::SchemaView;
use connect_docs_plugin::Schema;

use crate::DocsError;

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    Many(Vec<Schema>),
    One(Schema),
}

/// Distinct named schemas, keyed by their page's file stem
#[derive(Debug, Default)]
pub struct SchemaCollector {
    schemas: BTreeMap<String, SchemaView>,
}

impl SchemaCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema and every named schema nested in it
    pub fn add(&mut self, schema: &Schema) {
        for nested in schema.all_schemas() {
            if nested.name.as_deref().map_or(true, str::is_empty) {
                continue;
            }
            let view = SchemaView::build(nested);
            self.schemas.entry(view.file_stem()).or_insert_with(|| {
                debug!("Collected schema {}", view.file_stem());
                view
            });
        }
    }

    /// Load a YAML or JSON file holding one schema or a list of them
    pub fn load_file(&mut self, path: &Path) -> Result<(), DocsError> {
        let content = std::fs::read_to_string(path)?;
        let parsed: SchemaFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DocsError::Config(format!("{}: {}", path.display(), e)))?,
            _ => serde_yaml::from_str(&content)
                .map_err(|e| DocsError::Config(format!("{}: {}", path.display(), e)))?,
        };

        match parsed {
            SchemaFile::Many(schemas) => schemas.iter().for_each(|s| self.add(s)),
            SchemaFile::One(schema) => self.add(&schema),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn into_views(self) -> Vec<SchemaView> {
        self.schemas.into_values().collect()
    }
}
