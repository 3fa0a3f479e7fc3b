//! Capability-based class classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use connect_docs_plugin::PluginKind;

use super::registry::{ClassEntry, Registry};
use crate::DocsError;

/// Namespace bounding discovery, e.g. `connect_docs.builtin`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanRoot(String);

impl ScanRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScanRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScanRoot {
    fn from(root: &str) -> Self {
        Self::new(root)
    }
}

/// Finds the concrete, publicly constructible implementations of a
/// capability inside a scan root
pub struct ClassClassifier<'a> {
    registry: &'a Registry,
}

impl<'a> ClassClassifier<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Classes under `root` descending from `capability`, sorted by name.
    ///
    /// Abstract classes, non-public classes and classes without a zero
    /// argument factory are skipped even when they implement the capability.
    pub fn classify(
        &self,
        root: &ScanRoot,
        capability: &str,
    ) -> Result<Vec<Arc<ClassEntry>>, DocsError> {
        if root.as_str().trim().is_empty() {
            return Err(DocsError::Discovery {
                root: root.to_string(),
                reason: "scan root is empty".to_string(),
            });
        }
        if !self.registry.has_namespace(root.as_str()) {
            return Err(DocsError::Discovery {
                root: root.to_string(),
                reason: "no registered classes in this namespace".to_string(),
            });
        }

        let classes: Vec<Arc<ClassEntry>> = self
            .registry
            .entries()
            .into_iter()
            .filter(|entry| entry.in_namespace(root.as_str()))
            .filter(|entry| self.registry.descends_from(entry.name(), capability))
            .filter(|entry| {
                let eligible =
                    entry.is_public() && !entry.is_abstract() && entry.factory_fn().is_some();
                if !eligible {
                    debug!("Skipping {} for {}", entry.name(), capability);
                }
                eligible
            })
            .collect();

        debug!(
            "Classified {} classes for {} under {}",
            classes.len(),
            capability,
            root
        );
        Ok(classes)
    }

    /// Classes of one plugin kind
    pub fn classify_kind(
        &self,
        root: &ScanRoot,
        kind: PluginKind,
    ) -> Result<Vec<Arc<ClassEntry>>, DocsError> {
        self.classify(root, kind.marker())
    }
}
