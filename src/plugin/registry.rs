//! Class registry standing in for runtime class scanning
//!
//! Plugin modules register one [`ClassEntry`] per class at initialization.
//! Entries record what the classifier needs: supertypes, visibility,
//! abstractness, the zero-argument factory and nested classes.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::debug;

use connect_docs_plugin::{PluginError, PluginFactory, PluginInstance};

use crate::utils::simple_name;

/// Class visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// One registered class
#[derive(Clone)]
pub struct ClassEntry {
    name: String,
    supertypes: Vec<String>,
    visibility: Visibility,
    is_abstract: bool,
    factory: Option<PluginFactory>,
    nested: Vec<String>,
}

impl ClassEntry {
    /// Public concrete class without a factory
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
            visibility: Visibility::Public,
            is_abstract: false,
            factory: None,
            nested: Vec::new(),
        }
    }

    /// Add a direct supertype, either a capability marker or a class name
    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Public zero-argument construction path
    pub fn factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<PluginInstance, PluginError> + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Declare a nested class by its qualified name
    pub fn nested(mut self, name: impl Into<String>) -> Self {
        self.nested.push(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    pub fn supertypes(&self) -> &[String] {
        &self.supertypes
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn factory_fn(&self) -> Option<&PluginFactory> {
        self.factory.as_ref()
    }

    pub fn nested_classes(&self) -> &[String] {
        &self.nested
    }

    /// Whether the qualified name lies in `root`'s namespace
    pub fn in_namespace(&self, root: &str) -> bool {
        in_namespace(&self.name, root)
    }

    /// Construct an instance, if the class has a factory
    pub fn instantiate(&self) -> Option<Result<PluginInstance, PluginError>> {
        self.factory.as_ref().map(|factory| factory())
    }
}

impl std::fmt::Debug for ClassEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassEntry")
            .field("name", &self.name)
            .field("supertypes", &self.supertypes)
            .field("visibility", &self.visibility)
            .field("is_abstract", &self.is_abstract)
            .field("has_factory", &self.factory.is_some())
            .field("nested", &self.nested)
            .finish()
    }
}

/// Segment-aware namespace test: `root` itself or anything under `root.`
pub fn in_namespace(name: &str, root: &str) -> bool {
    match name.strip_prefix(root) {
        Some("") => true,
        Some(rest) => rest.starts_with('.') || rest.starts_with('$'),
        None => false,
    }
}

static GLOBAL_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| {
    let registry = Registry::new();
    crate::builtin::register(&registry);
    Arc::new(registry)
});

/// Concurrent map of registered classes
#[derive(Debug, Default)]
pub struct Registry {
    classes: DashMap<String, Arc<ClassEntry>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, populated with the built-in plugins on first use
    pub fn global() -> Arc<Registry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Register a class, replacing any entry with the same name
    pub fn register(&self, entry: ClassEntry) {
        debug!("Registering class {}", entry.name());
        self.classes.insert(entry.name.clone(), Arc::new(entry));
    }

    pub fn get(&self, name: &str) -> Option<Arc<ClassEntry>> {
        self.classes.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Every entry, sorted by qualified name
    pub fn entries(&self) -> Vec<Arc<ClassEntry>> {
        let mut entries: Vec<Arc<ClassEntry>> = self
            .classes
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Whether any registered class lies in `root`'s namespace
    pub fn has_namespace(&self, root: &str) -> bool {
        self.classes.iter().any(|entry| entry.in_namespace(root))
    }

    /// Whether `name` descends from `supertype`, directly or through
    /// registered intermediate classes
    pub fn descends_from(&self, name: &str, supertype: &str) -> bool {
        let mut seen: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::from([name.to_string()]);

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.clone()) {
                continue;
            }
            let Some(entry) = self.get(&current) else {
                continue;
            };
            for parent in &entry.supertypes {
                if parent == supertype {
                    return true;
                }
                queue.push_back(parent.clone());
            }
        }
        false
    }

    /// Nested class of `parent` whose simple name is `simple`
    pub fn nested_class(&self, parent: &str, simple: &str) -> Option<Arc<ClassEntry>> {
        let parent = self.get(parent)?;
        parent
            .nested
            .iter()
            .filter_map(|name| self.get(name))
            .find(|entry| entry.simple_name() == simple)
    }
}
