//! Process-wide plugin cache keyed by scan root

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

use super::classify::ScanRoot;
use super::descriptor::Plugin;
use super::loader::PluginLoader;
use crate::DocsError;

static GLOBAL_CACHE: Lazy<Arc<PluginCache>> = Lazy::new(|| Arc::new(PluginCache::new()));

/// Loaded plugins, computed at most once per scan root
#[derive(Debug, Default)]
pub struct PluginCache {
    plugins: DashMap<ScanRoot, Arc<Plugin>>,
}

impl PluginCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> Arc<PluginCache> {
        Arc::clone(&GLOBAL_CACHE)
    }

    /// Cached plugin for `root`, loading it on first request.
    ///
    /// The entry stays locked while loading. Failures are returned and not
    /// cached.
    pub fn get_or_load(
        &self,
        root: &ScanRoot,
        loader: &PluginLoader<'_>,
    ) -> Result<Arc<Plugin>, DocsError> {
        if let Some(plugin) = self.plugins.get(root) {
            debug!("Plugin cache hit for {}", root);
            return Ok(Arc::clone(plugin.value()));
        }

        let plugin = self
            .plugins
            .entry(root.clone())
            .or_try_insert_with(|| loader.load(root).map(Arc::new))?;
        Ok(Arc::clone(plugin.value()))
    }

    pub fn get(&self, root: &ScanRoot) -> Option<Arc<Plugin>> {
        self.plugins.get(root).map(|plugin| Arc::clone(plugin.value()))
    }

    pub fn contains(&self, root: &ScanRoot) -> bool {
        self.plugins.contains_key(root)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
