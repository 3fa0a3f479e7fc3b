//! Output sinks for rendered documents

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// Destination for rendered documents
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Write a document, creating parent directories as needed
    async fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Writes documents to the filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

#[async_trait]
impl OutputSink for FsSink {
    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
        }
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Keeps documents in memory, mostly for tests and dry runs
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.documents.lock().await.get(path.as_ref()).cloned()
    }

    pub async fn paths(&self) -> Vec<PathBuf> {
        self.documents.lock().await.keys().cloned().collect()
    }

    pub async fn into_documents(self) -> BTreeMap<PathBuf, String> {
        self.documents.into_inner()
    }
}

#[async_trait]
impl OutputSink for MemorySink {
    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.documents
            .lock()
            .await
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
