//! Where the page registry comes from.
//!
//! A source is read once per [`SeoRegistry`](super::SeoRegistry) lifetime;
//! see [`SeoRegistry::load_from`](super::SeoRegistry::load_from).

use super::types::PageMetadata;
use anyhow::{Context, Result};
use std::{future::Future, path::PathBuf};

/// One-shot provider of page records.
pub trait PageSource {
    fn load(&self) -> impl Future<Output = Result<Vec<PageMetadata>>> + Send;
}

/// JSON array of page records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<PageMetadata>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read page registry {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid page registry {}", self.path.display()))
    }
}

/// Records already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<PageMetadata>);

impl PageSource for StaticSource {
    async fn load(&self) -> Result<Vec<PageMetadata>> {
        Ok(self.0.clone())
    }
}
