use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub const INDEX_DOCUMENT: &str = "index.html";

/// The front-end bundle served from disk
pub struct StaticSite {
    root: PathBuf,
}

impl StaticSite {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the entry document verbatim. Read on every call so a rebuilt
    /// bundle is picked up without a restart.
    pub async fn index_document(&self) -> AppResult<String> {
        let path = self.root.join(INDEX_DOCUMENT);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            AppError::Internal(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}
