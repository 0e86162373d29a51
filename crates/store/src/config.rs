//! Configuration for the storage layer.

use crate::{ElectionStore, MemoryStore, RedbStore, StoreError};
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for opening an election store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Path of the database file.
    ///
    /// `None` keeps the election state in memory; state then does not
    /// survive the process.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Config for an in-memory store.
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    /// Config for a durable store at the given file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Open the configured backend.
    pub fn open(&self) -> Result<Arc<dyn ElectionStore>, StoreError> {
        match &self.path {
            Some(path) => Ok(Arc::new(RedbStore::open(path)?)),
            None => Ok(Arc::new(MemoryStore::new())),
        }
    }
}
