//! JSON-document slip store.
//!
//! Persists the whole slip list as one pretty-printed JSON file, rewriting
//! the document on every save. Suited to the tens-of-slips scale this tool
//! works at; anything bigger belongs in a real database.

use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::{SlipStore, StoredSlip};
use crate::error::Result;

/// Slip store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> Result<Vec<StoredSlip>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, slips: &[StoredSlip]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(slips)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SlipStore for JsonFileStore {
    fn save(&self, slip: StoredSlip) -> Result<()> {
        let mut slips = self.load_all()?;
        slips.push(slip);
        self.write_all(&slips)
    }

    fn list(&self) -> Result<Vec<StoredSlip>> {
        self.load_all()
    }

    fn get(&self, id: Uuid) -> Result<Option<StoredSlip>> {
        Ok(self.load_all()?.into_iter().find(|s| s.id == id))
    }
}
