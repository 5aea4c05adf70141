//! In-memory slip store for tests and ephemeral sessions.

use parking_lot::RwLock;
use uuid::Uuid;

use super::{SlipStore, StoredSlip};
use crate::error::Result;

/// RwLock-backed slip store. Cheap to clone the contents out, safe to share
/// across threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slips: RwLock<Vec<StoredSlip>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlipStore for MemoryStore {
    fn save(&self, slip: StoredSlip) -> Result<()> {
        self.slips.write().push(slip);
        Ok(())
    }

    fn list(&self) -> Result<Vec<StoredSlip>> {
        Ok(self.slips.read().clone())
    }

    fn get(&self, id: Uuid) -> Result<Option<StoredSlip>> {
        Ok(self.slips.read().iter().find(|s| s.id == id).cloned())
    }
}
