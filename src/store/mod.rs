//! Slip persistence: a repository port plus adapters.
//!
//! The math core never touches persistence. Callers hand finished slips to
//! something implementing [`SlipStore`]; the two adapters here cover
//! ephemeral use ([`MemoryStore`]) and a small on-disk JSON document
//! ([`JsonFileStore`]).

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Slip;
use crate::error::Result;

/// A saved slip with its identity and capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSlip {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub slip: Slip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bankroll: Option<f64>,
}

impl StoredSlip {
    /// Wrap a slip with a fresh ID and the current time.
    #[must_use]
    pub fn new(slip: Slip, bankroll: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            slip,
            bankroll,
        }
    }
}

/// Repository for analyzed slips.
pub trait SlipStore: Send + Sync {
    /// Persist a slip.
    fn save(&self, slip: StoredSlip) -> Result<()>;

    /// All saved slips, oldest first.
    fn list(&self) -> Result<Vec<StoredSlip>>;

    /// Look up a slip by ID.
    fn get(&self, id: Uuid) -> Result<Option<StoredSlip>>;
}
