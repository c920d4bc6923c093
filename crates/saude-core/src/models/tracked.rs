//! Identity and timestamp fields shared by every stored entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Embedded by each concrete entity (composition, not inheritance):
/// a randomly generated external identifier plus system-managed
/// timestamps. The relational primary key stays inside the storage
/// layer and is never part of an entity value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracked {
    /// External identifier, immutable after creation. All external
    /// interactions address entities by this value.
    pub uuid: Uuid,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Tracked {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            uuid: Uuid::new_v4(),
            created: now,
            modified: now,
        }
    }

    /// Bump `modified`. Called before persisting any mutation, so
    /// `modified >= created` always holds.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new()
    }
}
