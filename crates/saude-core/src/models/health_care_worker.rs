//! Health-care worker entity.

use crate::Tracked;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCareWorker {
    pub tracked: Tracked,
    pub legal_name: String,
    /// May be empty: an empty string is a provided-but-blank name,
    /// distinct from the field being absent on a write.
    pub preferred_name: String,
    /// Free-form text; not validated against a fixed vocabulary.
    pub pronouns: String,
    pub date_of_birth: NaiveDate,
    pub specialization: String,
}

impl HealthCareWorker {
    pub fn new(
        legal_name: String,
        preferred_name: String,
        pronouns: String,
        date_of_birth: NaiveDate,
        specialization: String,
    ) -> Self {
        Self {
            tracked: Tracked::new(),
            legal_name,
            preferred_name,
            pronouns,
            date_of_birth,
            specialization,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.tracked.uuid
    }
}
