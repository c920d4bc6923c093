//! Appointment entity.

use crate::Tracked;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled appointment with one health-care worker.
///
/// The reference is non-owning: the worker's lifetime bounds the
/// appointment's (deleting a worker cascades to its appointments).
/// A worker can have at most one appointment per date, and the date
/// must lie strictly in the future at write time; both rules are
/// enforced by the storage schema in addition to request validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub tracked: Tracked,
    /// External identifier of the referenced worker. The internal
    /// foreign key is resolved inside the storage layer.
    pub health_care_worker: Uuid,
    pub date: NaiveDate,
    pub info: String,
}

impl Appointment {
    pub fn new(health_care_worker: Uuid, date: NaiveDate, info: String) -> Self {
        Self {
            tracked: Tracked::new(),
            health_care_worker,
            date,
            info,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.tracked.uuid
    }
}
