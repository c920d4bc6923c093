//! Shared fixture data for repository tests.

use saude_core::{Appointment, HealthCareWorker};

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

/// Sample vocabulary only; `pronouns` is free-form at the entity level.
pub const PRONOUNS: &[&str] = &[
    "He/him", "She/her", "They/them", "Xe/xem", "Ze/hir", "Ey/em", "Hir/hir", "Fae/faer", "Hu/hu",
];

pub const SPECIALIZATIONS: &[&str] = &[
    "Audiologist",
    "Dentist",
    "Nurse",
    "Paramedic",
    "Pathologist",
    "Pharmacist",
    "Physician",
    "Surgeon",
];

pub fn worker(n: usize) -> HealthCareWorker {
    HealthCareWorker::new(
        format!("Worker {n}"),
        String::new(),
        PRONOUNS[n % PRONOUNS.len()].to_string(),
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap() + Duration::days(n as i64),
        SPECIALIZATIONS[n % SPECIALIZATIONS.len()].to_string(),
    )
}

/// An appointment `days_ahead` days from today (1 = tomorrow).
pub fn appointment(health_care_worker: Uuid, days_ahead: i64) -> Appointment {
    Appointment::new(
        health_care_worker,
        Utc::now().date_naive() + Duration::days(days_ahead),
        format!("Checkup in {days_ahead} day(s)"),
    )
}
