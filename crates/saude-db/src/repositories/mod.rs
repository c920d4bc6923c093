pub mod appointment_repository;
pub mod health_care_worker_repository;

use crate::{DbError, Result};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

// Column decoding helpers shared by the repositories. Everything is
// stored as TEXT; a value that fails to parse means a corrupted row.

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        message: format!("invalid UUID in {column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_date(value: &str, column: &str) -> Result<NaiveDate> {
    value.parse::<NaiveDate>().map_err(|e| DbError::Decode {
        message: format!("invalid date in {column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(value: &str, column: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::Decode {
            message: format!("invalid timestamp in {column}: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
