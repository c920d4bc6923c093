use saude_core::constants::APPOINTMENT_DATE_CONSTRAINT_NAME;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A uniqueness constraint rejected the write at commit time.
    #[error("Unique constraint violated: {constraint} {location}")]
    UniqueViolation {
        constraint: String,
        location: ErrorLocation,
    },

    /// A check constraint or constraint trigger rejected the write at
    /// commit time.
    #[error("Check constraint violated: {constraint} {location}")]
    CheckViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = source {
            let message = db.message().to_string();
            match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return Self::UniqueViolation {
                        constraint: message,
                        location: ErrorLocation::from(Location::caller()),
                    };
                }
                sqlx::error::ErrorKind::CheckViolation => {
                    return Self::CheckViolation {
                        constraint: message,
                        location: ErrorLocation::from(Location::caller()),
                    };
                }
                _ => {
                    // RAISE(ABORT, ...) from a constraint trigger comes
                    // back as a generic constraint error; classify it by
                    // the message the trigger raises.
                    if message.contains(APPOINTMENT_DATE_CONSTRAINT_NAME) {
                        return Self::CheckViolation {
                            constraint: message,
                            location: ErrorLocation::from(Location::caller()),
                        };
                    }
                }
            }
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
