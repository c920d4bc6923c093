use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use log::error;
use saude_core::constants::{
    APPOINTMENT_DATE_CONSTRAINT_NAME, APPOINTMENT_DATE_ERROR_MESSAGE,
    UNIQUE_APPOINTMENT_DATE_HEALTH_CARE_WORKER_ERROR_MESSAGE,
};
use saude_db::DbError;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

/// Bucket for errors that are not tied to a single input field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Validation failures keyed by external field name. Each field carries
/// the full list of messages collected for it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|v| v.as_slice())
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found [at {location}]")]
    NotFound { location: ErrorLocation },

    #[error("Validation failed: {errors} [at {location}]")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} [at {location}]")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found() -> Self {
        Self::NotFound {
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation {
            errors,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }

    #[track_caller]
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::validation(errors)
    }

    #[track_caller]
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_non_field(message);
        Self::validation(errors)
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Not found." })),
            )
                .into_response(),
            Self::Validation { errors, .. } => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Self::Internal { message, location } => {
                error!("Internal error: {} [at {}]", message, location);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "A server error occurred." })),
                )
                    .into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match &err {
            DbError::UniqueViolation { constraint, .. }
                if constraint.contains("appointments.health_care_worker_id") =>
            {
                Self::non_field(UNIQUE_APPOINTMENT_DATE_HEALTH_CARE_WORKER_ERROR_MESSAGE)
            }
            DbError::CheckViolation { constraint, .. }
                if constraint.contains(APPOINTMENT_DATE_CONSTRAINT_NAME) =>
            {
                Self::field("data", APPOINTMENT_DATE_ERROR_MESSAGE)
            }
            _ => Self::internal(format!("Database operation failed: {}", err)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
