use crate::api::error::{ApiError, ApiResult};

use serde::Deserialize;
use uuid::Uuid;

pub const INVALID_UUID_MESSAGE: &str = "Enter a valid UUID.";

/// Query string accepted by the appointment list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListAppointmentsQuery {
    pub profissional_uuid: Option<String>,
}

impl ListAppointmentsQuery {
    /// The worker filter, if one was supplied. A malformed value is a
    /// validation failure rather than an empty result set.
    pub fn worker_filter(&self) -> ApiResult<Option<Uuid>> {
        match &self.profissional_uuid {
            Some(raw) => raw
                .parse::<Uuid>()
                .map(Some)
                .map_err(|_| ApiError::field("profissional_uuid", INVALID_UUID_MESSAGE)),
            None => Ok(None),
        }
    }
}
