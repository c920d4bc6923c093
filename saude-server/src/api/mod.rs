pub mod appointments;
pub mod envelope;
pub mod error;
pub mod field_map;
pub mod fields;
pub mod health_care_workers;

use crate::api::error::ApiError;

use uuid::Uuid;

/// Parse a lookup path segment. Anything that is not a UUID cannot
/// match a stored record, so the miss is a plain 404.
pub(crate) fn parse_lookup_uuid(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse::<Uuid>().map_err(|_| ApiError::not_found())
}
