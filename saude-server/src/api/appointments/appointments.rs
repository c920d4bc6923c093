//! Handlers for the /appointments resource.
//!
//! Writes pre-check the worker reference and the (worker, date)
//! uniqueness rule to return field-level errors; the schema constraints
//! remain the final authority and their violations map back to the same
//! messages for writes that race past the pre-checks.

use crate::api::appointments::ListAppointmentsQuery;
use crate::api::appointments::serializer::{self, missing_worker_message};
use crate::api::envelope::ListEnvelope;
use crate::api::error::{ApiError, ApiResult};
use crate::api::parse_lookup_uuid;
use crate::state::AppState;

use saude_core::Appointment;
use saude_core::constants::UNIQUE_APPOINTMENT_DATE_HEALTH_CARE_WORKER_ERROR_MESSAGE;
use saude_db::{AppointmentRepository, HealthCareWorkerRepository};

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use log::{debug, info};
use serde_json::Value;

pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<ListAppointmentsQuery>,
) -> ApiResult<Json<ListEnvelope>> {
    let worker_filter = query.worker_filter()?;

    let repository = AppointmentRepository::new(state.pool.clone());
    let appointments = repository.find_all(worker_filter).await?;
    debug!("Listed {} appointments", appointments.len());

    let data = appointments.iter().map(serializer::render).collect();
    Ok(Json(ListEnvelope::new(data)))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let write = serializer::deserialize_new(&body).map_err(ApiError::validation)?;

    let workers = HealthCareWorkerRepository::new(state.pool.clone());
    if workers.find_by_uuid(write.health_care_worker).await?.is_none() {
        return Err(ApiError::field(
            "profissional_uuid",
            missing_worker_message(&write.health_care_worker.to_string()),
        ));
    }

    let repository = AppointmentRepository::new(state.pool.clone());
    if repository
        .exists_for_worker_and_date(write.health_care_worker, write.date, None)
        .await?
    {
        return Err(ApiError::non_field(
            UNIQUE_APPOINTMENT_DATE_HEALTH_CARE_WORKER_ERROR_MESSAGE,
        ));
    }

    let appointment = Appointment::new(write.health_care_worker, write.date, write.info);
    if !repository.create(&appointment).await? {
        // Worker deleted since the check above.
        return Err(ApiError::field(
            "profissional_uuid",
            missing_worker_message(&appointment.health_care_worker.to_string()),
        ));
    }
    info!("Created appointment {}", appointment.uuid());

    Ok((StatusCode::CREATED, Json(serializer::render(&appointment))))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
) -> ApiResult<Json<Value>> {
    let uuid = parse_lookup_uuid(&raw_uuid)?;

    let repository = AppointmentRepository::new(state.pool.clone());
    let appointment = repository
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(serializer::render(&appointment)))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    apply_update(state, &raw_uuid, &body, false).await
}

pub async fn partial_update_appointment(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    apply_update(state, &raw_uuid, &body, true).await
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
) -> ApiResult<StatusCode> {
    let uuid = parse_lookup_uuid(&raw_uuid)?;

    let repository = AppointmentRepository::new(state.pool.clone());
    if !repository.delete_by_uuid(uuid).await? {
        return Err(ApiError::not_found());
    }
    info!("Deleted appointment {}", uuid);

    Ok(StatusCode::NO_CONTENT)
}

async fn apply_update(
    state: AppState,
    raw_uuid: &str,
    body: &Value,
    partial: bool,
) -> ApiResult<Json<Value>> {
    let uuid = parse_lookup_uuid(raw_uuid)?;

    let repository = AppointmentRepository::new(state.pool.clone());
    let existing = repository
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(ApiError::not_found)?;

    let mut appointment =
        serializer::deserialize_update(body, &existing, partial).map_err(ApiError::validation)?;

    if appointment.health_care_worker != existing.health_care_worker {
        let workers = HealthCareWorkerRepository::new(state.pool.clone());
        if workers
            .find_by_uuid(appointment.health_care_worker)
            .await?
            .is_none()
        {
            return Err(ApiError::field(
                "profissional_uuid",
                missing_worker_message(&appointment.health_care_worker.to_string()),
            ));
        }
    }

    // The uniqueness rule covers the merged result, not just the
    // fields this request changed.
    if repository
        .exists_for_worker_and_date(
            appointment.health_care_worker,
            appointment.date,
            Some(uuid),
        )
        .await?
    {
        return Err(ApiError::non_field(
            UNIQUE_APPOINTMENT_DATE_HEALTH_CARE_WORKER_ERROR_MESSAGE,
        ));
    }

    appointment.tracked.touch();
    if !repository.update(&appointment).await? {
        return Err(ApiError::not_found());
    }
    info!("Updated appointment {}", uuid);

    Ok(Json(serializer::render(&appointment)))
}
