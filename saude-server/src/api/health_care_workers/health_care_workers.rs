//! Handlers for the /health-care-workers resource.

use crate::api::envelope::ListEnvelope;
use crate::api::error::{ApiError, ApiResult};
use crate::api::health_care_workers::serializer;
use crate::api::parse_lookup_uuid;
use crate::state::AppState;

use saude_db::HealthCareWorkerRepository;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use log::{debug, info};
use serde_json::Value;

pub async fn list_health_care_workers(State(state): State<AppState>) -> ApiResult<Json<ListEnvelope>> {
    let repository = HealthCareWorkerRepository::new(state.pool.clone());

    let workers = repository.find_all().await?;
    debug!("Listed {} health-care workers", workers.len());

    let data = workers.iter().map(serializer::render).collect();
    Ok(Json(ListEnvelope::new(data)))
}

pub async fn create_health_care_worker(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let worker = serializer::deserialize_new(&body).map_err(ApiError::validation)?;

    let repository = HealthCareWorkerRepository::new(state.pool.clone());
    repository.create(&worker).await?;
    info!("Created health-care worker {}", worker.uuid());

    Ok((StatusCode::CREATED, Json(serializer::render(&worker))))
}

pub async fn get_health_care_worker(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
) -> ApiResult<Json<Value>> {
    let uuid = parse_lookup_uuid(&raw_uuid)?;

    let repository = HealthCareWorkerRepository::new(state.pool.clone());
    let worker = repository
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(serializer::render(&worker)))
}

pub async fn update_health_care_worker(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    apply_update(state, &raw_uuid, &body, false).await
}

pub async fn partial_update_health_care_worker(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    apply_update(state, &raw_uuid, &body, true).await
}

pub async fn delete_health_care_worker(
    State(state): State<AppState>,
    Path(raw_uuid): Path<String>,
) -> ApiResult<StatusCode> {
    let uuid = parse_lookup_uuid(&raw_uuid)?;

    let repository = HealthCareWorkerRepository::new(state.pool.clone());
    if !repository.delete_by_uuid(uuid).await? {
        return Err(ApiError::not_found());
    }
    info!("Deleted health-care worker {}", uuid);

    Ok(StatusCode::NO_CONTENT)
}

async fn apply_update(
    state: AppState,
    raw_uuid: &str,
    body: &Value,
    partial: bool,
) -> ApiResult<Json<Value>> {
    let uuid = parse_lookup_uuid(raw_uuid)?;

    let repository = HealthCareWorkerRepository::new(state.pool.clone());
    let existing = repository
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(ApiError::not_found)?;

    let mut worker =
        serializer::deserialize_update(body, &existing, partial).map_err(ApiError::validation)?;
    worker.tracked.touch();

    if !repository.update(&worker).await? {
        // Deleted between the read above and this write.
        return Err(ApiError::not_found());
    }
    info!("Updated health-care worker {}", uuid);

    Ok(Json(serializer::render(&worker)))
}
