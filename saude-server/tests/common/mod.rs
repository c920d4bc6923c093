#![allow(dead_code)]

//! Test infrastructure for saude-server API tests

use saude_core::{Appointment, HealthCareWorker};
use saude_db::{AppointmentRepository, HealthCareWorkerRepository};
use saude_server::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::{Duration, NaiveDate, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite.
///
/// A single connection keeps every query on the same in-memory
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/saude-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a health-care worker fixture
pub async fn create_test_worker(pool: &SqlitePool, legal_name: &str) -> HealthCareWorker {
    let worker = HealthCareWorker::new(
        legal_name.to_string(),
        String::new(),
        "she/her".to_string(),
        NaiveDate::from_ymd_opt(1885, 3, 5).expect("valid date"),
        "pathology".to_string(),
    );

    HealthCareWorkerRepository::new(pool.clone())
        .create(&worker)
        .await
        .expect("Failed to create test worker");

    worker
}

/// Insert an appointment fixture `days_ahead` days from today
pub async fn create_test_appointment(
    pool: &SqlitePool,
    worker_uuid: Uuid,
    days_ahead: i64,
) -> Appointment {
    let appointment = Appointment::new(
        worker_uuid,
        days_from_today(days_ahead),
        "Checkup".to_string(),
    );

    let created = AppointmentRepository::new(pool.clone())
        .create(&appointment)
        .await
        .expect("Failed to create test appointment");
    assert!(created, "test appointment references a missing worker");

    appointment
}

pub fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

pub fn tomorrow() -> NaiveDate {
    days_from_today(1)
}

/// Send a bodyless request through the router
pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    app.oneshot(request).await.expect("Request failed")
}

/// Send a JSON request through the router
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    app.oneshot(request).await.expect("Request failed")
}

/// Collect a response body as JSON
pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}
