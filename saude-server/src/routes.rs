use crate::api::{appointments, health_care_workers};
use crate::health;
use crate::state::AppState;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/health-care-workers",
            get(health_care_workers::list_health_care_workers)
                .post(health_care_workers::create_health_care_worker),
        )
        .route(
            "/health-care-workers/{uuid}",
            get(health_care_workers::get_health_care_worker)
                .put(health_care_workers::update_health_care_worker)
                .patch(health_care_workers::partial_update_health_care_worker)
                .delete(health_care_workers::delete_health_care_worker),
        )
        .route(
            "/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/appointments/{uuid}",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .patch(appointments::partial_update_appointment)
                .delete(appointments::delete_appointment),
        )
        .layer(cors)
        .with_state(state)
}
