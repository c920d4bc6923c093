//! Integration tests for health-care worker API handlers
mod common;

use crate::common::{create_test_app_state, create_test_worker, response_json, send, send_json};

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use saude_server::routes::build_router;

#[tokio::test]
async fn test_list_workers_empty() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send(app, "GET", "/health-care-workers").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_list_workers_returns_all_in_insertion_order() {
    let state = create_test_app_state().await;
    create_test_worker(&state.pool, "Louise Pearce").await;
    create_test_worker(&state.pool, "Virginia Apgar").await;

    let app = build_router(state.clone());
    let response = send(app, "GET", "/health-care-workers").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let workers = body["data"].as_array().unwrap();
    assert_eq!(workers.len(), 2);
    assert_eq!(workers[0]["nome_legal"], "Louise Pearce");
    assert_eq!(workers[1]["nome_legal"], "Virginia Apgar");
}

#[tokio::test]
async fn test_create_worker() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send_json(
        app,
        "POST",
        "/health-care-workers",
        json!({
            "nome_legal": "Louise Pearce",
            "nome_social": "",
            "pronomes": "she/her",
            "data_de_nascimento": "1885-03-05",
            "especializacao": "pathology",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["nome_legal"], "Louise Pearce");
    assert_eq!(body["nome_social"], "");
    assert_eq!(body["pronomes"], "she/her");
    assert_eq!(body["data_de_nascimento"], "1885-03-05");
    assert_eq!(body["especializacao"], "pathology");

    let uuid: Uuid = body["uuid"].as_str().unwrap().parse().unwrap();

    // The created worker is retrievable under its uuid.
    let app = build_router(state.clone());
    let response = send(app, "GET", &format!("/health-care-workers/{}", uuid)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, body);
}

#[tokio::test]
async fn test_create_worker_missing_field() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send_json(
        app,
        "POST",
        "/health-care-workers",
        json!({
            "nome_social": "",
            "pronomes": "she/her",
            "data_de_nascimento": "1885-03-05",
            "especializacao": "pathology",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body, json!({ "nome_legal": ["This field is required."] }));
}

#[tokio::test]
async fn test_create_worker_bad_date() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send_json(
        app,
        "POST",
        "/health-care-workers",
        json!({
            "nome_legal": "Louise Pearce",
            "nome_social": "",
            "pronomes": "she/her",
            "data_de_nascimento": "05/03/1885",
            "especializacao": "pathology",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body,
        json!({
            "data_de_nascimento":
                ["Date has wrong format. Use one of these formats instead: YYYY-MM-DD."]
        })
    );
}

#[tokio::test]
async fn test_create_worker_ignores_unknown_and_read_only_fields() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let requested_uuid = Uuid::new_v4();
    let response = send_json(
        app,
        "POST",
        "/health-care-workers",
        json!({
            "uuid": requested_uuid.to_string(),
            "id": 42,
            "favourite_colour": "green",
            "nome_legal": "Louise Pearce",
            "nome_social": "",
            "pronomes": "she/her",
            "data_de_nascimento": "1885-03-05",
            "especializacao": "pathology",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_ne!(body["uuid"], requested_uuid.to_string());
    assert!(body.get("id").is_none());
    assert!(body.get("favourite_colour").is_none());
}

#[tokio::test]
async fn test_get_worker_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send(
        app,
        "GET",
        &format!("/health-care-workers/{}", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_json(response).await,
        json!({ "detail": "Not found." })
    );
}

#[tokio::test]
async fn test_get_worker_malformed_uuid_is_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send(app, "GET", "/health-care-workers/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_json(response).await,
        json!({ "detail": "Not found." })
    );
}

#[tokio::test]
async fn test_update_worker() {
    let state = create_test_app_state().await;
    let worker = create_test_worker(&state.pool, "Louise Pearce").await;

    let app = build_router(state.clone());
    let response = send_json(
        app,
        "PUT",
        &format!("/health-care-workers/{}", worker.uuid()),
        json!({
            "nome_legal": "Louise Pearce",
            "nome_social": "Lou",
            "pronomes": "she/her",
            "data_de_nascimento": "1885-03-05",
            "especializacao": "bacteriology",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["uuid"], worker.uuid().to_string());
    assert_eq!(body["nome_social"], "Lou");
    assert_eq!(body["especializacao"], "bacteriology");
}

#[tokio::test]
async fn test_update_worker_requires_every_field() {
    let state = create_test_app_state().await;
    let worker = create_test_worker(&state.pool, "Louise Pearce").await;

    let app = build_router(state.clone());
    let response = send_json(
        app,
        "PUT",
        &format!("/health-care-workers/{}", worker.uuid()),
        json!({ "especializacao": "bacteriology" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["nome_legal"], json!(["This field is required."]));
    assert_eq!(body["pronomes"], json!(["This field is required."]));
    assert!(body.get("especializacao").is_none());
}

#[tokio::test]
async fn test_partial_update_worker_keeps_other_fields() {
    let state = create_test_app_state().await;
    let worker = create_test_worker(&state.pool, "Louise Pearce").await;

    let app = build_router(state.clone());
    let response = send_json(
        app,
        "PATCH",
        &format!("/health-care-workers/{}", worker.uuid()),
        json!({ "especializacao": "bacteriology" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["especializacao"], "bacteriology");
    assert_eq!(body["nome_legal"], "Louise Pearce");
    assert_eq!(body["pronomes"], "she/her");
    assert_eq!(body["data_de_nascimento"], "1885-03-05");
}

#[tokio::test]
async fn test_update_worker_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send_json(
        app,
        "PATCH",
        &format!("/health-care-workers/{}", Uuid::new_v4()),
        json!({ "especializacao": "bacteriology" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_json(response).await,
        json!({ "detail": "Not found." })
    );
}

#[tokio::test]
async fn test_delete_worker() {
    let state = create_test_app_state().await;
    let worker = create_test_worker(&state.pool, "Louise Pearce").await;

    let app = build_router(state.clone());
    let response = send(
        app,
        "DELETE",
        &format!("/health-care-workers/{}", worker.uuid()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_router(state.clone());
    let response = send(
        app,
        "GET",
        &format!("/health-care-workers/{}", worker.uuid()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_worker_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send(
        app,
        "DELETE",
        &format!("/health-care-workers/{}", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
