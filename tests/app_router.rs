mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use student_registry::routes::app_router;
use student_registry::state::AppState;
use tower::ServiceExt;

async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_trailing_slash_list() {
    let state = common::create_memory_state();

    let (status, _) = send(
        &state,
        Method::POST,
        "/students/",
        Some(json!({ "name": "Alice", "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&state, Method::GET, "/students/", None).await;

    assert_eq!(status, StatusCode::OK);
    let items: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(items, json!([{ "id": 1, "name": "Alice", "email": "a@x.com" }]));
}

#[tokio::test]
async fn test_trailing_slash_delete() {
    let state = common::create_memory_state();

    send(
        &state,
        Method::POST,
        "/students",
        Some(json!({ "name": "Alice", "email": "a@x.com" })),
    )
    .await;

    let (status, body) = send(&state, Method::DELETE, "/students/1/", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&state, Method::GET, "/students/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_served() {
    let state = common::create_memory_state();

    let (status, body) = send(&state, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
