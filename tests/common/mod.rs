// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request};
use nutrack::config::Config;
use nutrack::db::Db;
use nutrack::routes::create_router;
use nutrack::services::OpenFoodFactsClient;
use nutrack::AppState;
use std::sync::Arc;

/// Create a test app backed by a fresh in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = Db::in_memory().await.expect("in-memory db");
    db.migrate().await.expect("migrations");
    let nutrition = OpenFoodFactsClient::new(config.off_base_url.clone());

    let state = Arc::new(AppState {
        config,
        db,
        nutrition,
    });

    (create_router(state.clone()), state)
}

/// Create a session JWT accepted by the test app.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    nutrack::middleware::auth::create_jwt(user_id, signing_key).expect("jwt")
}

/// Authenticated GET request.
#[allow(dead_code)]
pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Authenticated POST request with a JSON body.
#[allow(dead_code)]
pub fn authed_post_json(uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Authenticated DELETE request.
#[allow(dead_code)]
pub fn authed_delete(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json body")
}
