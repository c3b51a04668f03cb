// SPDX-License-Identifier: MIT

//! Water intake logging and daily totals.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_log_water_requires_positive_amount() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    for body in [json!({}), json!({ "amountMl": 0 }), json!({ "amountMl": -100 })] {
        let response = app
            .clone()
            .oneshot(authed_post_json("/api/water/log", &token, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Valid amount in ml is required");
    }
}

#[tokio::test]
async fn test_water_total_accumulates() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    for hour in [8, 12, 18] {
        let response = app
            .clone()
            .oneshot(authed_post_json(
                "/api/water/log",
                &token,
                json!({
                    "amountMl": 250,
                    "loggedAt": format!("2025-06-15T{:02}:00:00Z", hour),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(authed_get("/api/water/log?date=2025-06-15", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 750);
    assert_eq!(body["date"], "2025-06-15");
}

#[tokio::test]
async fn test_water_total_empty_day_is_zero() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_get("/api/water/log?date=2025-01-01", &token))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_water_total_scoped_to_day() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    for (amount, day) in [(300, 14), (500, 15)] {
        let response = app
            .clone()
            .oneshot(authed_post_json(
                "/api/water/log",
                &token,
                json!({
                    "amountMl": amount,
                    "loggedAt": format!("2025-06-{}T10:00:00Z", day),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(authed_get("/api/water/log?date=2025-06-14", &token))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["total"], 300);

    let response = app
        .oneshot(authed_get("/api/water/log?date=2025-06-15", &token))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["total"], 500);
}

#[tokio::test]
async fn test_water_rejects_malformed_date() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_get("/api/water/log?date=June+15", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
