// SPDX-License-Identifier: MIT

//! Goal upsert semantics: one goal row per user.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_get_goal_empty() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app.oneshot(authed_get("/api/goals", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["goal"].is_null());
}

#[tokio::test]
async fn test_set_goal_requires_daily_calories() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    for body in [json!({}), json!({ "dailyCalories": 0 })] {
        let response = app
            .clone()
            .oneshot(authed_post_json("/api/goals", &token, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Daily calories is required");
    }
}

#[tokio::test]
async fn test_set_goal_rejects_invalid_activity_level() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_post_json(
            "/api/goals",
            &token,
            json!({ "dailyCalories": 2000, "activityLevel": "olympic" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_set_and_get_goal() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/goals",
            &token,
            json!({
                "dailyCalories": 2000,
                "proteinGrams": 150.0,
                "weightGoalKg": 75.0,
                "activityLevel": "moderate",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let response = app.oneshot(authed_get("/api/goals", &token)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["goal"]["dailyCalories"], 2000);
    assert_eq!(body["goal"]["proteinGrams"], 150.0);
    assert_eq!(body["goal"]["weightGoalKg"], 75.0);
    assert_eq!(body["goal"]["activityLevel"], "moderate");
}

#[tokio::test]
async fn test_goal_defaults_to_sedentary() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/goals",
            &token,
            json!({ "dailyCalories": 1800 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(authed_get("/api/goals", &token)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["goal"]["activityLevel"], "sedentary");
}

#[tokio::test]
async fn test_second_set_updates_in_place() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/goals",
            &token,
            json!({ "dailyCalories": 2000 }),
        ))
        .await
        .unwrap();
    let first_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/goals",
            &token,
            json!({ "dailyCalories": 1800, "activityLevel": "active" }),
        ))
        .await
        .unwrap();
    let second_id = body_json(response).await["id"].as_str().unwrap().to_string();

    // The existing row is updated, not replaced
    assert_eq!(first_id, second_id);

    let response = app.oneshot(authed_get("/api/goals", &token)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["goal"]["id"], first_id.as_str());
    assert_eq!(body["goal"]["dailyCalories"], 1800);
    assert_eq!(body["goal"]["activityLevel"], "active");
}

#[tokio::test]
async fn test_goals_scoped_to_user() {
    let (app, state) = create_test_app().await;
    let token_a = create_test_jwt("user-a", &state.config.jwt_signing_key);
    let token_b = create_test_jwt("user-b", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/goals",
            &token_a,
            json!({ "dailyCalories": 2200 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(authed_get("/api/goals", &token_b)).await.unwrap();
    let body = body_json(response).await;
    assert!(body["goal"].is_null());
}
