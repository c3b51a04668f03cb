// SPDX-License-Identifier: MIT

//! Favorite product templates.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_add_favorite_requires_name_and_calories() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let invalid = [
        json!({}),
        json!({ "productName": "Oatmeal" }),
        // A favorite with zero calories is rejected
        json!({ "productName": "Oatmeal", "calories": 0.0 }),
        json!({ "calories": 389.0 }),
    ];

    for body in invalid {
        let response = app
            .clone()
            .oneshot(authed_post_json("/api/favorites", &token, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Product name and calories are required");
    }
}

#[tokio::test]
async fn test_add_and_list_favorites() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/favorites",
            &token,
            json!({
                "productName": "Oatmeal",
                "brand": "Quaker",
                "barcode": "030000010204",
                "calories": 389.0,
                "protein": 16.9,
                "carbs": 66.3,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let id = body["id"].as_str().unwrap().to_string();

    let response = app.oneshot(authed_get("/api/favorites", &token)).await.unwrap();
    let body = body_json(response).await;
    let favorites = body["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], id.as_str());
    assert_eq!(favorites[0]["productName"], "Oatmeal");
    assert_eq!(favorites[0]["brand"], "Quaker");
    assert_eq!(favorites[0]["calories"], 389.0);
}

#[tokio::test]
async fn test_delete_favorite_requires_id() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_delete("/api/favorites", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Favorite ID is required");
}

#[tokio::test]
async fn test_delete_favorite_removes_it() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/favorites",
            &token,
            json!({ "productName": "Oatmeal", "calories": 389.0 }),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(authed_delete(&format!("/api/favorites?id={}", id), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = app.oneshot(authed_get("/api/favorites", &token)).await.unwrap();
    let body = body_json(response).await;
    assert!(body["favorites"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_favorite_still_succeeds() {
    let (app, state) = create_test_app().await;
    let token = create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_delete("/api/favorites?id=no-such-id", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[tokio::test]
async fn test_delete_favorite_scoped_to_owner() {
    let (app, state) = create_test_app().await;
    let token_a = create_test_jwt("user-a", &state.config.jwt_signing_key);
    let token_b = create_test_jwt("user-b", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed_post_json(
            "/api/favorites",
            &token_a,
            json!({ "productName": "Oatmeal", "calories": 389.0 }),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    // Another user deleting the same id is a no-op
    let response = app
        .clone()
        .oneshot(authed_delete(&format!("/api/favorites?id={}", id), &token_b))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(authed_get("/api/favorites", &token_a)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["favorites"].as_array().unwrap().len(), 1);
}
