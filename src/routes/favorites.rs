// SPDX-License-Identifier: MIT

//! Favorite products: saved templates for fast re-logging.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::favorite::{Favorite, NewFavorite};
use crate::routes::{CreatedResponse, SuccessResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/favorites",
        get(list_favorites).post(add_favorite).delete(delete_favorite),
    )
}

#[derive(Serialize)]
struct FavoritesResponse {
    favorites: Vec<Favorite>,
}

async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FavoritesResponse>> {
    let favorites = state.db.favorites_for_user(&user.user_id).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddFavoriteRequest {
    barcode: Option<String>,
    product_name: Option<String>,
    brand: Option<String>,
    serving_size: Option<String>,
    serving_size_grams: Option<f64>,
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
    fiber: Option<f64>,
    sugar: Option<f64>,
}

async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<Json<CreatedResponse>> {
    let product_name = body.product_name.unwrap_or_default();
    // Unlike food entries, a zero-calorie favorite is rejected: a template
    // with no energy value is not worth saving.
    let Some(calories) = body.calories.filter(|c| *c != 0.0) else {
        return Err(AppError::BadRequest(
            "Product name and calories are required".to_string(),
        ));
    };
    if product_name.is_empty() {
        return Err(AppError::BadRequest(
            "Product name and calories are required".to_string(),
        ));
    }

    let favorite = state
        .db
        .insert_favorite(
            &user.user_id,
            NewFavorite {
                barcode: body.barcode,
                product_name,
                brand: body.brand,
                serving_size: body.serving_size,
                serving_size_grams: body.serving_size_grams,
                calories,
                protein: body.protein,
                carbs: body.carbs,
                fat: body.fat,
                fiber: body.fiber,
                sugar: body.sugar,
            },
        )
        .await?;

    Ok(Json(CreatedResponse {
        success: true,
        id: favorite.id,
    }))
}

#[derive(Debug, Deserialize)]
struct DeleteFavoriteQuery {
    id: Option<String>,
}

/// Idempotent: deleting an id that does not exist (or belongs to another
/// user) still reports success.
async fn delete_favorite(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<DeleteFavoriteQuery>,
) -> Result<Json<SuccessResponse>> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Favorite ID is required".to_string()))?;

    state.db.delete_favorite(&user.user_id, &id).await?;

    Ok(Json(SuccessResponse { success: true }))
}
