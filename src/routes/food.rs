// SPDX-License-Identifier: MIT

//! Food entry logging and barcode lookup.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::food::{FoodEntry, NewFoodEntry};
use crate::routes::CreatedResponse;
use crate::services::nutrition::OffProduct;
use crate::services::{normalize_nutrients_100g, NormalizedNutrients};
use crate::time_utils::{day_bounds, parse_date_param, DayBounds};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_FOOD_LIMIT: i64 = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/food/log", post(log_food).get(list_food))
        .route("/api/food/lookup", get(lookup_product))
}

// ─── Logging ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogFoodRequest {
    barcode: Option<String>,
    product_name: Option<String>,
    brand: Option<String>,
    serving_size: Option<String>,
    serving_size_grams: Option<f64>,
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
    saturated_fat: Option<f64>,
    fiber: Option<f64>,
    sugar: Option<f64>,
    sodium: Option<f64>,
    salt: Option<f64>,
    meal_type: Option<String>,
    /// Event time; defaults to now.
    logged_at: Option<DateTime<Utc>>,
}

async fn log_food(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<LogFoodRequest>,
) -> Result<Json<CreatedResponse>> {
    let product_name = body.product_name.unwrap_or_default();
    // Zero calories is a valid value; only a missing field is rejected.
    let Some(calories) = body.calories else {
        return Err(AppError::BadRequest(
            "Product name and calories are required".to_string(),
        ));
    };
    if product_name.is_empty() {
        return Err(AppError::BadRequest(
            "Product name and calories are required".to_string(),
        ));
    }

    let meal_type = body
        .meal_type
        .as_deref()
        .map(|s| {
            s.parse().map_err(|_| {
                AppError::BadRequest(
                    "Invalid mealType: must be breakfast, lunch, dinner or snack".to_string(),
                )
            })
        })
        .transpose()?;

    let entry = state
        .db
        .insert_food_entry(
            &user.user_id,
            NewFoodEntry {
                barcode: body.barcode,
                product_name,
                brand: body.brand,
                serving_size: body.serving_size,
                serving_size_grams: body.serving_size_grams,
                calories,
                protein: body.protein,
                carbs: body.carbs,
                fat: body.fat,
                saturated_fat: body.saturated_fat,
                fiber: body.fiber,
                sugar: body.sugar,
                sodium: body.sodium,
                salt: body.salt,
                meal_type,
                logged_at: body.logged_at,
            },
        )
        .await?;

    tracing::debug!(user_id = %user.user_id, entry_id = %entry.id, "Food entry logged");

    Ok(Json(CreatedResponse {
        success: true,
        id: entry.id,
    }))
}

#[derive(Debug, Deserialize)]
struct ListFoodQuery {
    /// Restrict to one calendar day (YYYY-MM-DD)
    date: Option<String>,
    limit: Option<i64>,
}

#[derive(Serialize)]
struct FoodEntriesResponse {
    entries: Vec<FoodEntry>,
}

async fn list_food(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ListFoodQuery>,
) -> Result<Json<FoodEntriesResponse>> {
    let day: Option<DayBounds> = params
        .date
        .as_deref()
        .map(|raw| parse_date_param(Some(raw)).map(day_bounds))
        .transpose()?;
    let limit = params.limit.unwrap_or(DEFAULT_FOOD_LIMIT);

    let entries = state
        .db
        .food_entries_for_user(&user.user_id, day, Some(limit))
        .await?;

    Ok(Json(FoodEntriesResponse { entries }))
}

// ─── Barcode Lookup ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LookupQuery {
    barcode: Option<String>,
    /// Comma-separated field override
    fields: Option<String>,
}

#[derive(Serialize)]
struct LookupResponse {
    product: OffProduct,
    /// Fixed-shape per-100g nutrient record derived from the raw payload.
    nutrients: NormalizedNutrients,
}

async fn lookup_product(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<LookupResponse>> {
    let barcode = params
        .barcode
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::BadRequest("barcode is required".to_string()))?;

    let fields: Vec<&str> = params
        .fields
        .as_deref()
        .map(|f| f.split(',').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    tracing::debug!(user_id = %user.user_id, barcode = %barcode, "Product lookup");

    let response = state.nutrition.product_by_barcode(&barcode, &fields).await?;
    let product = response
        .product
        .ok_or_else(|| AppError::Lookup("Empty product in lookup response".to_string()))?;

    let nutrients = normalize_nutrients_100g(product.nutriments.as_ref());

    Ok(Json(LookupResponse { product, nutrients }))
}
