// SPDX-License-Identifier: MIT

//! Water intake logging.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::routes::CreatedResponse;
use crate::time_utils::{day_bounds, parse_date_param};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::post,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/water/log", post(log_water).get(get_water_total))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogWaterRequest {
    amount_ml: Option<i64>,
    logged_at: Option<DateTime<Utc>>,
}

async fn log_water(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<LogWaterRequest>,
) -> Result<Json<CreatedResponse>> {
    let amount_ml = match body.amount_ml {
        Some(v) if v > 0 => v,
        _ => {
            return Err(AppError::BadRequest(
                "Valid amount in ml is required".to_string(),
            ))
        }
    };

    let entry = state
        .db
        .insert_water_intake(&user.user_id, amount_ml, body.logged_at)
        .await?;

    Ok(Json(CreatedResponse {
        success: true,
        id: entry.id,
    }))
}

#[derive(Debug, Deserialize)]
struct WaterQuery {
    date: Option<String>,
}

#[derive(Serialize)]
struct WaterTotalResponse {
    /// Milliliters logged on `date`
    total: i64,
    date: String,
}

async fn get_water_total(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<WaterQuery>,
) -> Result<Json<WaterTotalResponse>> {
    let date = parse_date_param(params.date.as_deref())?;
    let total = state
        .db
        .water_total_for_day(&user.user_id, day_bounds(date))
        .await?;

    Ok(Json(WaterTotalResponse {
        total,
        date: date.format("%Y-%m-%d").to_string(),
    }))
}
