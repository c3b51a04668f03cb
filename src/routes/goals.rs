// SPDX-License-Identifier: MIT

//! Daily goal management. POST upserts the user's single goal row.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::goal::{ActivityLevel, Goal, NewGoal};
use crate::routes::CreatedResponse;
use crate::AppState;
use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/goals", get(get_goal).post(set_goal))
}

#[derive(Serialize)]
struct GoalResponse {
    goal: Option<Goal>,
}

async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<GoalResponse>> {
    let goal = state.db.get_goal(&user.user_id).await?;
    Ok(Json(GoalResponse { goal }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetGoalRequest {
    daily_calories: Option<i64>,
    protein_grams: Option<f64>,
    carbs_grams: Option<f64>,
    fat_grams: Option<f64>,
    weight_goal_kg: Option<f64>,
    current_weight_kg: Option<f64>,
    activity_level: Option<String>,
}

async fn set_goal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<SetGoalRequest>,
) -> Result<Json<CreatedResponse>> {
    let daily_calories = match body.daily_calories {
        Some(v) if v != 0 => v,
        _ => {
            return Err(AppError::BadRequest(
                "Daily calories is required".to_string(),
            ))
        }
    };

    let activity_level = body
        .activity_level
        .as_deref()
        .map(|s| {
            s.parse::<ActivityLevel>().map_err(|_| {
                AppError::BadRequest(
                    "Invalid activityLevel: must be sedentary, light, moderate, active or very_active"
                        .to_string(),
                )
            })
        })
        .transpose()?
        .unwrap_or_default();

    let id = state
        .db
        .upsert_goal(
            &user.user_id,
            NewGoal {
                daily_calories,
                protein_grams: body.protein_grams,
                carbs_grams: body.carbs_grams,
                fat_grams: body.fat_grams,
                weight_goal_kg: body.weight_goal_kg,
                current_weight_kg: body.current_weight_kg,
                activity_level,
            },
        )
        .await?;

    Ok(Json(CreatedResponse { success: true, id }))
}
