// SPDX-License-Identifier: MIT

//! Activity logging.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::activity::{ActivityEntry, NewActivityEntry};
use crate::routes::CreatedResponse;
use crate::time_utils::{day_bounds, parse_date_param, DayBounds};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::post,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_ACTIVITY_LIMIT: i64 = 50;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/activity/log", post(log_activity).get(list_activities))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogActivityRequest {
    activity_type: Option<String>,
    duration_minutes: Option<i64>,
    /// Estimated client-side or supplied manually; zero is valid.
    calories_burned: Option<f64>,
    notes: Option<String>,
    logged_at: Option<DateTime<Utc>>,
}

async fn log_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<LogActivityRequest>,
) -> Result<Json<CreatedResponse>> {
    let activity_type = body.activity_type.unwrap_or_default();
    let duration_minutes = body.duration_minutes.unwrap_or(0);
    if activity_type.is_empty() || duration_minutes == 0 || body.calories_burned.is_none() {
        return Err(AppError::BadRequest(
            "Activity type, duration, and calories burned are required".to_string(),
        ));
    }

    let entry = state
        .db
        .insert_activity(
            &user.user_id,
            NewActivityEntry {
                activity_type,
                duration_minutes,
                calories_burned: body.calories_burned.unwrap_or(0.0),
                notes: body.notes,
                logged_at: body.logged_at,
            },
        )
        .await?;

    tracing::debug!(user_id = %user.user_id, entry_id = %entry.id, "Activity logged");

    Ok(Json(CreatedResponse {
        success: true,
        id: entry.id,
    }))
}

#[derive(Debug, Deserialize)]
struct ListActivitiesQuery {
    date: Option<String>,
    limit: Option<i64>,
}

#[derive(Serialize)]
struct ActivitiesResponse {
    activities: Vec<ActivityEntry>,
}

async fn list_activities(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ListActivitiesQuery>,
) -> Result<Json<ActivitiesResponse>> {
    let day: Option<DayBounds> = params
        .date
        .as_deref()
        .map(|raw| parse_date_param(Some(raw)).map(day_bounds))
        .transpose()?;
    let limit = params.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);

    let activities = state
        .db
        .activities_for_user(&user.user_id, day, Some(limit))
        .await?;

    Ok(Json(ActivitiesResponse { activities }))
}
