// SPDX-License-Identifier: MIT

//! Aggregated daily summary.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::DailySummary;
use crate::services::daily_summary;
use crate::time_utils::parse_date_param;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/summary", get(get_summary))
}

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    /// Calendar date (YYYY-MM-DD); defaults to today
    date: Option<String>,
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<DailySummary>> {
    let date = parse_date_param(params.date.as_deref())?;

    tracing::debug!(user_id = %user.user_id, %date, "Building daily summary");

    let summary = daily_summary(&state.db, &user.user_id, date).await?;
    Ok(Json(summary))
}
