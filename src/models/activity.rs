// SPDX-License-Identifier: MIT

//! Physical activity entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged activity.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub user_id: String,
    /// Free-text activity label ("running", "yoga", ...)
    pub activity_type: String,
    pub duration_minutes: i64,
    /// Estimated or manually supplied. Required at write time; treated as
    /// zero by the aggregator if a legacy row is somehow NULL.
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when logging an activity.
#[derive(Debug, Clone)]
pub struct NewActivityEntry {
    pub activity_type: String,
    pub duration_minutes: i64,
    pub calories_burned: f64,
    pub notes: Option<String>,
    pub logged_at: Option<DateTime<Utc>>,
}
