// SPDX-License-Identifier: MIT

//! Water intake model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged water intake.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaterIntakeEntry {
    pub id: String,
    pub user_id: String,
    /// Amount in milliliters; strictly positive.
    pub amount_ml: i64,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
