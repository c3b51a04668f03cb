// SPDX-License-Identifier: MIT

//! Derived daily summary. Never persisted; rebuilt per request from the
//! day's records.

use crate::models::{ActivityEntry, FoodEntry, Goal};
use serde::Serialize;

/// Scalar totals across one day's food entries. Absent nutrient fields on
/// individual entries contribute zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// Aggregated view of one user's calendar day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// The day's food entries, most recent first.
    pub entries: Vec<FoodEntry>,
    pub totals: MacroTotals,
    pub goal: Option<Goal>,
    /// Total water volume for the day, in milliliters.
    pub water_intake: i64,
    /// The day's activities, most recent first.
    pub activities: Vec<ActivityEntry>,
    pub total_calories_burned: f64,
}

impl DailySummary {
    /// Percent of the daily calorie target consumed, clamped to 100.
    ///
    /// Presentation concern: `None` when there is no goal or the target is
    /// not positive.
    pub fn calorie_progress(&self) -> Option<f64> {
        let target = self.goal.as_ref()?.daily_calories;
        if target <= 0 {
            return None;
        }
        Some((self.totals.calories / target as f64 * 100.0).min(100.0))
    }
}
