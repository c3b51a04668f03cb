// SPDX-License-Identifier: MIT

//! Daily summary aggregation.

use crate::db::Db;
use crate::error::AppError;
use crate::models::{DailySummary, FoodEntry, MacroTotals};
use crate::time_utils::day_bounds;
use chrono::NaiveDate;

/// Build the aggregated view of one user's calendar day: the day's food
/// entries and activities (newest first), macro totals, the user's goal if
/// any, summed water volume and calories burned.
///
/// Read-only and idempotent: identical inputs over unchanged records yield
/// identical summaries.
pub async fn daily_summary(
    db: &Db,
    user_id: &str,
    date: NaiveDate,
) -> Result<DailySummary, AppError> {
    let day = day_bounds(date);

    let entries = db.food_entries_for_user(user_id, Some(day), None).await?;
    let goal = db.get_goal(user_id).await?;
    let water_intake = db.water_total_for_day(user_id, day).await?;
    let activities = db.activities_for_user(user_id, Some(day), None).await?;

    let totals = macro_totals(&entries);
    let total_calories_burned = activities
        .iter()
        .map(|a| a.calories_burned.unwrap_or(0.0))
        .sum();

    Ok(DailySummary {
        entries,
        totals,
        goal,
        water_intake,
        activities,
        total_calories_burned,
    })
}

/// Single pass over the day's entries; absent nutrient fields contribute
/// zero without affecting other entries.
fn macro_totals(entries: &[FoodEntry]) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for entry in entries {
        totals.calories += entry.calories;
        totals.protein += entry.protein.unwrap_or(0.0);
        totals.carbs += entry.carbs.unwrap_or(0.0);
        totals.fat += entry.fat.unwrap_or(0.0);
        totals.fiber += entry.fiber.unwrap_or(0.0);
    }
    totals
}
