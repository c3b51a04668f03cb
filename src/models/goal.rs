// SPDX-License-Identifier: MIT

//! Daily goal model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fixed five-level activity tier. Absent input defaults to the least
/// active tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(()),
        }
    }
}

/// A user's daily targets. At most one row per user; POSTs upsert in place.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub daily_calories: i64,
    pub protein_grams: Option<f64>,
    pub carbs_grams: Option<f64>,
    pub fat_grams: Option<f64>,
    pub weight_goal_kg: Option<f64>,
    pub current_weight_kg: Option<f64>,
    pub activity_level: ActivityLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when setting the goal.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub daily_calories: i64,
    pub protein_grams: Option<f64>,
    pub carbs_grams: Option<f64>,
    pub fat_grams: Option<f64>,
    pub weight_goal_kg: Option<f64>,
    pub current_weight_kg: Option<f64>,
    pub activity_level: ActivityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_round_trip() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ] {
            assert_eq!(level.as_str().parse::<ActivityLevel>(), Ok(level));
        }
        assert!("extreme".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_default_is_least_active() {
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
    }
}
