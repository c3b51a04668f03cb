// SPDX-License-Identifier: MIT

//! Logged food entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Meal the entry is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl FromStr for MealType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(()),
        }
    }
}

/// One logged food entry. Immutable once created; nutrient fields that were
/// unknown at log time stay NULL rather than being coerced to zero.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: String,
    pub user_id: String,
    pub barcode: Option<String>,
    pub product_name: String,
    pub brand: Option<String>,
    pub serving_size: Option<String>,
    pub serving_size_grams: Option<f64>,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub salt: Option<f64>,
    pub meal_type: Option<MealType>,
    /// When the food was eaten (the nutritional event), not when the row
    /// was written.
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a food entry.
#[derive(Debug, Clone, Default)]
pub struct NewFoodEntry {
    pub barcode: Option<String>,
    pub product_name: String,
    pub brand: Option<String>,
    pub serving_size: Option<String>,
    pub serving_size_grams: Option<f64>,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub salt: Option<f64>,
    pub meal_type: Option<MealType>,
    pub logged_at: Option<DateTime<Utc>>,
}
