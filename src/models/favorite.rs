// SPDX-License-Identifier: MIT

//! Favorite product model: a saved template for fast re-logging,
//! independent of the food entry lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
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
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when saving a favorite.
#[derive(Debug, Clone, Default)]
pub struct NewFavorite {
    pub barcode: Option<String>,
    pub product_name: String,
    pub brand: Option<String>,
    pub serving_size: Option<String>,
    pub serving_size_grams: Option<f64>,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
}
