// SPDX-License-Identifier: MIT

//! Normalization of Open Food Facts nutriment payloads.
//!
//! The upstream `nutriments` object is loosely typed: arbitrary keys,
//! values that may be numbers or strings, and inconsistent naming. This is
//! the only place that shape is allowed to exist; everything downstream
//! works with [`NormalizedNutrients`].

use serde::Serialize;
use serde_json::{Map, Value};

/// Fixed-shape nutrient record, per 100 g of product. A `None` field means
/// the source did not carry a usable numeric value; it is never coerced to
/// zero. No unit conversion is performed (kJ and kcal are independent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedNutrients {
    pub energy_kj: Option<f64>,
    pub energy_kcal: Option<f64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub carbs: Option<f64>,
    pub sugars: Option<f64>,
    pub fiber: Option<f64>,
    pub protein: Option<f64>,
    pub salt: Option<f64>,
    pub sodium: Option<f64>,
}

/// Map a raw nutriment object onto the fixed shape. Each target field reads
/// exactly one source key; non-numeric or missing values stay absent.
/// Unknown keys are ignored. Safe for any input shape.
pub fn normalize_nutrients_100g(nutriments: Option<&Map<String, Value>>) -> NormalizedNutrients {
    let Some(n) = nutriments else {
        return NormalizedNutrients::default();
    };

    NormalizedNutrients {
        energy_kj: number(n, "energy_100g"),
        energy_kcal: number(n, "energy-kcal_100g"),
        fat: number(n, "fat_100g"),
        saturated_fat: number(n, "saturated-fat_100g"),
        carbs: number(n, "carbohydrates_100g"),
        sugars: number(n, "sugars_100g"),
        fiber: number(n, "fiber_100g"),
        protein: number(n, "proteins_100g"),
        salt: number(n, "salt_100g"),
        sodium: number(n, "sodium_100g"),
    }
}

fn number(n: &Map<String, Value>, key: &str) -> Option<f64> {
    n.get(key).and_then(Value::as_f64)
}
