// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod calories;
pub mod nutrients;
pub mod nutrition;
pub mod summary;

pub use nutrients::{normalize_nutrients_100g, NormalizedNutrients};
pub use nutrition::{LookupError, OpenFoodFactsClient};
pub use summary::daily_summary;
