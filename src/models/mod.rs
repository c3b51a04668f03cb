// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod favorite;
pub mod food;
pub mod goal;
pub mod summary;
pub mod water;

pub use activity::ActivityEntry;
pub use favorite::Favorite;
pub use food::{FoodEntry, MealType};
pub use goal::{ActivityLevel, Goal};
pub use summary::{DailySummary, MacroTotals};
pub use water::WaterIntakeEntry;
