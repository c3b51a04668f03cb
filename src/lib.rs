// SPDX-License-Identifier: MIT

//! Nutrack: calorie and nutrition tracking backend.
//!
//! This crate provides the API for logging food, water and activity
//! entries, managing daily goals and favorites, looking up products by
//! barcode against Open Food Facts, and serving aggregated daily summaries.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Db;
use services::OpenFoodFactsClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub nutrition: OpenFoodFactsClient,
}
