// SPDX-License-Identifier: MIT

//! Nutrack API Server
//!
//! Calorie and nutrition tracking: food, water and activity logging,
//! daily goals, favorites, barcode lookups against Open Food Facts, and
//! aggregated daily summaries.

use nutrack::{
    config::Config, db::Db, services::OpenFoodFactsClient, AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Nutrack API");

    // Connect to the database and apply migrations
    let db = Db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    db.migrate().await.expect("Failed to run migrations");

    // Open Food Facts client (dependency-injected, no global instance)
    let nutrition = OpenFoodFactsClient::new(config.off_base_url.clone());
    tracing::info!(base_url = %config.off_base_url, "Nutrition lookup client initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        nutrition,
    });

    // Build router
    let app = nutrack::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nutrack=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
