// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk-Tracker API Server
//!
//! Serves the walk API that the remote backend talks to, persisting
//! records with the local backend on file storage.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walk_tracker::{
    config::Config,
    services::WeatherService,
    store::{FileStorage, LocalStore},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Walk-Tracker API");

    let storage = FileStorage::open(&config.data_dir)?;
    tracing::info!(path = %config.data_dir.display(), "Walk storage ready");
    let store = LocalStore::new(Arc::new(storage));

    let weather = WeatherService::from_config(&config)?;
    if config.weather_api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY not set, serving fallback weather");
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        weather,
    });

    let app = walk_tracker::routes::create_router(state);

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

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("walk_tracker=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
