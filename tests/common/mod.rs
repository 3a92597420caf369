// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use walk_tracker::config::Config;
use walk_tracker::routes::create_router;
use walk_tracker::services::WeatherService;
use walk_tracker::store::{LocalStore, MemoryStorage};
use walk_tracker::AppState;

/// Create a test app backed by in-memory storage and no weather key.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let weather = WeatherService::new("http://127.0.0.1:9", None, 0.0, 0.0)
        .expect("Failed to build weather client");
    create_test_app_with_weather(weather)
}

#[allow(dead_code)]
pub fn create_test_app_with_weather(weather: WeatherService) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store: LocalStore::new(Arc::new(MemoryStorage::new())),
        weather,
    });

    (create_router(state.clone()), state)
}

/// Serve `router` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// Start the walk API on a local port and return the remote backend's base URL.
#[allow(dead_code)]
pub async fn spawn_walk_api() -> String {
    let (router, _) = create_test_app();
    format!("{}/api", spawn_server(router).await)
}
