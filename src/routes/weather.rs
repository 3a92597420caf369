// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather passthrough route.

use crate::models::WeatherReport;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/weather", get(get_weather))
}

#[derive(Deserialize)]
struct WeatherQuery {
    lat: Option<f64>,
    lng: Option<f64>,
}

/// Current weather; always answers, falling back to a default report.
async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherReport> {
    Json(state.weather.current(query.lat, query.lng).await)
}
