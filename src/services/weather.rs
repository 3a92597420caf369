// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather lookup against an OpenWeatherMap-compatible API.
//!
//! Lookups never fail from the caller's point of view: any upstream problem
//! (missing key, transport error, bad status, unexpected body) is logged and
//! the fallback report is returned instead.

use crate::config::Config;
use crate::models::weather::{icon_for_condition, WeatherReport};
use serde::Deserialize;
use std::time::Duration;

/// Upstream request timeout.
const WEATHER_TIMEOUT: Duration = Duration::from_secs(5);

/// Language for condition descriptions.
const WEATHER_LANG: &str = "en";

/// Weather API client.
#[derive(Debug, Clone)]
pub struct WeatherService {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    default_lat: f64,
    default_lng: f64,
}

impl WeatherService {
    /// Create a client; fails if the HTTP client with its timeout cannot be built.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        default_lat: f64,
        default_lng: f64,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(WEATHER_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            default_lat,
            default_lng,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.weather_api_url,
            config.weather_api_key.clone(),
            config.weather_lat,
            config.weather_lng,
        )
    }

    /// Current weather at the given coordinates (configured defaults if omitted).
    pub async fn current(&self, lat: Option<f64>, lng: Option<f64>) -> WeatherReport {
        let lat = lat.unwrap_or(self.default_lat);
        let lng = lng.unwrap_or(self.default_lng);

        match self.fetch(lat, lng).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, lat, lng, "Weather lookup failed, using fallback");
                WeatherReport::fallback()
            }
        }
    }

    async fn fetch(&self, lat: f64, lng: f64) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::NoApiKey)?;

        let response = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
                ("lang", WEATHER_LANG.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: OwmResponse = response.json().await?;
        body.into_report()
    }
}

/// Subset of the OpenWeatherMap current-weather response.
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    id: u32,
    description: String,
}

impl OwmResponse {
    fn into_report(self) -> Result<WeatherReport, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::NoCondition)?;

        Ok(WeatherReport {
            temp: (self.main.temp * 10.0).round() / 10.0,
            icon: icon_for_condition(condition.id).to_string(),
            condition: condition.description,
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum WeatherError {
    #[error("no weather API key configured")]
    NoApiKey,

    #[error("weather API returned HTTP {0}")]
    Status(u16),

    #[error("weather response has no condition")]
    NoCondition,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
