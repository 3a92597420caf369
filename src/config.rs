// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which walk backend is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Records kept in the local key-value store
    #[default]
    Local,
    /// Records proxied to the walk API server
    Remote,
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::Invalid("WALK_BACKEND", other.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Active walk backend
    pub backend: BackendKind,
    /// Directory holding the local key-value files
    pub data_dir: PathBuf,
    /// Base URL of the walk API (remote backend)
    pub api_url: String,
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,

    // --- Weather upstream ---
    /// OpenWeatherMap-compatible API base URL
    pub weather_api_url: String,
    /// Upstream API key; without one the fallback report is served
    pub weather_api_key: Option<String>,
    /// Default latitude for weather queries
    pub weather_lat: f64,
    /// Default longitude for weather queries
    pub weather_lng: f64,
}

impl Config {
    /// Offline config for tests.
    pub fn test_default() -> Self {
        Self {
            backend: BackendKind::Local,
            data_dir: PathBuf::from("./walk-data"),
            api_url: "http://localhost:8000/api".to_string(),
            port: 8000,
            frontend_url: "http://localhost:5173".to_string(),
            weather_api_url: "https://api.openweathermap.org/data/2.5".to_string(),
            weather_api_key: None,
            weather_lat: 37.5665,
            weather_lng: 126.9780,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            backend: var("WALK_BACKEND", "local").parse()?,
            data_dir: PathBuf::from(var("WALK_DATA_DIR", "./walk-data")),
            api_url: var("WALK_API_URL", "http://localhost:8000/api")
                .trim_end_matches('/')
                .to_string(),
            port: parse_var("PORT", &var("PORT", "8000"))?,
            frontend_url: var("FRONTEND_URL", "http://localhost:5173"),
            weather_api_url: var("WEATHER_API_URL", "https://api.openweathermap.org/data/2.5")
                .trim_end_matches('/')
                .to_string(),
            weather_api_key: lookup("WEATHER_API_KEY")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            weather_lat: parse_var("WEATHER_LAT", &var("WEATHER_LAT", "37.5665"))?,
            weather_lng: parse_var("WEATHER_LNG", &var("WEATHER_LNG", "126.9780"))?,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(key, value.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = load(&[]).expect("Config should load");

        assert_eq!(config.backend, BackendKind::Local);
        assert_eq!(config.api_url, "http://localhost:8000/api");
        assert_eq!(config.port, 8000);
        assert!(config.weather_api_key.is_none());
    }

    #[test]
    fn test_config_remote_backend() {
        let config = load(&[
            ("WALK_BACKEND", "Remote"),
            ("WALK_API_URL", "http://walks.example/api/"),
            ("PORT", "9090"),
            ("WEATHER_API_KEY", " key "),
        ])
        .expect("Config should load");

        assert_eq!(config.backend, BackendKind::Remote);
        assert_eq!(config.api_url, "http://walks.example/api");
        assert_eq!(config.port, 9090);
        assert_eq!(config.weather_api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_config_rejects_unknown_backend() {
        let err = load(&[("WALK_BACKEND", "cloud")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("WALK_BACKEND", _)));
    }

    #[test]
    fn test_config_rejects_bad_port() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));
    }

    #[test]
    fn test_blank_weather_key_is_unset() {
        let config = load(&[("WEATHER_API_KEY", "  ")]).unwrap();
        assert!(config.weather_api_key.is_none());
    }
}
