// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current-weather summary shown next to the walk log.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Weather summary returned by `/api/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeatherReport {
    /// Temperature in °C, one decimal
    pub temp: f64,
    /// Human-readable condition (e.g. "light rain")
    pub condition: String,
    /// Emoji icon for the condition group
    pub icon: String,
}

impl WeatherReport {
    /// Report served when the upstream weather API is unavailable.
    pub fn fallback() -> Self {
        Self {
            temp: 18.0,
            condition: "clear sky".to_string(),
            icon: "☀️".to_string(),
        }
    }
}

/// Map an OpenWeatherMap condition code to an icon.
///
/// Codes are grouped by hundreds: 2xx thunderstorm, 3xx-5xx rain,
/// 6xx snow, 7xx atmosphere, 800 clear, 80x clouds.
pub fn icon_for_condition(code: u32) -> &'static str {
    match code {
        0..=299 => "⛈️",
        300..=599 => "🌧️",
        600..=699 => "❄️",
        700..=799 => "🌫️",
        800 => "☀️",
        _ => "☁️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_groups() {
        assert_eq!(icon_for_condition(211), "⛈️");
        assert_eq!(icon_for_condition(300), "🌧️");
        assert_eq!(icon_for_condition(501), "🌧️");
        assert_eq!(icon_for_condition(600), "❄️");
        assert_eq!(icon_for_condition(741), "🌫️");
        assert_eq!(icon_for_condition(800), "☀️");
        assert_eq!(icon_for_condition(804), "☁️");
    }
}
