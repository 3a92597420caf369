// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - upstream integrations.

pub mod weather;

pub use weather::WeatherService;
