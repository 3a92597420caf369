// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Walk-Tracker: record walks (duration, distance, steps) and read them back.
//!
//! The [`store`] module is the access layer with its local and remote
//! backends; [`routes`] serves the remote backend's HTTP API.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::WeatherService;
use store::LocalStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: LocalStore,
    pub weather: WeatherService,
}
