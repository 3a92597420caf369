// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod walk;
pub mod weather;

pub use walk::{DeleteAck, NewWalk, WalkId, WalkRecord};
pub use weather::WeatherReport;
