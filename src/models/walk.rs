// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk record model shared by both backends and the API server.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Identifier of a walk record.
///
/// The local backend derives it from the save time in Unix milliseconds;
/// the remote backend takes whatever the server assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalkId(pub u64);

impl fmt::Display for WalkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WalkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(WalkId)
    }
}

/// A single persisted walk. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WalkRecord {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: WalkId,
    /// When the walk was saved (RFC 3339; zoneless server dates read as UTC)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    /// Duration in seconds
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: i64,
    /// Distance in kilometres
    pub distance: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub steps: i64,
}

/// Payload for saving a walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NewWalk {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: i64,
    pub distance: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub steps: i64,
}

impl NewWalk {
    pub fn new(duration: i64, distance: f64, steps: i64) -> Self {
        Self {
            duration,
            distance,
            steps,
        }
    }

    /// Build the stored record for this payload.
    pub fn into_record(self, id: WalkId, date: DateTime<Utc>) -> WalkRecord {
        WalkRecord {
            id,
            date,
            duration: self.duration,
            distance: self.distance,
            steps: self.steps,
        }
    }
}

/// Acknowledgement returned by a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteAck {
    pub success: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: WalkId,
    pub message: String,
}

impl DeleteAck {
    pub fn deleted(id: WalkId) -> Self {
        Self {
            success: true,
            id,
            message: "Walk deleted".to_string(),
        }
    }
}

/// Parse a record date: RFC 3339, or a naive ISO-8601 timestamp taken as UTC.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => Ok(date.with_timezone(&Utc)),
        Err(_) => raw
            .parse::<NaiveDateTime>()
            .map(|naive| Utc.from_utc_datetime(&naive)),
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Newest-first ordering: date descending, then id descending for ties.
pub fn newest_first(a: &WalkRecord, b: &WalkRecord) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
}

/// Sort records in place, newest first.
pub fn sort_newest_first(walks: &mut [WalkRecord]) {
    walks.sort_by(newest_first);
}
