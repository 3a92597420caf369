// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local backend: every record lives in one JSON array under a single key.

use super::storage::KeyValueStorage;
use super::{WalkStore, WeatherSource};
use crate::error::{AppError, Result};
use crate::models::walk::sort_newest_first;
use crate::models::{DeleteAck, NewWalk, WalkId, WalkRecord, WeatherReport};
use crate::time_utils::now_millis;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Storage key holding the serialized record list.
pub const WALKS_KEY: &str = "walks";

/// Walk store backed by a local key-value storage handle.
pub struct LocalStore {
    storage: Arc<dyn KeyValueStorage>,
    /// Serializes read-modify-write cycles on the record list.
    write_lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Remove the record with `id`, reporting whether one matched.
    pub async fn remove_walk(&self, id: WalkId) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut walks = self.load()?;
        let before = walks.len();
        walks.retain(|w| w.id != id);
        let removed = walks.len() != before;

        self.persist(&walks)?;
        if removed {
            tracing::info!(id = %id, "Walk deleted");
        } else {
            tracing::debug!(id = %id, "Delete matched no walk");
        }
        Ok(removed)
    }

    /// Read the stored list in storage order.
    fn load(&self) -> Result<Vec<WalkRecord>> {
        match self.storage.get(WALKS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Storage(format!("Malformed walk list in storage: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, walks: &[WalkRecord]) -> Result<()> {
        let raw = serde_json::to_string(walks)
            .map_err(|e| AppError::Storage(format!("Failed to serialize walks: {}", e)))?;
        self.storage.set(WALKS_KEY, &raw)
    }
}

/// Millisecond timestamp id, bumped past the largest existing id so two
/// saves within the same millisecond still get distinct ids.
fn next_id(walks: &[WalkRecord], now_ms: i64) -> WalkId {
    let candidate = u64::try_from(now_ms).unwrap_or(0).max(1);
    let floor = walks.iter().map(|w| w.id.0 + 1).max().unwrap_or(0);
    WalkId(candidate.max(floor))
}

#[async_trait]
impl WalkStore for LocalStore {
    async fn save_walk(&self, walk: NewWalk) -> Result<WalkRecord> {
        let _guard = self.write_lock.lock().await;

        let mut walks = self.load()?;
        let date = now_millis();
        let record = walk.into_record(next_id(&walks, date.timestamp_millis()), date);
        walks.push(record.clone());
        self.persist(&walks)?;

        tracing::info!(
            id = %record.id,
            duration = record.duration,
            distance = record.distance,
            steps = record.steps,
            "Walk saved"
        );
        Ok(record)
    }

    async fn get_walks(&self) -> Result<Vec<WalkRecord>> {
        let mut walks = self.load()?;
        sort_newest_first(&mut walks);
        Ok(walks)
    }

    async fn get_recent_walk(&self) -> Result<Option<WalkRecord>> {
        Ok(self.get_walks().await?.into_iter().next())
    }

    async fn delete_walk(&self, id: WalkId) -> Result<DeleteAck> {
        self.remove_walk(id).await?;
        Ok(DeleteAck::deleted(id))
    }
}

#[async_trait]
impl WeatherSource for LocalStore {
    /// Weather is not available offline.
    async fn get_weather(&self) -> Result<Option<WeatherReport>> {
        Ok(None)
    }
}
