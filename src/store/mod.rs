// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk record access layer.
//!
//! Callers program against [`WalkStore`] (and, separately, [`WeatherSource`]).
//! Two interchangeable implementations exist:
//! - [`LocalStore`]: a JSON list under one key of a [`KeyValueStorage`]
//! - [`RemoteStore`]: the same operations proxied to the walk API server
//!
//! Both return listings newest-first.

pub mod local;
pub mod remote;
pub mod storage;

pub use local::LocalStore;
pub use remote::RemoteStore;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use crate::config::{BackendKind, Config};
use crate::error::Result;
use crate::models::{DeleteAck, NewWalk, WalkId, WalkRecord, WeatherReport};
use async_trait::async_trait;
use std::sync::Arc;

/// Operations on walk records, identical across backends.
#[async_trait]
pub trait WalkStore: Send + Sync {
    /// Create and persist one record.
    async fn save_walk(&self, walk: NewWalk) -> Result<WalkRecord>;

    /// All records, newest first.
    async fn get_walks(&self) -> Result<Vec<WalkRecord>>;

    /// The newest record, or `None` if there are none.
    async fn get_recent_walk(&self) -> Result<Option<WalkRecord>>;

    /// Remove the record with `id`.
    async fn delete_walk(&self, id: WalkId) -> Result<DeleteAck>;
}

/// Current weather, forwarded to whatever provides it.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn get_weather(&self) -> Result<Option<WeatherReport>>;
}

/// A backend offering both capabilities.
pub trait WalkBackend: WalkStore + WeatherSource {}

impl<T: WalkStore + WeatherSource> WalkBackend for T {}

/// Open the backend selected by configuration.
pub fn open_backend(config: &Config) -> Result<Arc<dyn WalkBackend>> {
    match config.backend {
        BackendKind::Local => {
            let storage = FileStorage::open(&config.data_dir)?;
            tracing::info!(path = %config.data_dir.display(), "Using local walk backend");
            Ok(Arc::new(LocalStore::new(Arc::new(storage))))
        }
        BackendKind::Remote => {
            tracing::info!(url = %config.api_url, "Using remote walk backend");
            Ok(Arc::new(RemoteStore::new(&config.api_url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_local_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::test_default()
        };

        let backend = open_backend(&config).unwrap();
        let saved = backend.save_walk(NewWalk::new(30, 2.5, 3000)).await.unwrap();

        assert_eq!(backend.get_walks().await.unwrap(), vec![saved]);
        assert_eq!(backend.get_weather().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_remote_backend_unreachable() {
        let config = Config {
            backend: BackendKind::Remote,
            api_url: "http://127.0.0.1:9".to_string(),
            ..Config::test_default()
        };

        let backend = open_backend(&config).unwrap();
        let err = backend.get_walks().await.unwrap_err();
        assert_eq!(err.to_string(), crate::error::AppError::LIST_FAILED);
    }
}
