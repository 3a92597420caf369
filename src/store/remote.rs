// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Remote backend: proxies walk operations to the walk API server.
//!
//! Every failure surfaces as [`AppError::Remote`] with a fixed message per
//! operation; status codes and bodies are only logged.

use super::{WalkStore, WeatherSource};
use crate::error::{AppError, Result};
use crate::models::walk::sort_newest_first;
use crate::models::{DeleteAck, NewWalk, WalkId, WalkRecord, WeatherReport};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// HTTP client for the walk API.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host:8000/api`).
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, mapping transport failures to `failure`.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        failure: &'static str,
    ) -> Result<reqwest::Response> {
        request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "{}", failure);
            AppError::Remote(failure)
        })
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        failure: &'static str,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "{}", failure);
            return Err(AppError::Remote(failure));
        }

        response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "{}: malformed response body", failure);
            AppError::Remote(failure)
        })
    }
}

#[async_trait]
impl WalkStore for RemoteStore {
    async fn save_walk(&self, walk: NewWalk) -> Result<WalkRecord> {
        let failure = AppError::SAVE_FAILED;
        let response = self
            .send(self.http.post(self.url("/walks")).json(&walk), failure)
            .await?;
        let record: WalkRecord = self.check_response_json(response, failure).await?;
        tracing::info!(id = %record.id, "Walk saved remotely");
        Ok(record)
    }

    async fn get_walks(&self) -> Result<Vec<WalkRecord>> {
        let failure = AppError::LIST_FAILED;
        let response = self.send(self.http.get(self.url("/walks")), failure).await?;
        let mut walks: Vec<WalkRecord> = self.check_response_json(response, failure).await?;
        // Same ordering as the local backend, whatever the server did.
        sort_newest_first(&mut walks);
        Ok(walks)
    }

    async fn get_recent_walk(&self) -> Result<Option<WalkRecord>> {
        let failure = AppError::RECENT_FAILED;
        let response = self
            .send(self.http.get(self.url("/walks/recent")), failure)
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.check_response_json(response, failure).await.map(Some)
    }

    async fn delete_walk(&self, id: WalkId) -> Result<DeleteAck> {
        let failure = AppError::DELETE_FAILED;
        let response = self
            .send(self.http.delete(self.url(&format!("/walks/{}", id))), failure)
            .await?;
        let _: serde_json::Value = self.check_response_json(response, failure).await?;
        tracing::info!(id = %id, "Walk deleted remotely");
        Ok(DeleteAck::deleted(id))
    }
}

#[async_trait]
impl WeatherSource for RemoteStore {
    async fn get_weather(&self) -> Result<Option<WeatherReport>> {
        let failure = AppError::WEATHER_FAILED;
        let response = self.send(self.http.get(self.url("/weather")), failure).await?;
        self.check_response_json(response, failure).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let store = RemoteStore::new("http://localhost:8000/api/");
        assert_eq!(store.base_url(), "http://localhost:8000/api");
        assert_eq!(store.url("/walks/recent"), "http://localhost:8000/api/walks/recent");
    }
}
