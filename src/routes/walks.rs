// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk record routes.

use crate::error::{AppError, Result};
use crate::models::{DeleteAck, NewWalk, WalkId, WalkRecord};
use crate::store::WalkStore;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/walks", get(list_walks).post(create_walk))
        .route("/api/walks/recent", get(recent_walk))
        .route("/api/walks/{id}", delete(delete_walk))
}

/// Save a new walk.
async fn create_walk(
    State(state): State<Arc<AppState>>,
    Json(walk): Json<NewWalk>,
) -> Result<Json<WalkRecord>> {
    Ok(Json(state.store.save_walk(walk).await?))
}

/// All walks, newest first.
async fn list_walks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<WalkRecord>>> {
    Ok(Json(state.store.get_walks().await?))
}

/// The most recent walk; 404 when nothing has been recorded.
async fn recent_walk(State(state): State<Arc<AppState>>) -> Result<Json<WalkRecord>> {
    state
        .store
        .get_recent_walk()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No walks recorded".to_string()))
}

/// Delete a walk; 404 when no walk has that id.
async fn delete_walk(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>> {
    let id: WalkId = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid walk id: {}", id)))?;

    if !state.store.remove_walk(id).await? {
        return Err(AppError::NotFound(format!("Walk {} not found", id)));
    }
    Ok(Json(DeleteAck::deleted(id)))
}
