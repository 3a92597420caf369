// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The same scenario must behave identically on both backends.

use std::sync::Arc;
use walk_tracker::models::NewWalk;
use walk_tracker::store::{LocalStore, MemoryStorage, RemoteStore, WalkBackend, WalkStore};

mod common;

async fn backends() -> Vec<(&'static str, Arc<dyn WalkBackend>)> {
    vec![
        (
            "local",
            Arc::new(LocalStore::new(Arc::new(MemoryStorage::new()))) as Arc<dyn WalkBackend>,
        ),
        (
            "remote",
            Arc::new(RemoteStore::new(&common::spawn_walk_api().await)) as Arc<dyn WalkBackend>,
        ),
    ]
}

#[tokio::test]
async fn test_walk_lifecycle_parity() {
    for (name, backend) in backends().await {
        assert_eq!(backend.get_recent_walk().await.unwrap(), None, "{}", name);
        assert!(backend.get_walks().await.unwrap().is_empty(), "{}", name);

        let a = backend.save_walk(NewWalk::new(30, 2.5, 3000)).await.unwrap();
        let b = backend.save_walk(NewWalk::new(15, 1.2, 1600)).await.unwrap();
        let c = backend.save_walk(NewWalk::new(60, 5.0, 7000)).await.unwrap();

        assert_eq!(
            backend.get_walks().await.unwrap(),
            vec![c.clone(), b.clone(), a.clone()],
            "{}",
            name
        );

        let recent = backend.get_recent_walk().await.unwrap().unwrap();
        assert_eq!(
            (recent.duration, recent.distance, recent.steps),
            (60, 5.0, 7000),
            "{}",
            name
        );

        let ack = backend.delete_walk(c.id).await.unwrap();
        assert!(ack.success, "{}", name);
        assert_eq!(backend.get_walks().await.unwrap(), vec![b, a], "{}", name);
    }
}
