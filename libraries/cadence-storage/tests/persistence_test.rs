//! File-backed persistence tests.

use cadence_core::ListeningStore;
use cadence_storage::{Database, SqliteListeningStore};

#[tokio::test]
async fn listening_time_survives_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("cadence.db").display());

    {
        let db = Database::new(&url).await.expect("create database");
        let store = SqliteListeningStore::new(&db);
        store.save(1800.0).await.expect("save");
    }

    let db = Database::new(&url).await.expect("reopen database");
    let store = SqliteListeningStore::new(&db);
    assert_eq!(store.load().await.expect("load"), 1800.0);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("cadence.db").display());

    Database::new(&url).await.expect("first open");
    Database::new(&url).await.expect("second open runs migrations again");
}
