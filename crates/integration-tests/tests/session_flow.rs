//! Integration tests for session persistence.
//!
//! Uses file-backed secure storage in a temporary directory and rebuilds
//! `AppState` to simulate an app restart.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use coffee_shop_core::{Credential, Email};
use coffee_shop_storefront::config::StorefrontConfig;
use coffee_shop_storefront::session::SessionState;
use coffee_shop_storefront::state::AppState;
use secrecy::SecretString;
use tempfile::TempDir;

fn config(dir: &TempDir) -> StorefrontConfig {
    StorefrontConfig {
        data_dir: dir.path().to_path_buf(),
        ..StorefrontConfig::default()
    }
}

fn credential() -> Credential {
    Credential::new("1", "A", Email::parse("a@a.com").unwrap())
}

// =============================================================================
// Load / Save / Clear
// =============================================================================

#[tokio::test]
async fn test_load_empty_then_save_and_load() {
    let dir = TempDir::new().unwrap();
    let state = AppState::with_file_storage(config(&dir)).await.unwrap();

    assert!(state.session().load().await.is_none());
    assert_eq!(state.session().state(), SessionState::Unauthenticated);

    state.session().save(credential()).await;

    assert_eq!(state.session().load().await, Some(credential()));
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let state = AppState::with_file_storage(config(&dir)).await.unwrap();
        state.session().save(credential()).await;
    }

    let restarted = AppState::with_file_storage(config(&dir)).await.unwrap();
    assert_eq!(restarted.session().state(), SessionState::Unknown);

    let loaded = restarted.session().load().await;

    assert_eq!(loaded, Some(credential()));
    assert_eq!(
        restarted.session().state(),
        SessionState::Authenticated(credential())
    );
}

#[tokio::test]
async fn test_clear_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let state = AppState::with_file_storage(config(&dir)).await.unwrap();
        state.session().save(credential()).await;
        state.session().clear().await;
    }

    let restarted = AppState::with_file_storage(config(&dir)).await.unwrap();
    assert!(restarted.session().load().await.is_none());
}

#[tokio::test]
async fn test_stored_record_shape() {
    let dir = TempDir::new().unwrap();
    let state = AppState::with_file_storage(config(&dir)).await.unwrap();
    state.session().save(credential()).await;

    let path = dir.path().join("keyring").join("user.json");
    let raw = tokio::fs::read_to_string(path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        value,
        serde_json::json!({"id": "1", "name": "A", "email": "a@a.com"})
    );
}

#[tokio::test]
async fn test_corrupt_record_reads_as_signed_out() {
    let dir = TempDir::new().unwrap();
    let state = AppState::with_file_storage(config(&dir)).await.unwrap();
    let path = dir.path().join("keyring").join("user.json");
    tokio::fs::write(&path, "{not json").await.unwrap();

    assert!(state.session().load().await.is_none());
    assert_eq!(state.session().state(), SessionState::Unauthenticated);
}

// =============================================================================
// Auth Flow
// =============================================================================

#[tokio::test]
async fn test_sign_in_then_restart() {
    let dir = TempDir::new().unwrap();
    {
        let state = AppState::with_file_storage(config(&dir)).await.unwrap();
        state
            .auth()
            .sign_in("a@a.com", &SecretString::from("pw"))
            .await
            .unwrap();
    }

    let restarted = AppState::with_file_storage(config(&dir)).await.unwrap();
    let loaded = restarted.session().load().await.unwrap();
    assert_eq!(loaded.name, "Test User");
    assert_eq!(loaded.email.as_str(), "a@a.com");
}

#[tokio::test]
async fn test_sign_out_then_restart() {
    let dir = TempDir::new().unwrap();
    {
        let state = AppState::with_file_storage(config(&dir)).await.unwrap();
        let auth = state.auth();
        auth.sign_up("Ada", "ada@example.com", &SecretString::from("pw"))
            .await
            .unwrap();
        auth.sign_out().await;
    }

    let restarted = AppState::with_file_storage(config(&dir)).await.unwrap();
    assert!(restarted.session().load().await.is_none());
}

#[tokio::test]
async fn test_state_changes_are_observable() {
    let dir = TempDir::new().unwrap();
    let state = AppState::with_file_storage(config(&dir)).await.unwrap();
    let mut watcher = state.session().subscribe();

    state.session().save(credential()).await;

    watcher.changed().await.unwrap();
    assert_eq!(
        *watcher.borrow_and_update(),
        SessionState::Authenticated(credential())
    );
}
