//! Application state shared across screens.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::favorites::FavoritesRegistry;
use crate::services::auth::AuthService;
use crate::session::{
    FileSecureStorage, MemorySecureStorage, SecureStorage, SessionStore, StorageError,
};

/// Application state shared across all screens.
///
/// This struct is cheaply cloneable via `Arc`. It is the only place the
/// favorites registry and session store are constructed; every consumer
/// receives them from here.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    favorites: FavoritesRegistry,
    session: SessionStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `storage` - Secure storage backing the session slot
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn SecureStorage>) -> Self {
        let session = SessionStore::new(storage, config.session_key.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::builtin(),
                favorites: FavoritesRegistry::new(),
                session,
            }),
        }
    }

    /// State backed by file storage under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the storage directory cannot
    /// be created.
    pub async fn with_file_storage(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage = FileSecureStorage::open(&config.data_dir)
            .await
            .map_err(|e| {
                StorageError::Unavailable(format!("{}: {e}", config.data_dir.display()))
            })?;
        Ok(Self::new(config, Arc::new(storage)))
    }

    /// State backed by in-process storage; nothing survives a restart.
    #[must_use]
    pub fn in_memory(config: StorefrontConfig) -> Self {
        Self::new(config, Arc::new(MemorySecureStorage::new()))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the favorites registry.
    #[must_use]
    pub fn favorites(&self) -> &FavoritesRegistry {
        &self.inner.favorites
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Authentication service bound to this state's session store.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.session)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use coffee_shop_core::ProductId;

    use super::*;

    #[test]
    fn test_clones_share_registry() {
        let state = AppState::in_memory(StorefrontConfig::default());
        let other = state.clone();

        let latte = state.catalog().get(&ProductId::new("5")).unwrap().clone();
        state.favorites().add(latte);

        assert!(other.favorites().contains(&ProductId::new("5")));
    }

    #[test]
    fn test_separate_states_are_isolated() {
        let first = AppState::in_memory(StorefrontConfig::default());
        let second = AppState::in_memory(StorefrontConfig::default());

        let latte = first.catalog().get(&ProductId::new("5")).unwrap().clone();
        first.favorites().add(latte);

        assert!(second.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_file_storage_uses_configured_slot() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = StorefrontConfig {
            data_dir: temp_dir.path().to_path_buf(),
            session_key: "profile".to_string(),
            ..StorefrontConfig::default()
        };
        let state = AppState::with_file_storage(config).await.unwrap();

        state
            .auth()
            .sign_in("a@a.com", &secrecy::SecretString::from("pw"))
            .await
            .unwrap();

        assert!(temp_dir.path().join("keyring").join("profile.json").exists());
    }
}
