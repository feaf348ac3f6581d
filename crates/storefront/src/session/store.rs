//! Single-slot credential store.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::instrument;

use coffee_shop_core::Credential;

use super::storage::{SecureStorage, StorageError};
use crate::error::capture_absorbed;

/// Where the session is in its lifecycle.
///
/// `Unknown -> Loading -> Authenticated | Unauthenticated` at startup, then
/// `Authenticated -> Unauthenticated` only through [`SessionStore::clear`]
/// and `Unauthenticated -> Authenticated` only through [`SessionStore::save`].
/// There is no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    Loading,
    Authenticated(Credential),
    Unauthenticated,
}

impl SessionState {
    /// Still waiting for the startup load to resolve.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Unknown | Self::Loading)
    }

    /// The signed-in credential, if any.
    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Authenticated(credential) => Some(credential),
            _ => None,
        }
    }
}

/// Persists "who is signed in" in one secure storage slot.
///
/// None of the operations fail: storage faults are logged, reported to
/// Sentry and downgraded to "no credential".
pub struct SessionStore {
    storage: Arc<dyn SecureStorage>,
    key: String,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Create a store over `storage`, using slot `key`.
    #[must_use]
    pub fn new(storage: Arc<dyn SecureStorage>, key: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self {
            storage,
            key: key.into(),
            state,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// The signed-in credential, if any.
    #[must_use]
    pub fn current(&self) -> Option<Credential> {
        self.state.borrow().credential().cloned()
    }

    /// Watch lifecycle transitions, e.g. to swap a loading indicator for the
    /// auth flow once the startup load resolves.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Read the persisted credential.
    ///
    /// Resolves to `None` when nothing is stored, when storage fails, or
    /// when the stored record cannot be parsed.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load(&self) -> Option<Credential> {
        self.state.send_replace(SessionState::Loading);

        let credential = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Credential>(&raw) {
                Ok(credential) => Some(credential),
                Err(e) => {
                    let err = StorageError::Corrupt(e.to_string());
                    capture_absorbed(&err, "Stored session is unreadable, treating as signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                capture_absorbed(&err, "Failed to load session, treating as signed out");
                None
            }
        };

        match &credential {
            Some(c) => {
                tracing::info!(user_id = %c.id, "Session restored");
                self.state
                    .send_replace(SessionState::Authenticated(c.clone()));
            }
            None => {
                tracing::debug!("No stored session");
                self.state.send_replace(SessionState::Unauthenticated);
            }
        }

        credential
    }

    /// Replace the persisted credential wholesale.
    ///
    /// The in-memory state switches to `Authenticated` even if persisting
    /// fails; the user then simply has to sign in again next launch.
    #[instrument(skip(self, credential), fields(key = %self.key, user_id = %credential.id))]
    pub async fn save(&self, credential: Credential) {
        match serde_json::to_string(&credential) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(&self.key, &raw).await {
                    capture_absorbed(&err, "Failed to persist session");
                }
            }
            Err(e) => {
                let err = StorageError::Other(e.to_string());
                capture_absorbed(&err, "Failed to serialize session");
            }
        }

        tracing::info!("Session saved");
        self.state.send_replace(SessionState::Authenticated(credential));
    }

    /// Delete the persisted credential.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn clear(&self) {
        if let Err(err) = self.storage.delete(&self.key).await {
            capture_absorbed(&err, "Failed to delete session");
        }

        tracing::info!("Session cleared");
        self.state.send_replace(SessionState::Unauthenticated);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
