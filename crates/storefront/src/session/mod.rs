//! Signed-in session persistence.
//!
//! [`SessionStore`] keeps a single [`Credential`](coffee_shop_core::Credential)
//! in a [`SecureStorage`] slot. Storage faults never escape the store:
//! callers only ever observe "signed in as X" or "signed out".

mod storage;
mod store;

pub use storage::{FileSecureStorage, MemorySecureStorage, SecureStorage, StorageError};
pub use store::{SessionState, SessionStore};

/// Secure storage keys.
pub mod keys {
    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "user";
}
