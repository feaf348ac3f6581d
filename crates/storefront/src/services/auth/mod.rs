//! Authentication service.
//!
//! There is no authentication backend yet. Sign-in and sign-up accept any
//! non-blank input and mint a local stand-in credential, which is then
//! persisted through [`SessionStore`]. A real backend replaces only the
//! minting step; the store's load/save/clear contract stays the same.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use coffee_shop_core::{Credential, Email, UserId};

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::session::SessionStore;

/// Display name given to every signed-in (not signed-up) user.
const SIGN_IN_NAME: &str = "Test User";

/// Id given to every signed-in (not signed-up) user.
const SIGN_IN_ID: &str = "1";

/// Authentication service.
///
/// Handles sign-in, sign-up and sign-out.
pub struct AuthService<'a> {
    session: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(session: &'a SessionStore) -> Self {
        Self { session }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is blank.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    pub async fn sign_in(&self, email: &str, password: &SecretString) -> Result<Credential, AuthError> {
        if is_blank(email) || password.expose_secret().is_empty() {
            return Err(AuthError::MissingFields(
                "Please enter both email and password",
            ));
        }
        let email = Email::parse(email)?;

        let credential = Credential::new(SIGN_IN_ID, SIGN_IN_NAME, email);
        self.start_session(credential.clone()).await;
        Ok(credential)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is blank.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<Credential, AuthError> {
        if is_blank(name) || is_blank(email) || password.expose_secret().is_empty() {
            return Err(AuthError::MissingFields("Please fill in all fields"));
        }
        let email = Email::parse(email)?;

        let id = UserId::new(Uuid::new_v4().simple().to_string());
        let credential = Credential::new(id, name.trim(), email);
        self.start_session(credential.clone()).await;
        Ok(credential)
    }

    /// Sign out, forgetting the persisted credential.
    pub async fn sign_out(&self) {
        self.session.clear().await;
        clear_sentry_user();
    }

    async fn start_session(&self, credential: Credential) {
        set_sentry_user(&credential.id, Some(credential.email.as_str()));
        tracing::info!(user_id = %credential.id, "Signed in");
        self.session.save(credential).await;
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::{MemorySecureStorage, SessionState};

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemorySecureStorage::new()), "user")
    }

    fn password(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[tokio::test]
    async fn test_sign_in_mints_stand_in_credential() {
        let session = store();
        let auth = AuthService::new(&session);

        let credential = auth.sign_in("a@a.com", &password("pw")).await.unwrap();

        assert_eq!(credential.id.as_str(), "1");
        assert_eq!(credential.name, "Test User");
        assert_eq!(credential.email.as_str(), "a@a.com");
        assert_eq!(session.load().await, Some(credential));
    }

    #[tokio::test]
    async fn test_sign_in_requires_both_fields() {
        let session = store();
        let auth = AuthService::new(&session);

        let err = auth.sign_in("a@a.com", &password("")).await.unwrap_err();
        assert_eq!(
            err,
            AuthError::MissingFields("Please enter both email and password")
        );
        assert!(auth.sign_in("  ", &password("pw")).await.is_err());
        assert_eq!(session.state(), SessionState::Unknown);
    }

    #[tokio::test]
    async fn test_sign_in_rejects_malformed_email() {
        let session = store();
        let auth = AuthService::new(&session);
        assert!(matches!(
            auth.sign_in("nobody", &password("pw")).await,
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_sign_up_mints_fresh_ids() {
        let session = store();
        let auth = AuthService::new(&session);

        let first = auth.sign_up(" Ada ", "ada@example.com", &password("pw")).await.unwrap();
        let second = auth.sign_up("Bob", "bob@example.com", &password("pw")).await.unwrap();

        assert_eq!(first.name, "Ada");
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(session.current(), Some(second));
    }

    #[tokio::test]
    async fn test_sign_up_requires_all_fields() {
        let session = store();
        let auth = AuthService::new(&session);
        let err = auth.sign_up("", "a@a.com", &password("pw")).await.unwrap_err();
        assert_eq!(err, AuthError::MissingFields("Please fill in all fields"));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let session = store();
        let auth = AuthService::new(&session);
        auth.sign_in("a@a.com", &password("pw")).await.unwrap();

        auth.sign_out().await;

        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert!(session.load().await.is_none());
    }
}
