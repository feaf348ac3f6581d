//! Unified error handling with Sentry integration.
//!
//! Each module owns its own error enum; `AppError` aggregates them for
//! callers that drive a whole flow (the CLI, screen controllers) and knows
//! which message is safe to show a user.

use thiserror::Error;

use crate::codec::{DecodeError, ValidationError};
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::session::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Product could not be encoded for navigation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Navigation parameter could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Sign-in or sign-up input was rejected.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Secure storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show a user.
    ///
    /// Captures internal faults to Sentry first. Internal details are never
    /// part of the returned text.
    #[must_use]
    pub fn user_message(&self) -> String {
        if matches!(self, Self::Storage(_) | Self::Config(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Application error"
            );
        }

        match self {
            Self::Validation(_) => "This product can't be opened right now".to_string(),
            Self::Decode(_) => "No data available".to_string(),
            Self::Auth(err) => match err {
                AuthError::MissingFields(msg) => (*msg).to_string(),
                AuthError::InvalidEmail(_) => "Invalid email address".to_string(),
            },
            Self::Storage(_) | Self::Config(_) | Self::Internal(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            Self::NotFound(what) => format!("Not found: {what}"),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Report an error that is being absorbed rather than propagated.
///
/// Used at boundaries that promise never to fail (the session store): the
/// fault still reaches Sentry and the logs.
pub fn capture_absorbed<E>(err: &E, context: &str)
where
    E: std::error::Error + ?Sized,
{
    let event_id = sentry::capture_error(err);
    tracing::warn!(
        error = %err,
        sentry_event_id = %event_id,
        "{context}"
    );
}

/// Set the Sentry user context from a user ID.
///
/// Call this after sign-in to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on sign-out to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("favorites", "Added favorite", Some(&[("product_id", "1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
