//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// These are input problems shown on the form. Storage faults never reach
/// this level; the session store absorbs them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// One or more form fields are blank.
    #[error("{0}")]
    MissingFields(&'static str),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] coffee_shop_core::EmailError),
}
