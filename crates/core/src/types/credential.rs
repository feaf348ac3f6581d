//! Signed-in session credential.
//!
//! The single record kept in secure storage to remember who is signed in.
//! It is replaced wholesale on sign-in and deleted wholesale on sign-out;
//! there are no partial updates.

use serde::{Deserialize, Serialize};

use crate::types::{Email, UserId};

/// Locally persisted stand-in credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Sign-in email address.
    pub email: Email,
}

impl Credential {
    /// Create a credential.
    #[must_use]
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: Email) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let credential = Credential::new("1", "A", Email::parse("a@a.com").unwrap());
        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"A","email":"a@a.com"}"#);
    }

    #[test]
    fn test_rejects_invalid_email_on_read() {
        let result: Result<Credential, _> =
            serde_json::from_str(r#"{"id":"1","name":"A","email":"nope"}"#);
        assert!(result.is_err());
    }
}
