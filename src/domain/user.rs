//! User account rows.

use crate::auth::hash_password;
use serde::{Deserialize, Serialize};

/// A user account as persisted in the store.
///
/// Setup seeds exactly one demo account; real accounts are created by the
/// application's registration flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login email.
    pub email: String,
    /// Unique display name.
    pub username: String,
    /// Password digest, never the plaintext.
    pub hashed_password: String,
    /// Model identifier used by default for this user's requests.
    pub preferred_model: Option<String>,
    /// Whether the account can log in.
    pub is_active: bool,
}

impl User {
    pub fn new(email: &str, username: &str, password: &str, preferred_model: Option<&str>) -> Self {
        User {
            email: email.to_string(),
            username: username.to_string(),
            hashed_password: hash_password(password),
            preferred_model: preferred_model.map(|m| m.to_string()),
            is_active: true,
        }
    }
}

/// The demo account inserted on first setup.
pub fn demo_user() -> User {
    User::new(
        "demo@checkmate.app",
        "demo",
        "demo123",
        Some("groq-llama-3.1-70b"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;

    #[test]
    fn test_demo_user_fields() {
        let user = demo_user();
        assert_eq!(user.email, "demo@checkmate.app");
        assert_eq!(user.username, "demo");
        assert_eq!(user.preferred_model.as_deref(), Some("groq-llama-3.1-70b"));
        assert!(user.is_active);
    }

    #[test]
    fn test_demo_user_password_is_hashed() {
        let user = demo_user();
        assert_ne!(user.hashed_password, "demo123");
        assert!(verify_password("demo123", &user.hashed_password));
    }
}
