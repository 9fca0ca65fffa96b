//! Local stand-in for the hosted sign-in flow.
//!
//! The session only tracks who is signed in; the engine never consults it.
//! Persistence is gated on `can_persist()`.

use log::info;
use serde::Serialize;
use uuid::Uuid;

/// Name recorded on creations when the user has no display name.
pub const ANONYMOUS_NAME: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
    pub is_anonymous: bool,
}

impl User {
    /// Display name, or `Anonymous` when absent or blank.
    pub fn name_or_anonymous(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Signs in a named account, replacing any current user.
    pub fn sign_in(&mut self, display_name: &str) -> &User {
        let display_name = Some(display_name.trim().to_string()).filter(|name| !name.is_empty());
        self.replace_user(User {
            id: Uuid::new_v4().to_string(),
            display_name,
            is_anonymous: false,
        })
    }

    /// Signs in a guest account that may browse but not save.
    pub fn sign_in_anonymously(&mut self) -> &User {
        self.replace_user(User {
            id: Uuid::new_v4().to_string(),
            display_name: None,
            is_anonymous: true,
        })
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("event=sign_out module=auth status=ok user_id={}", user.id);
        }
    }

    /// Whether saving creations is allowed.
    pub fn can_persist(&self) -> bool {
        self.user.as_ref().is_some_and(|user| !user.is_anonymous)
    }

    fn replace_user(&mut self, user: User) -> &User {
        info!(
            "event=sign_in module=auth status=ok user_id={} anonymous={}",
            user.id, user.is_anonymous
        );
        self.user.insert(user)
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthSession, ANONYMOUS_NAME};

    #[test]
    fn signed_out_session_cannot_persist() {
        let session = AuthSession::new();
        assert!(!session.is_signed_in());
        assert!(!session.can_persist());
    }

    #[test]
    fn named_sign_in_can_persist_until_sign_out() {
        let mut session = AuthSession::new();
        let user_name = session.sign_in("  Marie Curie ").name_or_anonymous().to_string();
        assert_eq!(user_name, "Marie Curie");
        assert!(session.can_persist());

        session.sign_out();
        assert!(session.user().is_none());
        assert!(!session.can_persist());
    }

    #[test]
    fn anonymous_and_blank_names_fall_back() {
        let mut session = AuthSession::new();
        assert!(session.sign_in_anonymously().is_anonymous);
        assert!(!session.can_persist());

        assert_eq!(session.sign_in("   ").name_or_anonymous(), ANONYMOUS_NAME);
        assert!(session.can_persist());
    }
}
