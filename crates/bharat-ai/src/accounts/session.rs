use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::domain::{StudentProfile, User};
use crate::language::Language;
use crate::student::StudentTracker;

/// Request header carrying the session token. The token is the only credential, so it is
/// random rather than sequential.
pub const SESSION_HEADER: &str = "x-session-token";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub(crate) fn issue() -> Self {
        let secret: u128 = rand::rng().random();
        Self(format!("session-{secret:032x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the application knows about one signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSession {
    pub token: SessionToken,
    pub user: User,
    pub language: Language,
    pub profile: Option<StudentProfile>,
    pub tracker: StudentTracker,
}

impl AppSession {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn profile(&self) -> Option<&StudentProfile> {
        self.profile.as_ref()
    }

    pub fn tracker(&self) -> &StudentTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut StudentTracker {
        &mut self.tracker
    }
}

/// Storage interface for open sessions.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: AppSession) -> Result<AppSession, SessionError>;
    /// Applies `change` to the stored session while no other writer can touch it. The stored
    /// session is replaced only when `change` succeeds; a missing token is `SessionError::NotFound`.
    fn modify<T, E, F>(&self, token: &SessionToken, change: F) -> Result<T, E>
    where
        E: From<SessionError>,
        F: FnOnce(&mut AppSession) -> Result<T, E>;
    fn fetch(&self, token: &SessionToken) -> Result<Option<AppSession>, SessionError>;
    fn remove(&self, token: &SessionToken) -> Result<Option<AppSession>, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_are_unique_and_prefixed() {
        let first = SessionToken::issue();
        let second = SessionToken::issue();
        assert_ne!(first, second);
        assert!(first.as_str().starts_with("session-"));
        assert_eq!(first.to_string().len(), "session-".len() + 32);
    }

    #[test]
    fn consecutive_tokens_are_not_adjacent() {
        let first = SessionToken::issue();
        let second = SessionToken::issue();
        let value = |token: &SessionToken| {
            u128::from_str_radix(token.as_str().trim_start_matches("session-"), 16)
                .expect("hex token")
        };
        assert_ne!(value(&second).wrapping_sub(1), value(&first));
        assert_ne!(value(&second).wrapping_add(1), value(&first));
    }
}
