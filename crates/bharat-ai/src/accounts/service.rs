use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{StudentProfile, User};
use super::session::{AppSession, SessionError, SessionStore, SessionToken};
use super::signup::{SignupError, SignupRequest, SignupWizard};
use crate::language::Language;
use crate::student::{StudentTracker, TrackerError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Session summary returned by the auth and profile endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub token: SessionToken,
    pub user: User,
    pub language: Language,
    pub language_name: &'static str,
    pub profile: Option<StudentProfile>,
}

impl From<&AppSession> for SessionView {
    fn from(session: &AppSession) -> Self {
        Self {
            token: session.token.clone(),
            user: session.user.clone(),
            language: session.language,
            language_name: session.language.native_name(),
            profile: session.profile.clone(),
        }
    }
}

/// Mock authentication over a session store. Any non-empty credentials are accepted.
pub struct AccountService<S> {
    store: Arc<S>,
    default_language: Language,
}

impl<S> AccountService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, default_language: Language) -> Self {
        Self {
            store,
            default_language,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn login(&self, request: LoginRequest) -> Result<AppSession, AccountError> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(AccountError::MissingCredentials);
        }
        let user = User::new("User Name", request.email);
        self.open(user, None)
    }

    pub fn signup(&self, request: SignupRequest) -> Result<AppSession, AccountError> {
        let outcome = SignupWizard::run(request)?;
        self.open(outcome.user, Some(outcome.profile))
    }

    pub fn logout(&self, token: &SessionToken) -> Result<(), AccountError> {
        match self.store.remove(token)? {
            Some(session) => {
                info!(token = %token, email = %session.user.email, "session closed");
                Ok(())
            }
            None => Err(AccountError::Unauthorized),
        }
    }

    pub fn session(&self, token: &SessionToken) -> Result<AppSession, AccountError> {
        self.store.fetch(token)?.ok_or(AccountError::Unauthorized)
    }

    pub fn set_language(
        &self,
        token: &SessionToken,
        language: Language,
    ) -> Result<AppSession, AccountError> {
        self.update_session(token, |session| {
            session.language = language;
            Ok(session.clone())
        })
    }

    /// Applies `change` to the stored session atomically; a failed change leaves it untouched.
    pub fn update_session<T, F>(&self, token: &SessionToken, change: F) -> Result<T, AccountError>
    where
        F: FnOnce(&mut AppSession) -> Result<T, AccountError>,
    {
        self.store
            .modify(token, change)
            .map_err(|error| match error {
                AccountError::Store(SessionError::NotFound) => AccountError::Unauthorized,
                other => other,
            })
    }

    fn open(
        &self,
        user: User,
        profile: Option<StudentProfile>,
    ) -> Result<AppSession, AccountError> {
        let session = AppSession {
            token: SessionToken::issue(),
            user,
            language: self.default_language,
            profile,
            tracker: StudentTracker::with_demo_data(Utc::now()),
        };
        let stored = self.store.insert(session)?;
        info!(token = %stored.token, email = %stored.user.email, "session opened");
        Ok(stored)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Please fill in all fields")]
    MissingCredentials,
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error("missing or unknown session token")]
    Unauthorized,
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Store(#[from] SessionError),
}
