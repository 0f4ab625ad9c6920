//! Mock authentication, the signup wizard and per-user application sessions.
//!
//! A login or signup opens an [`AppSession`] holding the user, their selected
//! language, the student profile and the study tracker. Sessions live in a
//! [`SessionStore`] and are addressed by the `x-session-token` header.

pub mod domain;
pub mod router;
pub mod service;
pub mod session;
pub mod signup;

#[cfg(test)]
pub(crate) mod tests;

pub use domain::{Address, Education, StudentProfile, User};
pub use router::account_router;
pub use service::{AccountError, AccountService, LoginRequest, SessionView};
pub use session::{AppSession, SessionError, SessionStore, SessionToken, SESSION_HEADER};
pub use signup::{
    EducationDetails, PersonalDetails, Preferences, SignupError, SignupOutcome, SignupRequest,
    SignupStep, SignupWizard, MIN_PASSWORD_LEN,
};
