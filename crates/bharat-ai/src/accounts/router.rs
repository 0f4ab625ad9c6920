use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{AccountError, AccountService, LoginRequest, SessionView};
use super::session::{SessionError, SessionStore, SessionToken, SESSION_HEADER};
use super::signup::SignupRequest;
use crate::language::Language;

/// Router builder for the mock auth and profile endpoints.
pub fn account_router<S>(service: Arc<AccountService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/auth/login", post(login_handler::<S>))
        .route("/api/v1/auth/signup", post(signup_handler::<S>))
        .route("/api/v1/auth/logout", post(logout_handler::<S>))
        .route("/api/v1/profile", get(profile_handler::<S>))
        .route("/api/v1/profile/language", put(language_handler::<S>))
        .with_state(service)
}

/// Reads the session token header; a missing or blank header is unauthorized.
pub(crate) fn session_token(headers: &HeaderMap) -> Result<SessionToken, AccountError> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| SessionToken(value.to_string()))
        .ok_or(AccountError::Unauthorized)
}

pub(crate) fn error_response(error: AccountError) -> Response {
    let status = match &error {
        AccountError::MissingCredentials | AccountError::Signup(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AccountError::Unauthorized => StatusCode::UNAUTHORIZED,
        AccountError::Tracker(crate::student::TrackerError::SessionNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        AccountError::Tracker(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AccountError::Store(SessionError::Conflict) => StatusCode::CONFLICT,
        AccountError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn login_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.login(request) {
        Ok(session) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn signup_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Json(request): Json<SignupRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.signup(request) {
        Ok(session) => (StatusCode::CREATED, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn logout_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: SessionStore + 'static,
{
    match session_token(&headers).and_then(|token| service.logout(&token)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: SessionStore + 'static,
{
    match session_token(&headers).and_then(|token| service.session(&token)) {
        Ok(session) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageChange {
    pub(crate) language: Language,
}

pub(crate) async fn language_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
    Json(change): Json<LanguageChange>,
) -> Response
where
    S: SessionStore + 'static,
{
    match session_token(&headers).and_then(|token| service.set_language(&token, change.language))
    {
        Ok(session) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}
