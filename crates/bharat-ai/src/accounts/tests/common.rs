use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::accounts::{
    AccountService, AppSession, EducationDetails, PersonalDetails, Preferences, SessionError,
    SessionStore, SessionToken, SignupRequest, SESSION_HEADER,
};
use crate::language::Language;

#[derive(Default, Clone)]
pub(crate) struct MemoryStore {
    pub(crate) sessions: Arc<Mutex<HashMap<SessionToken, AppSession>>>,
}

impl MemoryStore {
    pub(crate) fn len(&self) -> usize {
        self.sessions.lock().expect("session mutex poisoned").len()
    }
}

impl SessionStore for MemoryStore {
    fn insert(&self, session: AppSession) -> Result<AppSession, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.contains_key(&session.token) {
            return Err(SessionError::Conflict);
        }
        guard.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    fn modify<T, E, F>(&self, token: &SessionToken, change: F) -> Result<T, E>
    where
        E: From<SessionError>,
        F: FnOnce(&mut AppSession) -> Result<T, E>,
    {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let stored = guard.get_mut(token).ok_or(SessionError::NotFound)?;
        let mut draft = stored.clone();
        let value = change(&mut draft)?;
        *stored = draft;
        Ok(value)
    }

    fn fetch(&self, token: &SessionToken) -> Result<Option<AppSession>, SessionError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(token).cloned())
    }

    fn remove(&self, token: &SessionToken) -> Result<Option<AppSession>, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.remove(token))
    }
}

pub(crate) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _session: AppSession) -> Result<AppSession, SessionError> {
        Err(SessionError::Unavailable("store offline".to_string()))
    }

    fn modify<T, E, F>(&self, _token: &SessionToken, _change: F) -> Result<T, E>
    where
        E: From<SessionError>,
        F: FnOnce(&mut AppSession) -> Result<T, E>,
    {
        Err(SessionError::Unavailable("store offline".to_string()).into())
    }

    fn fetch(&self, _token: &SessionToken) -> Result<Option<AppSession>, SessionError> {
        Err(SessionError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _token: &SessionToken) -> Result<Option<AppSession>, SessionError> {
        Err(SessionError::Unavailable("store offline".to_string()))
    }
}

pub(crate) fn build_service() -> (Arc<AccountService<MemoryStore>>, MemoryStore) {
    let store = MemoryStore::default();
    let service = AccountService::new(Arc::new(store.clone()), Language::English);
    (Arc::new(service), store)
}

pub(crate) fn signup_request() -> SignupRequest {
    SignupRequest {
        personal: PersonalDetails {
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.in".to_string(),
            password: "kisan123".to_string(),
            gender: Some("male".to_string()),
            ..PersonalDetails::default()
        },
        education: EducationDetails {
            current_level: "Undergraduate".to_string(),
            institution: "Delhi University".to_string(),
            field_of_study: Some("Commerce".to_string()),
            ..EducationDetails::default()
        },
        preferences: Preferences {
            state: Some("Delhi".to_string()),
            interests: "finance, cricket".to_string(),
            goals: "CA exam".to_string(),
            ..Preferences::default()
        },
    }
}

pub(crate) fn json_request(
    method: &str,
    uri: &str,
    token: Option<&SessionToken>,
    body: Value,
) -> Request<axum::body::Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(SESSION_HEADER, token.as_str());
    }
    builder
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

pub(crate) fn get_request(uri: &str, token: Option<&SessionToken>) -> Request<axum::body::Body> {
    let mut builder = Request::get(uri);
    if let Some(token) = token {
        builder = builder.header(SESSION_HEADER, token.as_str());
    }
    builder
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
