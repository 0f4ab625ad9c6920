use bharat_ai::accounts::{AppSession, SessionError, SessionStore, SessionToken};
use bharat_ai::config::ContentConfig;
use bharat_ai::language::Language;
use bharat_ai::error::AppError;
use bharat_ai::schemes::{CategoryFilter, EligibilityEngine, SchemeCatalog, SchemeDirectory};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Open sessions kept before the oldest one is evicted.
pub(crate) const DEFAULT_SESSION_CAPACITY: usize = 10_000;

#[derive(Default)]
struct SessionTable {
    sessions: HashMap<SessionToken, AppSession>,
    opened: VecDeque<SessionToken>,
}

/// Session store for the mock backend. Logout removes a session; otherwise the oldest
/// sessions are evicted once `capacity` is reached.
#[derive(Clone)]
pub(crate) struct InMemorySessionStore {
    table: Arc<Mutex<SessionTable>>,
    capacity: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }
}

impl InMemorySessionStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Arc::new(Mutex::new(SessionTable::default())),
            capacity: capacity.max(1),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: AppSession) -> Result<AppSession, SessionError> {
        let mut guard = self.table.lock().expect("session mutex poisoned");
        if guard.sessions.contains_key(&session.token) {
            return Err(SessionError::Conflict);
        }
        while guard.sessions.len() >= self.capacity {
            let Some(oldest) = guard.opened.pop_front() else {
                break;
            };
            if guard.sessions.remove(&oldest).is_some() {
                info!(token = %oldest, "session evicted");
            }
        }
        guard.opened.push_back(session.token.clone());
        guard.sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    fn modify<T, E, F>(&self, token: &SessionToken, change: F) -> Result<T, E>
    where
        E: From<SessionError>,
        F: FnOnce(&mut AppSession) -> Result<T, E>,
    {
        let mut guard = self.table.lock().expect("session mutex poisoned");
        let stored = guard
            .sessions
            .get_mut(token)
            .ok_or(SessionError::NotFound)?;
        let mut draft = stored.clone();
        let value = change(&mut draft)?;
        *stored = draft;
        Ok(value)
    }

    fn fetch(&self, token: &SessionToken) -> Result<Option<AppSession>, SessionError> {
        let guard = self.table.lock().expect("session mutex poisoned");
        Ok(guard.sessions.get(token).cloned())
    }

    fn remove(&self, token: &SessionToken) -> Result<Option<AppSession>, SessionError> {
        let mut guard = self.table.lock().expect("session mutex poisoned");
        let removed = guard.sessions.remove(token);
        if removed.is_some() {
            guard.opened.retain(|opened| opened != token);
        }
        Ok(removed)
    }
}

/// Loads the configured catalog file, or the embedded catalog when none is set.
pub(crate) fn scheme_directory(content: &ContentConfig) -> Result<SchemeDirectory, AppError> {
    let catalog = match &content.scheme_catalog {
        Some(path) => {
            let catalog = SchemeCatalog::from_path(path)?;
            info!(path = %path.display(), schemes = catalog.len(), "scheme catalog loaded");
            catalog
        }
        None => SchemeCatalog::standard()?,
    };
    Ok(SchemeDirectory::new(catalog, EligibilityEngine::default()))
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_code(raw).ok_or_else(|| {
        let supported: Vec<&str> = Language::ALL.iter().map(|language| language.code()).collect();
        format!("unsupported language '{raw}' (expected one of {})", supported.join(", "))
    })
}

pub(crate) fn parse_category(raw: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::parse(raw).ok_or_else(|| format!("unknown scheme category '{raw}'"))
}
