use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use bharat_ai::accounts::{account_router, AccountService, SessionStore};
use bharat_ai::assistant::{chat_router, ChatAssistant};
use bharat_ai::career::career_router;
use bharat_ai::language::{language_router, Language};
use bharat_ai::schemes::{scheme_router, SchemeDirectory};
use bharat_ai::student::student_router;
use serde_json::json;
use std::sync::Arc;

/// Shared services behind the feature routers.
pub(crate) struct FeatureServices<S> {
    pub(crate) directory: Arc<SchemeDirectory>,
    pub(crate) assistant: Arc<ChatAssistant>,
    pub(crate) accounts: Arc<AccountService<S>>,
    pub(crate) default_language: Language,
}

pub(crate) fn with_feature_routes<S>(services: FeatureServices<S>) -> axum::Router
where
    S: SessionStore + 'static,
{
    let FeatureServices {
        directory,
        assistant,
        accounts,
        default_language,
    } = services;

    scheme_router(directory)
        .merge(chat_router(assistant, default_language))
        .merge(language_router())
        .merge(account_router(accounts.clone()))
        .merge(student_router(accounts))
        .merge(career_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
