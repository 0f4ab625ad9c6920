use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::{category_options, CategoryFilter, SchemeFilter};
use super::domain::{SchemeId, OCCUPATION_OPTIONS, SOCIAL_CATEGORY_OPTIONS};
use super::intake::EligibilityForm;
use super::service::SchemeDirectory;

/// Router builder exposing catalog browsing and the eligibility checker.
pub fn scheme_router(directory: Arc<SchemeDirectory>) -> Router {
    Router::new()
        .route("/api/v1/schemes", get(browse_handler))
        .route("/api/v1/schemes/overview", get(overview_handler))
        .route("/api/v1/schemes/categories", get(categories_handler))
        .route("/api/v1/schemes/eligibility", post(eligibility_handler))
        .route("/api/v1/schemes/:scheme_id", get(detail_handler))
        .with_state(directory)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BrowseParams {
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) q: Option<String>,
}

pub(crate) async fn browse_handler(
    State(directory): State<Arc<SchemeDirectory>>,
    Query(params): Query<BrowseParams>,
) -> Response {
    let category = match params.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(raw) => match CategoryFilter::parse(raw) {
            Some(filter) => filter,
            None => {
                let payload = json!({ "error": format!("unknown scheme category '{raw}'") });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
    };
    let filter = SchemeFilter {
        category,
        query: params.q.unwrap_or_default(),
    };

    let schemes = directory.catalog().browse(&filter);
    let payload = json!({
        "count": schemes.len(),
        "schemes": schemes,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn overview_handler(State(directory): State<Arc<SchemeDirectory>>) -> Response {
    (StatusCode::OK, Json(directory.catalog().overview())).into_response()
}

pub(crate) async fn categories_handler() -> Response {
    let labelled = |options: &[(&'static str, &'static str)]| -> Vec<serde_json::Value> {
        options
            .iter()
            .map(|(value, label)| json!({ "value": value, "label": label }))
            .collect()
    };
    let payload = json!({
        "categories": category_options(),
        "occupations": labelled(&OCCUPATION_OPTIONS),
        "social_categories": labelled(&SOCIAL_CATEGORY_OPTIONS),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn detail_handler(
    State(directory): State<Arc<SchemeDirectory>>,
    Path(scheme_id): Path<u32>,
) -> Response {
    match directory.catalog().get(SchemeId(scheme_id)) {
        Some(scheme) => (StatusCode::OK, Json(scheme.clone())).into_response(),
        None => {
            let payload = json!({ "error": format!("scheme {scheme_id} not found") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn eligibility_handler(
    State(directory): State<Arc<SchemeDirectory>>,
    Json(form): Json<EligibilityForm>,
) -> Response {
    match directory.check(form) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
