use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::{language_options, strings_for, Language};

/// Language picker and UI string endpoints.
pub fn language_router() -> Router {
    Router::new()
        .route("/api/v1/languages", get(list_handler))
        .route("/api/v1/languages/:code/strings", get(strings_handler))
}

pub(crate) async fn list_handler() -> Response {
    (StatusCode::OK, Json(language_options())).into_response()
}

pub(crate) async fn strings_handler(Path(code): Path<String>) -> Response {
    match Language::from_code(&code) {
        Some(language) => {
            let payload = json!({
                "language": language,
                "strings": strings_for(language),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unsupported language code '{code}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
