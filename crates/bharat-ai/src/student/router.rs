use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;

use super::resources::StudyResources;
use super::tracker::{
    NewStudySession, NewTestResult, NewWellnessEntry, StudySession, TestResult, WeeklySummary,
    WellnessEntry,
};
use crate::accounts::router::{error_response, session_token};
use crate::accounts::{AccountService, SessionStore};

/// Router builder for the per-session study tracker and the static study content.
pub fn student_router<S>(service: Arc<AccountService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/student/summary", get(summary_handler::<S>))
        .route("/api/v1/student/sessions", post(add_session_handler::<S>))
        .route(
            "/api/v1/student/sessions/:session_id/complete",
            post(complete_session_handler::<S>),
        )
        .route("/api/v1/student/tests", post(add_test_handler::<S>))
        .route("/api/v1/student/wellness", post(add_wellness_handler::<S>))
        .route("/api/v1/student/resources", get(resources_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct StudentSummary {
    summary: WeeklySummary,
    study_sessions: Vec<StudySession>,
    test_results: Vec<TestResult>,
    wellness_entries: Vec<WellnessEntry>,
}

pub(crate) async fn summary_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
) -> Response
where
    S: SessionStore + 'static,
{
    let session = match session_token(&headers).and_then(|token| service.session(&token)) {
        Ok(session) => session,
        Err(error) => return error_response(error),
    };
    let tracker = session.tracker();
    let payload = StudentSummary {
        summary: tracker.weekly_summary(Utc::now()),
        study_sessions: tracker.study_sessions().to_vec(),
        test_results: tracker.test_results().to_vec(),
        wellness_entries: tracker.wellness_entries().to_vec(),
    };
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn add_session_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
    Json(request): Json<NewStudySession>,
) -> Response
where
    S: SessionStore + 'static,
{
    let result = session_token(&headers).and_then(|token| {
        service.update_session(&token, |session| {
            let added = session
                .tracker_mut()
                .add_study_session(request, Utc::now())?;
            Ok(added.clone())
        })
    });
    match result {
        Ok(added) => (StatusCode::CREATED, Json(added)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_session_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let result = session_token(&headers).and_then(|token| {
        service.update_session(&token, |session| {
            let completed = session.tracker_mut().complete_study_session(&session_id)?;
            Ok(completed.clone())
        })
    });
    match result {
        Ok(completed) => (StatusCode::OK, Json(completed)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_test_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
    Json(request): Json<NewTestResult>,
) -> Response
where
    S: SessionStore + 'static,
{
    let result = session_token(&headers).and_then(|token| {
        service.update_session(&token, |session| {
            let added = session.tracker_mut().add_test_result(request, Utc::now())?;
            Ok(added.clone())
        })
    });
    match result {
        Ok(added) => (StatusCode::CREATED, Json(added)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_wellness_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    headers: HeaderMap,
    Json(request): Json<NewWellnessEntry>,
) -> Response
where
    S: SessionStore + 'static,
{
    let result = session_token(&headers).and_then(|token| {
        service.update_session(&token, |session| {
            let added = session
                .tracker_mut()
                .add_wellness_entry(request, Utc::now())?;
            Ok(added.clone())
        })
    });
    match result {
        Ok(added) => (StatusCode::CREATED, Json(added)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn resources_handler() -> Response {
    (StatusCode::OK, Json(StudyResources::standard())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::tests::common::{
        build_service, get_request, json_request, read_json_body, signup_request,
    };
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn summary_reports_seeded_history() {
        let (service, _) = build_service();
        let session = service.signup(signup_request()).expect("signup succeeds");

        let response = student_router(service)
            .oneshot(get_request("/api/v1/student/summary", Some(&session.token)))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["summary"]["study_hours"], json!(1.8));
        assert_eq!(payload["summary"]["progress_pct"], json!(67));
        assert_eq!(payload["summary"]["average_mood"], json!(4.0));
        assert_eq!(payload["wellness_entries"].as_array().map(Vec::len), Some(7));
    }

    #[tokio::test]
    async fn completing_a_session_is_persisted() {
        let (service, _) = build_service();
        let session = service.signup(signup_request()).expect("signup succeeds");
        let router = student_router(service.clone());

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/student/sessions/3/complete",
                Some(&session.token),
                json!({}),
            ))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let stored = service.session(&session.token).expect("session stored");
        assert_eq!(stored.tracker().weekly_progress(Utc::now()), 100);

        let missing = router
            .oneshot(json_request(
                "POST",
                "/api/v1/student/sessions/77/complete",
                Some(&session.token),
                json!({}),
            ))
            .await
            .expect("route executes");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wellness_entries_are_validated() {
        let (service, _) = build_service();
        let session = service.signup(signup_request()).expect("signup succeeds");
        let router = student_router(service);

        let rejected = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/student/wellness",
                Some(&session.token),
                json!({ "mood": 0 }),
            ))
            .await
            .expect("route executes");
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let accepted = router
            .oneshot(json_request(
                "POST",
                "/api/v1/student/wellness",
                Some(&session.token),
                json!({ "mood": 5, "note": "cleared the mock test" }),
            ))
            .await
            .expect("route executes");
        assert_eq!(accepted.status(), StatusCode::CREATED);
        let payload = read_json_body(accepted).await;
        assert_eq!(payload["id"], json!("8"));
    }

    #[tokio::test]
    async fn tracker_routes_require_session() {
        let (service, _) = build_service();

        let response = student_router(service)
            .oneshot(json_request(
                "POST",
                "/api/v1/student/tests",
                None,
                json!({ "subject": "Science", "score": 40, "total_marks": 50 }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn resources_are_public() {
        let (service, _) = build_service();

        let response = student_router(service)
            .oneshot(get_request("/api/v1/student/resources", None))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["doubts"][1]["status"], json!("pending"));
    }
}
