use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use vistoflow::i18n::EnglishCatalog;
use vistoflow::tools::clickday::{ClickDayForm, ClickDayOutcome, ClickDaySession};
use vistoflow::tools::{tools_router, ToolService};

/// Simulated click-day attempt: the caller reports how long the form took.
#[derive(Debug, Deserialize)]
pub(crate) struct ClickDayAttemptRequest {
    #[serde(default)]
    pub(crate) elapsed_seconds: u32,
    pub(crate) full_name: String,
    pub(crate) passport: String,
    pub(crate) email: String,
    pub(crate) country: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClickDayAttemptResponse {
    pub(crate) outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seconds_left: Option<u32>,
}

pub(crate) fn with_tool_routes(service: Arc<ToolService<EnglishCatalog>>) -> axum::Router {
    tools_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/tools/click-day/attempt",
            axum::routing::post(click_day_endpoint),
        )
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

pub(crate) async fn click_day_endpoint(Json(payload): Json<ClickDayAttemptRequest>) -> Response {
    let opened = Utc::now();
    let session = ClickDaySession::start(opened);
    let submitted = opened + Duration::seconds(i64::from(payload.elapsed_seconds));

    let form = ClickDayForm {
        full_name: payload.full_name,
        passport: payload.passport,
        email: payload.email,
        country: payload.country,
    };

    match session.submit(submitted, &form) {
        Ok(ClickDayOutcome::Won { seconds_left }) => (
            StatusCode::OK,
            Json(ClickDayAttemptResponse {
                outcome: "won",
                seconds_left: Some(seconds_left),
            }),
        )
            .into_response(),
        Ok(ClickDayOutcome::Lost) => (
            StatusCode::OK,
            Json(ClickDayAttemptResponse {
                outcome: "lost",
                seconds_left: None,
            }),
        )
            .into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
