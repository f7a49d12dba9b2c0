use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::checklist::{ApplicationKind, PermitCategory};
use super::eligibility::EligibilityForm;
use super::residency::TaxResidencyForm;
use super::service::ToolService;
use crate::i18n::MessageCatalog;

/// Router builder exposing the scoring and checklist tools as JSON endpoints.
pub fn tools_router<C>(service: Arc<ToolService<C>>) -> Router
where
    C: MessageCatalog + 'static,
{
    Router::new()
        .route("/api/v1/tools/eligibility", post(eligibility_handler::<C>))
        .route("/api/v1/tools/tax-residency", post(residency_handler::<C>))
        .route(
            "/api/v1/tools/checklist/:category/:kind",
            get(checklist_handler::<C>),
        )
        .with_state(service)
}

pub(crate) async fn eligibility_handler<C>(
    State(service): State<Arc<ToolService<C>>>,
    axum::Json(form): axum::Json<EligibilityForm>,
) -> Response
where
    C: MessageCatalog + 'static,
{
    match service.score_eligibility(form) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn residency_handler<C>(
    State(service): State<Arc<ToolService<C>>>,
    axum::Json(form): axum::Json<TaxResidencyForm>,
) -> Response
where
    C: MessageCatalog + 'static,
{
    match service.score_residency(form) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn checklist_handler<C>(
    State(service): State<Arc<ToolService<C>>>,
    Path((category, kind)): Path<(String, String)>,
) -> Response
where
    C: MessageCatalog + 'static,
{
    let Some(permit) = PermitCategory::from_slug(&category) else {
        let payload = json!({
            "error": format!("unknown permit category '{category}'"),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    };
    let Some(application) = ApplicationKind::from_slug(&kind) else {
        let payload = json!({
            "error": format!("unknown application kind '{kind}'"),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    };

    match service.checklist(permit, application) {
        Some(document) => (StatusCode::OK, axum::Json(document)).into_response(),
        None => {
            let payload = json!({
                "error": "no checklist is published for this combination yet",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
