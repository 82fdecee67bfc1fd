use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{deserialize_unique_metrics, RawMetricMap};
use super::engine::ScoringEngine;
use super::report::{catalog_view, CatalogEntryView};

/// Body of `POST /api/v1/score`; a `null` value skips that metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "deserialize_unique_metrics")]
    pub metrics: RawMetricMap,
}

/// Router builder exposing the scoring and catalog endpoints.
pub fn scoring_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/metrics", get(catalog_handler))
        .with_state(engine)
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
                "kind": "invalid_payload",
            });
            return (rejection.status(), Json(payload)).into_response();
        }
    };

    match engine.evaluate_raw(&request.metrics) {
        Ok(result) => (StatusCode::OK, Json(result.report())).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "kind": error.kind(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler() -> Json<Vec<CatalogEntryView>> {
    Json(catalog_view())
}
