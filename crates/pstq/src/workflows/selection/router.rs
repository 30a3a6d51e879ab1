use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::Profile;
use super::service::{FrenchRequest, ProjectionRequest, SelectionService};

/// Router builder exposing scoring, projection, and reference endpoints.
pub fn selection_router(service: Arc<SelectionService>) -> Router {
    Router::new()
        .route("/api/v1/selection/score", post(score_handler))
        .route("/api/v1/selection/projection", post(projection_handler))
        .route("/api/v1/selection/draws", get(draws_handler))
        .route("/api/v1/selection/french", post(french_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<SelectionService>>,
    axum::Json(profile): axum::Json<Profile>,
) -> Response {
    let outcome = service.score(&profile);
    let payload = json!({
        "total": outcome.total_score,
        "audit": outcome.audit,
        "ceilings": outcome.ceilings,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn projection_handler(
    State(service): State<Arc<SelectionService>>,
    axum::Json(request): axum::Json<ProjectionRequest>,
) -> Response {
    match service.project(&request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn draws_handler(State(service): State<Arc<SelectionService>>) -> Response {
    (StatusCode::OK, axum::Json(service.draws())).into_response()
}

pub(crate) async fn french_handler(
    State(service): State<Arc<SelectionService>>,
    axum::Json(request): axum::Json<FrenchRequest>,
) -> Response {
    (StatusCode::OK, axum::Json(service.french(&request))).into_response()
}
