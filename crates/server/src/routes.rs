//! HTTP routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use crate::error::ServiceError;
use crate::presenter::{AwardsResultResponse, YearFormat};
use crate::service::AwardsService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: AwardsService,
    pub year_format: YearFormat,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/movie/awards-result", get(awards_result))
        .with_state(state)
}

async fn awards_result(
    State(state): State<AppState>,
) -> Result<Json<AwardsResultResponse>, ServiceError> {
    let summary = state.service.awards_summary().await?;
    Ok(Json(AwardsResultResponse::from_summary(
        &summary,
        state.year_format,
    )))
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!("Awards request failed: {}", self);
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
