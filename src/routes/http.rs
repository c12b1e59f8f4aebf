//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.

use std::sync::Arc;
use axum::{extract::{rejection::JsonRejection, State}, Json, response::IntoResponse};
use tracing::{info, instrument, warn};

use crate::domain::Question;
use crate::logic::submit_answer;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_start(State(state): State<Arc<AppState>>) -> Json<StartOut> {
  let first = state.store.first();
  info!(target: "interview_backend", id = first.id, "Interview started");
  Json(StartOut::from(first))
}

#[instrument(level = "info", skip(state))]
pub async fn http_questions(State(state): State<Arc<AppState>>) -> Json<Vec<Question>> {
  Json(state.store.all().to_vec())
}

/// Body rejections (bad JSON, wrong content type) are answered as JSON errors too.
#[instrument(level = "info", skip(state, body))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  body: Result<Json<AnswerIn>, JsonRejection>,
) -> Result<Json<AnswerOut>, ApiError> {
  let Json(body) = body.map_err(|rejection| {
    warn!(target: "interview_backend", status = %rejection.status(), "Rejected answer body");
    ApiError::Body(rejection)
  })?;
  submit_answer(&state, body.question_id(), &body.answer).await.map(Json)
}
