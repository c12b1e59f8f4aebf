//! HTTP request/response DTOs (serde ready).
//! Field names are part of the public contract with the frontend.

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::Question;

#[derive(Debug, Serialize)]
pub struct StartOut {
  pub question_id: u32,
  pub question: String,
}

impl From<&Question> for StartOut {
  fn from(q: &Question) -> Self {
    Self { question_id: q.id, question: q.question.clone() }
  }
}

/// `question_id` is kept as raw JSON so that missing, null, negative,
/// fractional or non-numeric ids get the same 400 as unknown ones.
#[derive(Debug, Deserialize)]
pub struct AnswerIn {
  #[serde(default)]
  pub question_id: Value,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub answer: String,
}

impl AnswerIn {
  /// The id as an integer, if the client sent one.
  pub fn question_id(&self) -> Option<i64> {
    self.question_id.as_i64()
  }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
  Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub struct AnswerOut {
  pub evaluation: String,
  pub next_question: Option<String>,
  pub next_qid: Option<u32>,
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
  pub error: String,
}

/// Failures surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Invalid question ID")]
  InvalidQuestion,
  #[error("Failed to persist evaluation")]
  Persistence(#[from] crate::evaluation_log::LogError),
  #[error("{}", .0.body_text())]
  Body(JsonRejection),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::InvalidQuestion => StatusCode::BAD_REQUEST,
      ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Body(rejection) => rejection.status(),
    };
    (status, Json(ErrorOut { error: self.to_string() })).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(body: &str) -> AnswerIn {
    serde_json::from_str(body).unwrap()
  }

  #[test]
  fn only_integral_ids_are_usable() {
    assert_eq!(parse(r#"{"question_id": 1}"#).question_id(), Some(1));
    assert_eq!(parse(r#"{"question_id": -4}"#).question_id(), Some(-4));
    assert_eq!(parse(r#"{"question_id": "1"}"#).question_id(), None);
    assert_eq!(parse(r#"{"question_id": 1.0}"#).question_id(), None);
    assert_eq!(parse(r#"{"question_id": [0]}"#).question_id(), None);
    assert_eq!(parse(r#"{}"#).question_id(), None);
  }

  #[test]
  fn null_or_missing_answer_is_empty() {
    assert_eq!(parse(r#"{"question_id": 0, "answer": null}"#).answer, "");
    assert_eq!(parse(r#"{"question_id": 0}"#).answer, "");
    assert_eq!(parse(r#"{"answer": "SUMIF"}"#).answer, "SUMIF");
  }
}
