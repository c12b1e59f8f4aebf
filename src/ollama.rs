//! Minimal Ollama client used to grade answers.
//!
//! We only call `/api/generate` in non-streaming mode and read back the
//! `response` field. Calls are instrumented and log the model, prompt size
//! and response size (not contents).
//!
//! Every request is bounded by the configured timeout. There are no retries:
//! a failed evaluation is reported to the candidate and logged as-is.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::util::trunc_for_log;

#[derive(Debug, Error)]
pub enum EvaluatorError {
  #[error("{status} - {body}")]
  Status { status: u16, body: String },
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct Ollama {
  pub client: reqwest::Client,
  pub base_url: String,
  pub model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
  model: &'a str,
  prompt: &'a str,
  stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  response: String,
  #[serde(default)]
  eval_count: Option<u64>,
  #[serde(default)]
  total_duration: Option<u64>,
}

impl Ollama {
  pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self, EvaluatorError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Ok(Self { client, base_url, model: model.into() })
  }

  /// Raw generation call. Returns the trimmed `response` text.
  #[instrument(level = "info", target = "evaluator", skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
  pub async fn generate(&self, prompt: &str) -> Result<String, EvaluatorError> {
    let url = format!("{}/api/generate", self.base_url);
    let req = GenerateRequest { model: &self.model, prompt, stream: false };

    let res = self.client.post(&url)
      .header(USER_AGENT, "interview-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .json(&req).send().await?;

    let status = res.status();
    if status != reqwest::StatusCode::OK {
      let body = res.text().await.unwrap_or_default();
      return Err(EvaluatorError::Status { status: status.as_u16(), body });
    }

    let body: GenerateResponse = res.json().await?;
    info!(target: "evaluator", eval_count = ?body.eval_count, total_duration_ns = ?body.total_duration, response_len = body.response.len(), "Ollama generation done");
    Ok(body.response.trim().to_string())
  }

  /// Evaluate a prompt, never failing: errors become a readable message that is
  /// returned to the candidate and stored in the log in place of feedback.
  pub async fn evaluate(&self, prompt: &str) -> String {
    match self.generate(prompt).await {
      Ok(text) => text,
      Err(e) => {
        error!(target: "evaluator", url = %self.base_url, error = %trunc_for_log(&e.to_string(), 300), "Evaluation failed");
        format!("Ollama error: {}", e)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn client(base: &str, timeout: Duration) -> Ollama {
    Ollama::new(base, "phi", timeout).unwrap()
  }

  #[tokio::test]
  async fn returns_trimmed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/generate"))
      .and(body_json(serde_json::json!({ "model": "phi", "prompt": "grade me", "stream": false })))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "model": "phi",
        "response": "\n  Score: 7/10  \n",
        "done": true
      })))
      .expect(1)
      .mount(&server)
      .await;

    let text = client(&server.uri(), Duration::from_secs(5)).evaluate("grade me").await;
    assert_eq!(text, "Score: 7/10");
  }

  #[tokio::test]
  async fn missing_response_field_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/generate"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "done": true })))
      .mount(&server)
      .await;

    let text = client(&server.uri(), Duration::from_secs(5)).generate("p").await.unwrap();
    assert_eq!(text, "");
  }

  #[tokio::test]
  async fn non_200_includes_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/generate"))
      .respond_with(ResponseTemplate::new(404).set_body_string("model 'phi' not found"))
      .mount(&server)
      .await;

    let oa = client(&server.uri(), Duration::from_secs(5));
    let err = oa.generate("p").await.unwrap_err();
    assert!(matches!(err, EvaluatorError::Status { status: 404, .. }));

    let text = oa.evaluate("p").await;
    assert_eq!(text, "Ollama error: 404 - model 'phi' not found");
  }

  #[tokio::test]
  async fn malformed_json_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/generate"))
      .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
      .mount(&server)
      .await;

    let text = client(&server.uri(), Duration::from_secs(5)).evaluate("p").await;
    assert!(text.starts_with("Ollama error: request failed"), "{text}");
  }

  #[tokio::test]
  async fn unreachable_service_is_reported() {
    // Nothing listens on port 1.
    let text = client("http://127.0.0.1:1", Duration::from_secs(5)).evaluate("p").await;
    assert!(text.starts_with("Ollama error: request failed"), "{text}");
  }

  #[tokio::test]
  async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/generate"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(serde_json::json!({ "response": "late" }))
          .set_delay(Duration::from_secs(3)),
      )
      .mount(&server)
      .await;

    let err = client(&server.uri(), Duration::from_millis(200)).generate("p").await.unwrap_err();
    match err {
      EvaluatorError::Transport(e) => assert!(e.is_timeout()),
      other => panic!("expected timeout, got {other:?}"),
    }
  }

  #[test]
  fn base_url_trailing_slash_is_dropped() {
    let oa = client("http://localhost:11434/", Duration::from_secs(1));
    assert_eq!(oa.base_url, "http://localhost:11434");
  }
}
