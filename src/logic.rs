//! Core interview flow behind the HTTP handlers.
//!
//! Submitting an answer: look up the question, build the prompt, ask Ollama,
//! log the result, then point the candidate at the next question (or at
//! nothing once the bank is exhausted).

use tracing::{error, info, instrument, warn};

use crate::domain::EvaluationLogEntry;
use crate::prompt::build_prompt;
use crate::protocol::{AnswerOut, ApiError};
use crate::state::AppState;

#[instrument(level = "info", skip(state, answer), fields(answer_len = answer.len()))]
pub async fn submit_answer(state: &AppState, question_id: Option<i64>, answer: &str) -> Result<AnswerOut, ApiError> {
  let Some(question) = question_id.and_then(|id| state.store.get(id)) else {
    warn!(target: "interview_backend", ?question_id, "Answer for unknown question rejected");
    return Err(ApiError::InvalidQuestion);
  };

  let prompt = build_prompt(&state.prompts.evaluation_template, &question.question, &question.ideal_answer, answer);
  let evaluation = state.ollama.evaluate(&prompt).await;

  let entry = EvaluationLogEntry {
    question_id: question.id,
    user_answer: answer.to_string(),
    evaluation: evaluation.clone(),
  };
  if let Err(e) = state.log.append(entry).await {
    error!(target: "interview_backend", id = question.id, error = %e, "Failed to append evaluation log");
    return Err(e.into());
  }

  let next = state.store.next_after(question);
  info!(target: "interview_backend", id = question.id, next_qid = ?next.map(|q| q.id), evaluation_len = evaluation.len(), "Answer evaluated");
  Ok(AnswerOut {
    evaluation,
    next_question: next.map(|q| q.question.clone()),
    next_qid: next.map(|q| q.id),
  })
}
