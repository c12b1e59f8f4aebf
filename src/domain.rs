//! Domain models: interview questions and evaluation log entries.

use serde::{Deserialize, Serialize};

/// A fixed interview prompt paired with its reference answer.
/// `id` always equals the question's position in the bank.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
  pub id: u32,
  pub question: String,
  pub ideal_answer: String,
}

/// One persisted answer submission and the evaluation it received.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationLogEntry {
  pub question_id: u32,
  pub user_answer: String,
  pub evaluation: String,
}
