//! Read-only question store.
//!
//! Questions are loaded once at startup. Ids are dense (`0..N-1`) and equal to
//! the array position, so lookups and "next question" are plain indexing.

use thiserror::Error;

use crate::domain::Question;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("question bank is empty")]
  Empty,
  #[error("question at position {position} has id {id}; ids must be dense and start at 0")]
  NonDenseId { position: usize, id: u32 },
}

#[derive(Clone, Debug)]
pub struct QuestionStore {
  questions: Vec<Question>,
}

impl QuestionStore {
  pub fn new(questions: Vec<Question>) -> Result<Self, StoreError> {
    if questions.is_empty() {
      return Err(StoreError::Empty);
    }
    for (position, q) in questions.iter().enumerate() {
      if q.id as usize != position {
        return Err(StoreError::NonDenseId { position, id: q.id });
      }
    }
    Ok(Self { questions })
  }

  /// Store backed by the built-in Excel bank.
  pub fn builtin() -> Self {
    Self { questions: crate::seeds::seed_questions() }
  }

  pub fn first(&self) -> &Question {
    // Non-empty by construction.
    &self.questions[0]
  }

  pub fn all(&self) -> &[Question] {
    &self.questions
  }

  /// Look up by a client-supplied id. Negative or out-of-range ids are not found.
  pub fn get(&self, id: i64) -> Option<&Question> {
    usize::try_from(id).ok().and_then(|idx| self.questions.get(idx))
  }

  /// The question following `current` in bank order, if any.
  pub fn next_after(&self, current: &Question) -> Option<&Question> {
    self.questions.get(current.id as usize + 1)
  }

  // Never empty by construction, so no is_empty.
  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.questions.len()
  }
}
