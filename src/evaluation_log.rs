//! Persisted evaluation log: a JSON array file with one element per submission.
//!
//! Each append loads the whole array, pushes the new entry and rewrites the file
//! (2-space indented). The cycle runs under a mutex so concurrent requests in
//! this process cannot drop each other's entries, and the rewrite goes through a
//! temporary sibling file plus rename so the array is never half-written.
//! Other processes writing the same file are not coordinated with.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::domain::EvaluationLogEntry;

#[derive(Debug, Error)]
pub enum LogError {
  #[error("evaluation log I/O error at {path}: {source}")]
  Io { path: PathBuf, #[source] source: io::Error },
  #[error("evaluation log at {path} is not a valid JSON array: {source}")]
  Malformed { path: PathBuf, #[source] source: serde_json::Error },
}

pub struct EvaluationLog {
  path: PathBuf,
  lock: Mutex<()>,
}

impl EvaluationLog {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), lock: Mutex::new(()) }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// All entries in append order. A missing file reads as empty.
  pub async fn read_all(&self) -> Result<Vec<EvaluationLogEntry>, LogError> {
    let _guard = self.lock.lock().await;
    self.load().await
  }

  #[instrument(level = "debug", skip(self, entry), fields(question_id = entry.question_id, path = %self.path.display()))]
  pub async fn append(&self, entry: EvaluationLogEntry) -> Result<(), LogError> {
    let _guard = self.lock.lock().await;
    let mut entries = self.load().await?;
    entries.push(entry);
    self.store(&entries).await?;
    debug!(target: "interview_backend", total = entries.len(), "Evaluation appended to log");
    Ok(())
  }

  async fn load(&self) -> Result<Vec<EvaluationLogEntry>, LogError> {
    match tokio::fs::read(&self.path).await {
      Ok(bytes) => serde_json::from_slice(&bytes)
        .map_err(|source| LogError::Malformed { path: self.path.clone(), source }),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
      Err(source) => Err(self.io_err(source)),
    }
  }

  async fn store(&self, entries: &[EvaluationLogEntry]) -> Result<(), LogError> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await.map_err(|e| self.io_err(e))?;
    }
    // to_vec_pretty indents with two spaces.
    let bytes = serde_json::to_vec_pretty(entries)
      .map_err(|source| LogError::Malformed { path: self.path.clone(), source })?;

    let mut tmp = self.path.clone().into_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    tokio::fs::write(&tmp, &bytes).await.map_err(|e| self.io_err(e))?;
    if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
      let _ = tokio::fs::remove_file(&tmp).await;
      return Err(self.io_err(e));
    }
    Ok(())
  }

  fn io_err(&self, source: io::Error) -> LogError {
    LogError::Io { path: self.path.clone(), source }
  }
}
