//! Application state: question store, Ollama client, evaluation log and prompts.
//!
//! Everything a handler needs is carried here explicitly, so tests can build
//! isolated instances with their own log file and evaluator address.

use std::time::Duration;

use tracing::{error, info, instrument};

use crate::config::{AppConfig, Prompts};
use crate::evaluation_log::EvaluationLog;
use crate::ollama::{EvaluatorError, Ollama};
use crate::store::QuestionStore;

pub struct AppState {
    pub store: QuestionStore,
    pub ollama: Ollama,
    pub log: EvaluationLog,
    pub prompts: Prompts,
}

impl AppState {
    /// Build state from loaded config. A configured question bank that breaks the
    /// dense-id rule is rejected in favour of the built-in bank.
    #[instrument(level = "info", skip_all)]
    pub fn new(cfg: &AppConfig) -> Result<Self, EvaluatorError> {
        let store = if cfg.questions.is_empty() {
            QuestionStore::builtin()
        } else {
            match QuestionStore::new(cfg.questions.clone()) {
                Ok(s) => s,
                Err(e) => {
                    error!(target: "interview_backend", error = %e, "Rejected configured question bank; using built-in questions");
                    QuestionStore::builtin()
                }
            }
        };
        info!(target: "interview_backend", questions = store.len(), "Question bank ready");

        let ollama = Ollama::new(
            cfg.ollama.base_url.clone(),
            cfg.ollama.model.clone(),
            Duration::from_secs(cfg.ollama.timeout_secs),
        )?;
        info!(target: "interview_backend", base_url = %ollama.base_url, model = %ollama.model, timeout_secs = cfg.ollama.timeout_secs, "Ollama evaluator configured");

        Ok(Self {
            store,
            ollama,
            log: EvaluationLog::new(&cfg.log.path),
            prompts: cfg.prompts.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Question;

    #[test]
    fn invalid_configured_bank_falls_back_to_builtin() {
        let mut cfg = AppConfig::default();
        cfg.questions = vec![Question { id: 3, question: "q".into(), ideal_answer: "a".into() }];
        let state = AppState::new(&cfg).unwrap();
        assert_eq!(state.store.all(), QuestionStore::builtin().all());
    }

    #[test]
    fn valid_configured_bank_is_used() {
        let mut cfg = AppConfig::default();
        cfg.questions = vec![Question { id: 0, question: "only".into(), ideal_answer: "a".into() }];
        cfg.log.path = "custom.json".into();
        let state = AppState::new(&cfg).unwrap();
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.first().question, "only");
        assert_eq!(state.log.path(), std::path::Path::new("custom.json"));
    }
}
