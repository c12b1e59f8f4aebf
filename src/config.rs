//! Service configuration: optional TOML file plus environment overrides.
//!
//! TOML is read from `INTERVIEW_CONFIG_PATH` when set. Every field has a default,
//! so a partial file is fine. Environment variables win over the file:
//!
//!   PORT                 : u16 (default 5000)
//!   OLLAMA_BASE_URL      : default "http://localhost:11434"
//!   OLLAMA_MODEL         : default "phi"
//!   OLLAMA_TIMEOUT_SECS  : u64 (default 120)
//!   EVALUATION_LOG_PATH  : default "interview_logs.json"

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domain::Question;
use crate::prompt::DEFAULT_EVALUATION_TEMPLATE;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub server: ServerCfg,
  #[serde(default)]
  pub ollama: OllamaCfg,
  #[serde(default)]
  pub log: LogCfg,
  #[serde(default)]
  pub prompts: Prompts,
  /// Replaces the built-in bank when non-empty. Ids must be `0..N-1` in order.
  #[serde(default)]
  pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerCfg {
  pub port: u16,
}

impl Default for ServerCfg {
  fn default() -> Self { Self { port: 5000 } }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OllamaCfg {
  pub base_url: String,
  pub model: String,
  pub timeout_secs: u64,
}

impl Default for OllamaCfg {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:11434".into(),
      model: "phi".into(),
      timeout_secs: 120,
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LogCfg {
  pub path: String,
}

impl Default for LogCfg {
  fn default() -> Self { Self { path: "interview_logs.json".into() } }
}

/// Prompt templates. Override in TOML to retarget the interviewer persona.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub evaluation_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self { evaluation_template: DEFAULT_EVALUATION_TEMPLATE.into() }
  }
}

impl AppConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }

  /// Apply overrides from a variable lookup (the process environment in production).
  pub fn apply_overrides<F>(&mut self, lookup: F)
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(v) = lookup("PORT") {
      match v.parse() {
        Ok(port) => self.server.port = port,
        Err(_) => warn!(target: "interview_backend", value = %v, "Ignoring invalid PORT"),
      }
    }
    if let Some(v) = lookup("OLLAMA_BASE_URL") {
      self.ollama.base_url = v;
    }
    if let Some(v) = lookup("OLLAMA_MODEL") {
      self.ollama.model = v;
    }
    if let Some(v) = lookup("OLLAMA_TIMEOUT_SECS") {
      match v.parse() {
        Ok(secs) => self.ollama.timeout_secs = secs,
        Err(_) => warn!(target: "interview_backend", value = %v, "Ignoring invalid OLLAMA_TIMEOUT_SECS"),
      }
    }
    if let Some(v) = lookup("EVALUATION_LOG_PATH") {
      self.log.path = v;
    }
  }
}

/// Load config from `INTERVIEW_CONFIG_PATH` (if set) and the environment.
/// A missing or broken file falls back to defaults.
pub fn load_config_from_env() -> AppConfig {
  let mut cfg = match std::env::var("INTERVIEW_CONFIG_PATH") {
    Ok(path) => match std::fs::read_to_string(&path) {
      Ok(s) => match AppConfig::from_toml_str(&s) {
        Ok(cfg) => {
          info!(target: "interview_backend", %path, "Loaded config (TOML)");
          cfg
        }
        Err(e) => {
          error!(target: "interview_backend", %path, error = %e, "Failed to parse TOML config");
          AppConfig::default()
        }
      },
      Err(e) => {
        error!(target: "interview_backend", %path, error = %e, "Failed to read TOML config file");
        AppConfig::default()
      }
    },
    Err(_) => AppConfig::default(),
  };
  cfg.apply_overrides(|k| std::env::var(k).ok());
  cfg
}
