//! Interview Backend
//!
//! - Axum HTTP API serving a fixed bank of interview questions
//! - Answers graded by a local Ollama model (`/api/generate`)
//! - Every evaluation appended to a JSON array log on disk
//!
//! Important env variables:
//!   PORT                  : u16 (default 5000)
//!   OLLAMA_BASE_URL       : default "http://localhost:11434"
//!   OLLAMA_MODEL          : default "phi"
//!   OLLAMA_TIMEOUT_SECS   : per-request timeout (default 120)
//!   EVALUATION_LOG_PATH   : default "interview_logs.json"
//!   INTERVIEW_CONFIG_PATH : path to TOML config (prompts + optional question bank)
//!   LOG_LEVEL             : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT            : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod seeds;
mod store;
mod prompt;
mod ollama;
mod evaluation_log;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = config::load_config_from_env();
  let state = Arc::new(AppState::new(&cfg)?);

  // Surface a corrupt log at startup rather than on the first answer.
  match state.log.read_all().await {
    Ok(entries) => info!(target: "interview_backend", path = %state.log.path().display(), existing_entries = entries.len(), "Evaluation log ready"),
    Err(e) => error!(target: "interview_backend", error = %e, "Evaluation log unreadable; answers will fail until it is fixed"),
  }

  let app = build_router(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server.port));
  let listener = TcpListener::bind(addr).await?;
  info!(target: "interview_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "interview_backend", "HTTP server stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      error!(target: "interview_backend", error = %e, "Failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => { sig.recv().await; }
      Err(e) => {
        error!(target: "interview_backend", error = %e, "Failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };
  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }
  info!(target: "interview_backend", "Shutdown signal received");
}
