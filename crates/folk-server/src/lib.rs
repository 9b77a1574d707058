//! HTTP server wiring for Folk.
//!
//! Loads [`ServerConfig`] and mounts the JSON API from `folk-api` under
//! `/api` with request tracing.

use std::path::{Path, PathBuf};

use axum::Router;
use folk_core::{service::PersonService, store::PersonStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Store path that opens a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOLK_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Read `path` (if it exists) layered over built-in defaults, then apply
/// `FOLK_`-prefixed environment overrides.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .set_default("store_path", "folk.db")?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("FOLK"))
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: `/api/persons/...` plus tracing.
pub fn app<S>(service: PersonService<S>) -> Router
where
  S: PersonStore + 'static,
{
  Router::new()
    .nest("/api", folk_api::api_router(service))
    .layer(TraceLayer::new_for_http())
}
