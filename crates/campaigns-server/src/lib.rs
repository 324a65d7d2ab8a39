//! HTTP server assembly for the campaigns API.
//!
//! Wraps [`campaigns_api::api_router`] with the deployment concerns the API
//! crate leaves out: configuration, cross-origin policy and request tracing.

pub mod cors;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use campaigns_core::store::CampaignStore;
use serde::Deserialize;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CAMPAIGNS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:          String,
  #[serde(default = "default_port")]
  pub port:          u16,
  #[serde(default = "default_database_path")]
  pub database_path: PathBuf,
  /// Script applied once when the database has no `campaigns` table.
  #[serde(default = "default_seed_path")]
  pub seed_path:     Option<PathBuf>,
  /// Allowed browser origins; see [`cors::OriginPattern`].
  #[serde(default)]
  pub cors_origins:  Vec<String>,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 8000 }

fn default_database_path() -> PathBuf { PathBuf::from("campaigns.db") }

fn default_seed_path() -> Option<PathBuf> {
  Some(PathBuf::from("seed/create_campaigns.sql"))
}

impl ServerConfig {
  /// Load from the TOML file at `path` (optional) overlaid by the
  /// environment. `CAMPAIGNS_CORS_ORIGINS` is a comma-separated list.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(
        config::Environment::with_prefix("CAMPAIGNS")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("cors_origins"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// Build the complete application: the API routes plus CORS and tracing.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: CampaignStore + 'static,
{
  campaigns_api::api_router(store)
    .layer(cors::cors_layer(&config.cors_origins))
    .layer(
      TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
