//! campaigns-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), initialises
//! the SQLite store from its seed script if needed, and serves the campaigns
//! API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use campaigns_server::ServerConfig;
use campaigns_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Campaigns dashboard API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  // Must finish before the listener is bound.
  let store = SqliteStore::new(server_cfg.database_path.clone(), server_cfg.seed_path.clone());
  let outcome = store
    .initialize()
    .await
    .with_context(|| format!("failed to initialise store at {:?}", server_cfg.database_path))?;
  tracing::info!(?outcome, path = ?store.database_path(), "store ready");

  if server_cfg.cors_origins.is_empty() {
    tracing::warn!("no cors_origins configured; allowing any origin");
  }

  let app = campaigns_server::app(Arc::new(store), &server_cfg);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
