//! JSON REST API for the campaigns dashboard.
//!
//! Exposes an axum [`Router`] backed by any [`CampaignStore`]. CORS, request
//! tracing and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = campaigns_api::api_router(Arc::new(store));
//! ```

pub mod campaigns;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use campaigns_core::store::CampaignStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CampaignStore + 'static,
{
  Router::new()
    .route("/campaigns", get(campaigns::list::<S>))
    .with_state(store)
}

#[cfg(test)]
mod tests {
  use std::{io, path::Path, sync::Mutex};

  use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
  };
  use campaigns_core::campaign::Campaign;
  use campaigns_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tempfile::TempDir;
  use tower::ServiceExt as _;

  use super::*;

  // ── Helpers ─────────────────────────────────────────────────────────────────

  /// Store that always fails with the given message.
  struct FailingStore(&'static str);

  impl CampaignStore for FailingStore {
    type Error = io::Error;

    async fn list_campaigns(&self, _status: Option<String>) -> Result<Vec<Campaign>, io::Error> {
      Err(io::Error::other(self.0))
    }
  }

  /// Store that records the filter it was called with.
  #[derive(Default)]
  struct RecordingStore {
    calls: Mutex<Vec<Option<String>>>,
  }

  impl CampaignStore for RecordingStore {
    type Error = io::Error;

    async fn list_campaigns(&self, status: Option<String>) -> Result<Vec<Campaign>, io::Error> {
      self.calls.lock().unwrap().push(status);
      Ok(Vec::new())
    }
  }

  fn seed_scenario(path: &Path) {
    let conn = rusqlite::Connection::open(path).unwrap();
    conn
      .execute_batch(
        "CREATE TABLE campaigns (
             id INTEGER PRIMARY KEY, name TEXT NOT NULL, status TEXT NOT NULL,
             clicks INTEGER NOT NULL, cost REAL NOT NULL, impressions INTEGER NOT NULL
         );
         INSERT INTO campaigns VALUES (2, 'Winter Clearance', 'paused', 10, 5.00, 200);
         INSERT INTO campaigns VALUES (1, 'Spring Sale', 'active', 120, 45.50, 3000);",
      )
      .unwrap();
  }

  fn scenario_store(dir: &TempDir) -> Arc<SqliteStore> {
    let path = dir.path().join("campaigns.db");
    seed_scenario(&path);
    Arc::new(SqliteStore::new(path, None))
  }

  async fn get<S>(store: Arc<S>, uri: &str) -> Response
  where
    S: CampaignStore + 'static,
  {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    api_router(store).oneshot(req).await.unwrap()
  }

  async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  // ── Listing ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_returns_all_campaigns_in_id_order() {
    let dir  = TempDir::new().unwrap();
    let resp = get(scenario_store(&dir), "/campaigns").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(
      body,
      json!([
        {
          "id": 1, "name": "Spring Sale", "status": "active",
          "clicks": 120, "cost": 45.5, "impressions": 3000
        },
        {
          "id": 2, "name": "Winter Clearance", "status": "paused",
          "clicks": 10, "cost": 5.0, "impressions": 200
        }
      ])
    );
    assert!(body[1]["cost"].is_number());
  }

  #[tokio::test]
  async fn status_filter_selects_matching_campaigns() {
    let dir  = TempDir::new().unwrap();
    let resp = get(scenario_store(&dir), "/campaigns?status=active").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let ids: Vec<i64> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|c| c["id"].as_i64().unwrap())
      .collect();
    assert_eq!(ids, vec![1]);
  }

  #[tokio::test]
  async fn unknown_status_returns_empty_array() {
    let dir  = TempDir::new().unwrap();
    let resp = get(scenario_store(&dir), "/campaigns?status=archived").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));
  }

  #[tokio::test]
  async fn repeated_requests_return_identical_bodies() {
    let dir   = TempDir::new().unwrap();
    let store = scenario_store(&dir);
    let first  = json_body(get(store.clone(), "/campaigns").await).await;
    let second = json_body(get(store, "/campaigns").await).await;
    assert_eq!(first, second);
  }

  #[tokio::test]
  async fn empty_store_returns_empty_array() {
    let dir  = TempDir::new().unwrap();
    let path = dir.path().join("campaigns.db");
    rusqlite::Connection::open(&path)
      .unwrap()
      .execute_batch(
        "CREATE TABLE campaigns (
             id INTEGER PRIMARY KEY, name TEXT, status TEXT,
             clicks INTEGER, cost REAL, impressions INTEGER
         );",
      )
      .unwrap();

    let resp = get(Arc::new(SqliteStore::new(path, None)), "/campaigns").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));
  }

  // ── Filter pass-through ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn status_is_passed_through_verbatim() {
    let store = Arc::new(RecordingStore::default());
    get(store.clone(), "/campaigns?status=Paused%20Now").await;
    get(store.clone(), "/campaigns?status=").await;
    get(store.clone(), "/campaigns").await;

    let calls = store.calls.lock().unwrap().clone();
    assert_eq!(calls, vec![Some("Paused Now".to_string()), None, None]);
  }

  // ── Failures ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn store_failure_returns_500_with_detail() {
    let resp = get(Arc::new(FailingStore("connection refused")), "/campaigns").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(resp).await, json!({ "detail": "connection refused" }));
  }

  #[tokio::test]
  async fn corrupted_database_returns_500() {
    let dir  = TempDir::new().unwrap();
    let path = dir.path().join("campaigns.db");
    std::fs::write(&path, b"garbage garbage garbage garbage garbage garbage").unwrap();

    let resp = get(Arc::new(SqliteStore::new(path, None)), "/campaigns").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body   = json_body(resp).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(!detail.is_empty());
    assert!(!body.is_array());
  }

  #[tokio::test]
  async fn other_methods_are_rejected() {
    let dir = TempDir::new().unwrap();
    let req = Request::builder()
      .method("POST")
      .uri("/campaigns")
      .body(Body::empty())
      .unwrap();
    let resp = api_router(scenario_store(&dir)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
  }
}
