//! The `CampaignStore` trait.
//!
//! Implemented by storage backends (e.g. `campaigns-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::campaign::Campaign;

/// Read access to the persisted campaign table.
///
/// The returned futures are `Send` so the trait can be used from handlers on
/// a multi-threaded runtime (tokio with `axum`).
pub trait CampaignStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// List every campaign ordered by ascending `id`.
  ///
  /// When `status` is `Some`, only campaigns whose status equals it exactly
  /// (case-sensitive, no wildcards) are returned. No match yields an empty
  /// vec, not an error.
  fn list_campaigns(
    &self,
    status: Option<String>,
  ) -> impl Future<Output = Result<Vec<Campaign>, Self::Error>> + Send + '_;
}
