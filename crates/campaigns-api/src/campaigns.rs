//! Handler for `/campaigns`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/campaigns` | Optional `?status=<s>`, exact match |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use campaigns_core::{campaign::Campaign, store::CampaignStore};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Restrict to campaigns with exactly this status. Not validated against
  /// any set of known values. An empty value means no filter.
  pub status: Option<String>,
}

/// `GET /campaigns[?status=<s>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Campaign>>, ApiError>
where
  S: CampaignStore,
{
  let status = params.status.filter(|s| !s.is_empty());
  let campaigns = store
    .list_campaigns(status)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(campaigns))
}
