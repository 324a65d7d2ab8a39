//! Campaign — the single persisted entity.

use serde::{Deserialize, Serialize};

/// One advertising campaign with its headline metrics.
///
/// Records are created outside the service (by the seed script) and are only
/// ever read. Every field is required; a stored row that cannot supply all of
/// them is a data-integrity error, not something to default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
  pub id:          i64,
  pub name:        String,
  /// Free-form status label, e.g. `"active"` or `"paused"`. Not an
  /// enumeration: any string the store holds is passed through.
  pub status:      String,
  pub clicks:      i64,
  pub cost:        f64,
  pub impressions: i64,
}
