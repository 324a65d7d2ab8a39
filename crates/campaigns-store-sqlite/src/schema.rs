//! SQL issued by the store.
//!
//! The table itself is created by the external seed script; these statements
//! only probe for it and read from it.

/// Yields `1` if the `campaigns` table exists, `0` otherwise.
pub const TABLE_EXISTS: &str = "
SELECT EXISTS (
    SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'campaigns'
)";

// Column order must match `store::campaign_from_row`.
pub const LIST_ALL: &str = "
SELECT id, name, status, clicks, cost, impressions
FROM campaigns
ORDER BY id";

pub const LIST_BY_STATUS: &str = "
SELECT id, name, status, clicks, cost, impressions
FROM campaigns
WHERE status = ?1
ORDER BY id";
