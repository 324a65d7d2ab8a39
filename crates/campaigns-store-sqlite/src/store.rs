//! [`SqliteStore`] — the SQLite implementation of [`CampaignStore`].

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
};

use campaigns_core::{campaign::Campaign, store::CampaignStore};
use rusqlite::OpenFlags;

use crate::{
  Error, Result,
  schema::{LIST_ALL, LIST_BY_STATUS, TABLE_EXISTS},
};

// ─── Initialization outcome ──────────────────────────────────────────────────

/// What [`SqliteStore::initialize`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initialization {
  /// The `campaigns` table was absent and the seed script was applied.
  Seeded,
  /// The `campaigns` table already existed; nothing was touched.
  AlreadyPresent,
  /// The table was absent and no seed script was available.
  NoSeed,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A campaign store backed by a single SQLite file.
///
/// Holds only the file locations. Each operation acquires its own connection,
/// which is closed when it goes out of scope on every exit path.
#[derive(Debug, Clone)]
pub struct SqliteStore {
  database_path: PathBuf,
  seed_path:     Option<PathBuf>,
}

impl SqliteStore {
  /// Describe a store at `database_path`, seeded from `seed_path` on first
  /// [`initialize`](Self::initialize). Nothing is opened yet.
  pub fn new(database_path: impl Into<PathBuf>, seed_path: Option<PathBuf>) -> Self {
    Self {
      database_path: database_path.into(),
      seed_path,
    }
  }

  pub fn database_path(&self) -> &Path { &self.database_path }

  /// Ensure the database exists and holds the `campaigns` table.
  ///
  /// Creates the file if needed. If the table is missing and a seed script is
  /// available, the whole script runs in one transaction; a failing script
  /// leaves nothing behind. Calling this again once seeded is a no-op.
  ///
  /// Intended to run once at startup, before any request traffic.
  pub async fn initialize(&self) -> Result<Initialization> {
    let conn = tokio_rusqlite::Connection::open(&self.database_path).await?;

    let exists: bool = conn
      .call(|conn| Ok(conn.query_row(TABLE_EXISTS, [], |row| row.get(0))?))
      .await?;
    if exists {
      tracing::debug!(path = ?self.database_path, "campaigns table already present");
      return Ok(Initialization::AlreadyPresent);
    }

    let Some(seed) = self.read_seed().await? else {
      tracing::warn!(
        path = ?self.database_path,
        seed = ?self.seed_path,
        "campaigns table missing and no seed script available"
      );
      return Ok(Initialization::NoSeed);
    };

    conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(&seed)?;
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::info!(
      path = ?self.database_path,
      seed = ?self.seed_path,
      "applied seed script"
    );
    Ok(Initialization::Seeded)
  }

  /// Read the seed script, treating an unset path or a missing file as "no
  /// seed".
  async fn read_seed(&self) -> Result<Option<String>> {
    let Some(path) = &self.seed_path else {
      return Ok(None);
    };
    match tokio::fs::read_to_string(path).await {
      Ok(sql) => Ok(Some(sql)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(source) => Err(Error::ReadSeed { path: path.clone(), source }),
    }
  }

  /// Open a read-only connection for the duration of one call. A missing
  /// database file is an error rather than a silently created empty one.
  async fn connect(&self) -> Result<tokio_rusqlite::Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
      | OpenFlags::SQLITE_OPEN_URI
      | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Ok(tokio_rusqlite::Connection::open_with_flags(&self.database_path, flags).await?)
  }
}

/// Build a [`Campaign`] from a row selected by [`LIST_ALL`] or
/// [`LIST_BY_STATUS`]. `NULL` or mistyped columns fail the whole row.
fn campaign_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Campaign> {
  Ok(Campaign {
    id:          row.get(0)?,
    name:        row.get(1)?,
    status:      row.get(2)?,
    clicks:      row.get(3)?,
    cost:        row.get(4)?,
    impressions: row.get(5)?,
  })
}

// ─── CampaignStore impl ──────────────────────────────────────────────────────

impl CampaignStore for SqliteStore {
  type Error = Error;

  async fn list_campaigns(&self, status: Option<String>) -> Result<Vec<Campaign>> {
    let conn = self.connect().await?;

    let campaigns = conn
      .call(move |conn| {
        let rows = if let Some(s) = status {
          let mut stmt = conn.prepare(LIST_BY_STATUS)?;
          stmt
            .query_map(rusqlite::params![s], campaign_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(LIST_ALL)?;
          stmt
            .query_map([], campaign_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    Ok(campaigns)
  }
}
