//! SQLite backend for the campaigns service.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Every call opens its own connection and
//! releases it when the call returns.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{Initialization, SqliteStore};
