//! SQLite document store, modular structure.
//!
//! One submodule per collection. All methods are synchronous; async
//! callers hop them onto the tokio blocking pool.

mod cache;
mod escalations;
mod faqs;
mod history;

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Document store wrapping a SQLite connection pool.
#[derive(Clone, Debug)]
pub struct Store {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

impl Store {
    /// Opens (creating if needed) the database at `path` and applies the schema.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or migration fails.
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(path);
        Self::from_manager(manager)
    }

    /// Opens an in-memory database (test fixtures, ephemeral deployments).
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or migration fails.
    pub fn in_memory() -> Result<Self, StorageError> {
        // Single connection: each in-memory connection is its own database.
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager)?;
        let store = Self { pool };
        let conn = store.conn()?;
        migrations::run(&conn)?;
        Ok(store)
    }

    fn from_manager(manager: SqliteConnectionManager) -> Result<Self, StorageError> {
        let pool = Pool::new(manager)?;
        let store = Self { pool };
        let conn = store.conn()?;
        migrations::run(&conn)?;
        Ok(store)
    }

    /// Get a connection from the pool.
    pub(crate) fn conn(&self) -> Result<PooledConn, StorageError> {
        Ok(self.pool.get()?)
    }

    /// Cheap liveness probe for the diagnostic endpoint.
    pub fn ping(&self) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}

/// Parse JSON from a row column, converting the error to a rusqlite error.
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(s: &str) -> rusqlite::Result<T> {
    serde_json::from_str(s).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Parse an RFC 3339 timestamp column into `DateTime<Utc>`.
pub(crate) fn parse_timestamp(s: &str) -> rusqlite::Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}
