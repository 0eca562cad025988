use answerdesk_core::CachedAnswer;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::{parse_timestamp, Store};
use crate::error::StorageError;

impl Store {
    /// Looks up a memoized FAQ answer by cache key.
    pub fn get_cached_answer(&self, cache_key: &str) -> Result<Option<CachedAnswer>, StorageError> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT cache_key, answer, created_at FROM answer_cache WHERE cache_key = ?1",
                params![cache_key],
                |row| {
                    Ok(CachedAnswer {
                        cache_key: row.get(0)?,
                        answer: row.get(1)?,
                        created_at: parse_timestamp(&row.get::<_, String>(2)?)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Memoizes a FAQ answer, overwriting any entry under the same key.
    pub fn put_cached_answer(&self, cache_key: &str, answer: &str) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO answer_cache (cache_key, answer, created_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(cache_key) DO UPDATE SET answer = ?2, created_at = ?3",
            params![cache_key, answer, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Bulk-clears every cached answer. Returns the number of rows removed.
    ///
    /// The cache is purely derived, so the blunt full clear only forces
    /// recomputation.
    pub fn clear_answer_cache(&self) -> Result<usize, StorageError> {
        let conn = self.conn()?;
        Ok(conn.execute("DELETE FROM answer_cache", [])?)
    }
}
