use answerdesk_core::{normalize_text, FaqEntry, FaqInput};
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use super::{parse_json, Store};
use crate::error::StorageError;

fn map_faq(row: &rusqlite::Row<'_>) -> rusqlite::Result<FaqEntry> {
    Ok(FaqEntry {
        row_id: row.get(0)?,
        id: row.get(1)?,
        question: row.get(2)?,
        answer: row.get(3)?,
        department: row.get(4)?,
        tags: parse_json(&row.get::<_, String>(5)?)?,
    })
}

const FAQ_COLUMNS: &str = "row_id, id, question, answer, department, tags";

impl Store {
    /// Inserts a FAQ with the next auto-increment id and clears the answer
    /// cache in the same transaction, so no stale cached answer survives
    /// the mutation.
    pub fn insert_faq(&self, input: &FaqInput) -> Result<FaqEntry, StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let next_id: i64 =
            tx.query_row("SELECT COALESCE(MAX(id), 0) + 1 FROM faqs", [], |row| row.get(0))?;
        let entry = FaqEntry {
            id: next_id,
            row_id: Uuid::new_v4().to_string(),
            question: input.question.clone(),
            answer: input.answer.clone(),
            department: input.department.clone(),
            tags: input.tags.clone(),
        };
        tx.execute(
            "INSERT INTO faqs (row_id, id, question, answer, department, tags)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.row_id,
                entry.id,
                entry.question,
                entry.answer,
                entry.department,
                serde_json::to_string(&entry.tags)?,
            ],
        )?;
        let cleared = tx.execute("DELETE FROM answer_cache", [])?;
        tx.commit()?;

        tracing::debug!(id = entry.id, cleared, "FAQ inserted, cache cleared");
        Ok(entry)
    }

    /// All FAQ entries ordered by id.
    pub fn list_faqs(&self) -> Result<Vec<FaqEntry>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {FAQ_COLUMNS} FROM faqs ORDER BY id"))?;
        let rows = stmt.query_map([], map_faq)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Exact-question lookup for one department, compared trimmed and
    /// case-insensitively. Scans the whole department, unlike the capped
    /// similarity candidate fetch.
    pub fn exact_faq(
        &self,
        department: &str,
        query: &str,
    ) -> Result<Option<FaqEntry>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {FAQ_COLUMNS} FROM faqs
             WHERE department = ?1 AND lower(trim(question)) = ?2
             ORDER BY id LIMIT 1"
        ))?;
        let entry =
            stmt.query_row(params![department, normalize_text(query)], map_faq).optional()?;
        Ok(entry)
    }

    /// FAQ candidates for one department, capped at `limit`. Feeds the
    /// similarity scorer only; exact lookups go through [`Store::exact_faq`].
    pub fn department_faqs(
        &self,
        department: &str,
        limit: usize,
    ) -> Result<Vec<FaqEntry>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {FAQ_COLUMNS} FROM faqs WHERE department = ?1 ORDER BY id LIMIT ?2"
        ))?;
        #[allow(clippy::cast_possible_wrap)]
        let rows = stmt.query_map(params![department, limit as i64], map_faq)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Deletes a FAQ by integer id and clears the answer cache in the same
    /// transaction. Errors with `NotFound` if no row matched.
    pub fn delete_faq(&self, id: i64) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let deleted = tx.execute("DELETE FROM faqs WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StorageError::NotFound { entity: "FAQ", id: id.to_string() });
        }
        tx.execute("DELETE FROM answer_cache", [])?;
        tx.commit()?;
        tracing::debug!(id, "FAQ deleted, cache cleared");
        Ok(())
    }

    /// Total number of FAQ entries.
    pub fn count_faqs(&self) -> Result<usize, StorageError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM faqs", [], |row| row.get(0))?;
        #[allow(clippy::cast_sign_loss)]
        Ok(count as usize)
    }

    /// First `limit` FAQ entries, for the diagnostic probe.
    pub fn sample_faqs(&self, limit: usize) -> Result<Vec<FaqEntry>, StorageError> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {FAQ_COLUMNS} FROM faqs ORDER BY id LIMIT ?1"))?;
        #[allow(clippy::cast_possible_wrap)]
        let rows = stmt.query_map(params![limit as i64], map_faq)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
