use answerdesk_core::EscalationRecord;
use rusqlite::params;

use super::{parse_timestamp, Store};
use crate::error::StorageError;

impl Store {
    /// Appends an escalation record. Append-only: records are never updated
    /// or deleted by the chatbot itself.
    pub fn insert_escalation(&self, record: &EscalationRecord) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO escalations (id, query, department, user_id, username, timestamp, llm_reply)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id,
                record.query,
                record.department,
                record.user_id,
                record.username,
                record.timestamp.to_rfc3339(),
                record.llm_reply,
            ],
        )?;
        Ok(())
    }

    /// All escalation records, oldest first.
    pub fn list_escalations(&self) -> Result<Vec<EscalationRecord>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, query, department, user_id, username, timestamp, llm_reply
             FROM escalations ORDER BY timestamp",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(EscalationRecord {
                id: row.get(0)?,
                query: row.get(1)?,
                department: row.get(2)?,
                user_id: row.get(3)?,
                username: row.get(4)?,
                timestamp: parse_timestamp(&row.get::<_, String>(5)?)?,
                llm_reply: row.get(6)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
