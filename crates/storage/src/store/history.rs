use answerdesk_core::{history_user_id, ChatHistory, ConversationTurn};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Transaction};
use uuid::Uuid;

use super::{parse_json, parse_timestamp, Store};
use crate::error::StorageError;

fn map_history(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChatHistory> {
    Ok(ChatHistory {
        id: row.get(0)?,
        user_id: row.get(1)?,
        username: row.get(2)?,
        department: row.get(3)?,
        messages: parse_json(&row.get::<_, String>(4)?)?,
        last_updated: parse_timestamp(&row.get::<_, String>(5)?)?,
    })
}

const HISTORY_COLUMNS: &str = "id, user_id, username, department, messages, last_updated";

fn find_history(
    tx: &Transaction<'_>,
    user_id: &str,
) -> Result<Option<ChatHistory>, StorageError> {
    let row = tx
        .query_row(
            &format!("SELECT {HISTORY_COLUMNS} FROM chat_histories WHERE user_id = ?1"),
            params![user_id],
            map_history,
        )
        .optional()?;
    Ok(row)
}

impl Store {
    /// Fetches a chat history by its derived user id.
    pub fn get_history(&self, user_id: &str) -> Result<Option<ChatHistory>, StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        find_history(&tx, user_id)
    }

    /// Idempotent get-or-create for a (username, department) pair.
    ///
    /// First contact creates the history seeded with the given welcome turn;
    /// repeated calls return the existing history without duplicating it.
    /// Select and insert run in one transaction so concurrent first contacts
    /// cannot both insert.
    pub fn get_or_create_history(
        &self,
        username: &str,
        department: &str,
        welcome: &ConversationTurn,
    ) -> Result<ChatHistory, StorageError> {
        let user_id = history_user_id(username, department);
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        if let Some(existing) = find_history(&tx, &user_id)? {
            return Ok(existing);
        }

        let history = ChatHistory {
            id: Uuid::new_v4().to_string(),
            user_id,
            username: username.to_owned(),
            department: department.to_owned(),
            messages: vec![welcome.clone()],
            last_updated: Utc::now(),
        };
        tx.execute(
            "INSERT INTO chat_histories (id, user_id, username, department, messages, last_updated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                history.id,
                history.user_id,
                history.username,
                history.department,
                serde_json::to_string(&history.messages)?,
                history.last_updated.to_rfc3339(),
            ],
        )?;
        tx.commit()?;
        tracing::debug!(user_id = %history.user_id, "chat history created");
        Ok(history)
    }

    /// Appends turns to an existing history, preserving order and bumping
    /// `last_updated`. Read-modify-write inside one transaction; concurrent
    /// appends serialize on the row rather than interleaving within a turn.
    pub fn append_turns(
        &self,
        user_id: &str,
        turns: &[ConversationTurn],
    ) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let Some(mut history) = find_history(&tx, user_id)? else {
            return Err(StorageError::NotFound {
                entity: "chat history",
                id: user_id.to_owned(),
            });
        };
        history.messages.extend_from_slice(turns);
        tx.execute(
            "UPDATE chat_histories SET messages = ?2, last_updated = ?3 WHERE user_id = ?1",
            params![user_id, serde_json::to_string(&history.messages)?, Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;
        Ok(())
    }
}
