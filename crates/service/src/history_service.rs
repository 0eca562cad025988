use std::sync::Arc;

use answerdesk_core::{AnswerSource, ChatHistory, ConversationTurn};
use answerdesk_storage::{StorageError, Store};

use crate::blocking::blocking;
use crate::ServiceError;

/// Per-user conversation ledger.
///
/// Appends are best effort by design: a failed history write is reported
/// through the log and swallowed, never propagated into the chat response.
pub struct HistoryService {
    store: Arc<Store>,
}

impl HistoryService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Returns the history for (username, department), creating it with a
    /// welcome turn on first contact. Idempotent.
    pub async fn get_or_create(
        &self,
        username: &str,
        department: &str,
    ) -> Result<ChatHistory, ServiceError> {
        let welcome = ConversationTurn::assistant(
            format!(
                "Hello {username}! I'm your AI assistant for {department}. \
                 How can I help you today?"
            ),
            AnswerSource::System,
            None,
        );
        let store = Arc::clone(&self.store);
        let username = username.to_owned();
        let department = department.to_owned();
        blocking(move || store.get_or_create_history(&username, &department, &welcome)).await
    }

    /// Fetches a history by derived user id; `NotFound` if absent.
    pub async fn get(&self, user_id: &str) -> Result<ChatHistory, ServiceError> {
        let store = Arc::clone(&self.store);
        let id = user_id.to_owned();
        blocking(move || {
            store.get_history(&id)?.ok_or(StorageError::NotFound {
                entity: "chat history",
                id,
            })
        })
        .await
    }

    /// Appends turns, logging and swallowing any failure.
    pub async fn append_best_effort(&self, user_id: &str, turns: Vec<ConversationTurn>) {
        let store = Arc::clone(&self.store);
        let id = user_id.to_owned();
        let result = blocking(move || store.append_turns(&id, &turns)).await;
        if let Err(e) = result {
            tracing::error!(user_id, "failed to append to chat history: {e}");
        }
    }
}
