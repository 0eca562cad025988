use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// Where an assistant answer came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Welcome turn generated on history creation.
    System,
    /// Answered from the FAQ knowledge base (exact or similarity match).
    KnowledgeBase,
    /// Generative reply accepted at or above the confidence threshold.
    Llm,
    /// Low-confidence generative reply routed to the human queue.
    Escalated,
    /// Pipeline failure; the response is a generic apology.
    Error,
}

impl AnswerSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::KnowledgeBase => "knowledge_base",
            Self::Llm => "llm",
            Self::Escalated => "escalated",
            Self::Error => "error",
        }
    }
}

/// A single message in a chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    /// RFC 3339 timestamp, stored as text for stable wire format.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<AnswerSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ConversationTurn {
    /// A user turn timestamped now.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
            source: None,
            confidence: None,
            is_error: None,
        }
    }

    /// An assistant turn timestamped now.
    #[must_use]
    pub fn assistant(
        content: impl Into<String>,
        source: AnswerSource,
        confidence: Option<f64>,
    ) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
            source: Some(source),
            confidence,
            is_error: None,
        }
    }

    /// An assistant error turn (apology recorded after a pipeline failure).
    #[must_use]
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
            source: Some(AnswerSource::Error),
            confidence: None,
            is_error: Some(true),
        }
    }
}

/// Per-user conversation log, append-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistory {
    /// Store row identifier (UUID string).
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub department: String,
    pub messages: Vec<ConversationTurn>,
    pub last_updated: DateTime<Utc>,
}

/// A low-confidence generative answer routed to the human support queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub query: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub llm_reply: String,
}

/// A memoized FAQ answer, keyed on normalized (department, query).
///
/// Purely derived data: bulk-cleared on every knowledge-base mutation,
/// which only forces recomputation, never loses information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedAnswer {
    pub cache_key: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}
