//! Request/response DTOs for the HTTP API.

use answerdesk_service::ChatReply;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatApiRequest {
    pub message: String,
    pub department: String,
    pub username: String,
    /// Accepted for wire compatibility; identity is always derived from
    /// username + department.
    #[serde(default)]
    #[allow(dead_code)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatApiResponse {
    pub response: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_used: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_history_id: Option<String>,
}

impl From<ChatReply> for ChatApiResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.response,
            source: reply.source.as_str().to_owned(),
            llm_reply: reply.llm_reply,
            faq_used: reply.faq_used,
            confidence: reply.confidence,
            chat_history_id: reply.chat_history_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}
