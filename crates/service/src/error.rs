//! Typed error enum for the service layer.
//!
//! Unifies storage and LLM failures into a single error type, enabling
//! callers to match on specific failure modes instead of downcasting
//! opaque `anyhow::Error` boxes.

use answerdesk_llm::LlmError;
use answerdesk_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and generative-backend failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, corrupt row).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Generative-text API call failed.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// Caller provided invalid input (empty message, blank department).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A blocking storage task failed to join.
    #[error("blocking task: {0}")]
    Join(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
