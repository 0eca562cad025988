//! The generative-text capability seam.
//!
//! Backend selection happens once at startup by configuration (API key
//! present or not), never by runtime type inspection.

use async_trait::async_trait;

use crate::error::LlmError;

/// Black-box text completion: prompt in, reply text out.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Deterministic offline backend keyed on department keywords in the prompt.
///
/// Stands in for the live model when no API key is configured, so the chat
/// pipeline keeps answering instead of failing silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedGenerator;

#[async_trait]
impl Generator for CannedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let reply = if prompt.contains("Sales") {
            "Current quarterly target is $1M"
        } else if prompt.contains("HR") {
            "Consult employee handbook"
        } else if prompt.contains("Finance") {
            "Fiscal year ends December 31st"
        } else {
            "Please check department documentation"
        };
        Ok(reply.to_owned())
    }
}
