//! Generative-text backends for answerdesk.
//!
//! Exposes the [`Generator`] seam with two implementations — a live
//! OpenAI-compatible HTTP client and a deterministic canned fallback —
//! plus the confidence self-rating used by the escalation gate.

mod ai_types;
mod client;
mod confidence;
mod error;
mod generator;
mod prompts;

#[cfg(test)]
mod client_tests;

pub use client::{truncate, LlmClient, DEFAULT_MODEL};
pub use confidence::{parse_confidence, score_confidence};
pub use error::LlmError;
pub use generator::{CannedGenerator, Generator};
pub use prompts::{chat_prompt, rating_prompt, SYSTEM_PROMPT};
