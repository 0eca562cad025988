//! Business logic layer for answerdesk.
//!
//! Three services share one store: [`FaqService`] (knowledge-base CRUD with
//! synchronous cache invalidation), [`HistoryService`] (best-effort
//! conversation ledger), and [`ChatService`] (the escalation router).

mod blocking;
mod chat_service;
mod error;
mod faq_service;
mod history_service;


pub use chat_service::{ChatReply, ChatService, RouterConfig};
pub use error::ServiceError;
pub use faq_service::{FaqDiagnostics, FaqService};
pub use history_service::HistoryService;
