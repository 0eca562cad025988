//! HTTP API server for answerdesk.

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use answerdesk_service::{ChatService, FaqService, HistoryService};

/// Shared application state for all HTTP handlers.
///
/// Services are constructed once at startup and injected here; there are no
/// ambient globals. Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// The escalation router.
    pub chat_service: Arc<ChatService>,
    /// Knowledge-base CRUD and diagnostics.
    pub faq_service: Arc<FaqService>,
    /// Per-user conversation ledger.
    pub history_service: Arc<HistoryService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(handlers::chat::process_chat))
        .route("/faqs", get(handlers::faqs::list_faqs).post(handlers::faqs::create_faq))
        .route("/faqs/{id}", delete(handlers::faqs::delete_faq))
        .route("/escalations", get(handlers::escalations::list_escalations))
        .route("/chat-history/{user_id}", get(handlers::history::get_chat_history))
        .route("/diagnostic/faqs", get(handlers::diagnostic::faq_diagnostics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
