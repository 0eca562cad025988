use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api_types::{ChatApiRequest, ChatApiResponse};
use crate::AppState;

/// `POST /chat` — runs the escalation pipeline for one user message.
///
/// Infallible: pipeline failures surface as a `source=error` reply, never
/// as an HTTP error.
pub async fn process_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatApiRequest>,
) -> Json<ChatApiResponse> {
    let reply = state
        .chat_service
        .process(&req.message, &req.department, &req.username)
        .await;
    Json(reply.into())
}
