use std::sync::Arc;

use answerdesk_core::ChatHistory;
use axum::extract::{Path, State};
use axum::Json;

use crate::api_error::ApiError;
use crate::AppState;

/// `GET /chat-history/{user_id}` — 404 when the user has no history.
pub async fn get_chat_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ChatHistory>, ApiError> {
    Ok(Json(state.history_service.get(&user_id).await?))
}
