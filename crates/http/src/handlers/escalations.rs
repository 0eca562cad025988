use std::sync::Arc;

use answerdesk_core::EscalationRecord;
use axum::extract::State;
use axum::Json;

use crate::api_error::ApiError;
use crate::AppState;

/// `GET /escalations` — the human review queue, oldest first.
pub async fn list_escalations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EscalationRecord>>, ApiError> {
    Ok(Json(state.chat_service.list_escalations().await?))
}
