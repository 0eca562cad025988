use std::sync::Arc;

use answerdesk_core::{FaqEntry, FaqInput};
use axum::extract::{Path, State};
use axum::Json;

use crate::api_error::ApiError;
use crate::api_types::DeleteResponse;
use crate::AppState;

/// `GET /faqs`
pub async fn list_faqs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FaqEntry>>, ApiError> {
    Ok(Json(state.faq_service.list_faqs().await?))
}

/// `POST /faqs` — creates an entry with the next auto-increment id and
/// clears the answer cache before returning.
pub async fn create_faq(
    State(state): State<Arc<AppState>>,
    Json(input): Json<FaqInput>,
) -> Result<Json<FaqEntry>, ApiError> {
    Ok(Json(state.faq_service.create_faq(input).await?))
}

/// `DELETE /faqs/{id}` — 404 when the id does not exist.
pub async fn delete_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.faq_service.delete_faq(id).await?;
    Ok(Json(DeleteResponse { status: "success" }))
}
