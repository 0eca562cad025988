use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::AppState;

/// `GET /diagnostic/faqs` — database connectivity probe with FAQ count and
/// samples. Always 200: a broken store is reported in the body, since the
/// probe's job is to describe the failure, not mirror it.
pub async fn faq_diagnostics(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    match state.faq_service.diagnostics().await {
        Ok(diag) => Json(serde_json::json!(diag)),
        Err(e) => {
            tracing::error!("database diagnostic error: {e}");
            Json(serde_json::json!({
                "status": "error",
                "db_connected": false,
                "error": e.to_string(),
            }))
        },
    }
}
