use std::sync::Arc;

use anyhow::Result;
use answerdesk_service::FaqService;
use answerdesk_storage::Store;

use crate::{ensure_db_dir, get_db_path};

pub(crate) async fn run() -> Result<()> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let store = Arc::new(Store::new(&db_path)?);

    let seeded = FaqService::new(store).seed_if_empty().await?;
    if seeded > 0 {
        tracing::info!(seeded, "seeded sample FAQs");
    } else {
        tracing::info!("knowledge base already populated, nothing to seed");
    }
    Ok(())
}
