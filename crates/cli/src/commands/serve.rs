use std::sync::Arc;

use anyhow::Result;
use answerdesk_http::{create_router, AppState};
use answerdesk_llm::{CannedGenerator, Generator, LlmClient};
use answerdesk_service::{ChatService, FaqService, HistoryService, RouterConfig};
use answerdesk_storage::Store;

use crate::{ensure_db_dir, get_api_key, get_base_url, get_db_path, get_model};

fn router_config() -> RouterConfig {
    let mut config = RouterConfig::default();
    if let Some(t) = parse_env_threshold("ANSWERDESK_SIMILARITY_THRESHOLD") {
        config.similarity_threshold = t;
    }
    if let Some(t) = parse_env_threshold("ANSWERDESK_CONFIDENCE_THRESHOLD") {
        config.confidence_threshold = t;
    }
    config
}

fn parse_env_threshold(var: &str) -> Option<f64> {
    let raw = std::env::var(var).ok()?;
    match raw.parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Some(v),
        _ => {
            tracing::warn!("ignoring invalid {var}={raw}, expected a float in [0,1]");
            None
        },
    }
}

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let store = Arc::new(Store::new(&db_path)?);

    // Backend selection is a startup-time configuration decision: live
    // client when an API key is present, deterministic canned generator
    // otherwise.
    let generator: Arc<dyn Generator> = match get_api_key() {
        Some(api_key) => {
            let mut client = LlmClient::new(api_key, get_base_url())?;
            if let Some(model) = get_model() {
                client = client.with_model(model);
            }
            tracing::info!(model = client.model(), "using live LLM backend");
            Arc::new(client)
        },
        None => {
            tracing::info!("ANSWERDESK_API_KEY not set, using canned generator");
            Arc::new(CannedGenerator)
        },
    };

    let faq_service = Arc::new(FaqService::new(Arc::clone(&store)));
    let history_service = Arc::new(HistoryService::new(Arc::clone(&store)));
    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&store),
        generator,
        Arc::clone(&history_service),
        router_config(),
    ));

    let seeded = faq_service.seed_if_empty().await?;
    if seeded > 0 {
        tracing::info!(seeded, "knowledge base was empty, seeded sample FAQs");
    }

    let state = Arc::new(AppState { chat_service, faq_service, history_service });
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received, closing store");
        })
        .await?;

    Ok(())
}
