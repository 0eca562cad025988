use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "answerdesk")]
#[command(about = "Department-aware support chatbot server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "8003")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Seed sample FAQs into an empty knowledge base
    Seed,
}

fn get_db_path() -> PathBuf {
    std::env::var("ANSWERDESK_DB").map_or_else(
        |_| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("answerdesk")
                .join("answerdesk.db")
        },
        PathBuf::from,
    )
}

fn get_api_key() -> Option<String> {
    std::env::var("ANSWERDESK_API_KEY").ok().filter(|k| !k.is_empty())
}

fn get_model() -> Option<String> {
    std::env::var("ANSWERDESK_MODEL").ok().filter(|m| !m.is_empty())
}

fn get_base_url() -> String {
    std::env::var("ANSWERDESK_API_URL")
        .unwrap_or_else(|_| "https://api.groq.com/openai".to_string())
}

fn ensure_db_dir(db_path: &std::path::Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Seed => commands::seed::run().await,
    }
}
