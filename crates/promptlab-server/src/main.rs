//! PromptLab API Server entrypoint

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use promptlab_server::adapters::MemoryStore;
use promptlab_server::config::Config;
use promptlab_server::services::OllamaClient;
use promptlab_server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("🧪 PromptLab API initializing...");
    tracing::info!("🦙 Ollama host: {}", config.ollama_host);
    if config.demo_fallback {
        tracing::warn!("⚠️  Demo fallback enabled - failed completions will be simulated");
    }

    let store = Arc::new(MemoryStore::with_default_templates());
    tracing::info!("📚 Template library seeded");

    let ollama = OllamaClient::new(&config.ollama_host, config.demo_fallback);
    let state = AppState::new(store, Arc::new(ollama));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ PromptLab API ready on {addr}");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
