mod clipboard;
mod config;
mod errors;
mod generation;
mod llm_client;
mod preferences;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::preferences::{FileThemeStore, MemoryThemeStore, ThemeStore};
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PostGen API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.generation_api_url.clone());
    info!("LLM client initialized");

    // Theme preference is read once, here.
    let themes: Arc<dyn ThemeStore> = match &config.theme_store_path {
        Some(path) => {
            info!("Theme preference file: {}", path.display());
            Arc::new(FileThemeStore::new(path))
        }
        None => {
            warn!("THEME_STORE_PATH is empty; theme preference will not survive restarts");
            Arc::new(MemoryThemeStore::default())
        }
    };
    let session = Session::initialize(themes.as_ref())?;
    info!("Session initialized (theme: {})", session.theme());

    let state = AppState::new(
        Arc::new(llm),
        themes,
        Arc::new(SystemClipboard::default()),
        session,
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
