use std::sync::Arc;

use tokio::sync::Mutex;

use crate::clipboard::Clipboard;
use crate::llm_client::TextGenerator;
use crate::preferences::ThemeStore;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. Default: `LlmClient` against `GENERATION_API_URL`.
    pub llm: Arc<dyn TextGenerator>,
    pub themes: Arc<dyn ThemeStore>,
    pub clipboard: Arc<dyn Clipboard>,
    /// Never held across the generation await.
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        themes: Arc<dyn ThemeStore>,
        clipboard: Arc<dyn Clipboard>,
        session: Session,
    ) -> Self {
        Self {
            llm,
            themes,
            clipboard,
            session: Arc::new(Mutex::new(session)),
        }
    }
}
