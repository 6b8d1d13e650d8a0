pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::clipboard::handlers as clipboard;
use crate::generation::handlers as generation;
use crate::preferences::handlers as preferences;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_index))
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/session", get(generation::handle_get_session))
        .route("/api/v1/posts/generate", post(generation::handle_generate))
        // Theme preference
        .route(
            "/api/v1/theme",
            get(preferences::handle_get_theme).put(preferences::handle_set_theme),
        )
        .route("/api/v1/theme/toggle", post(preferences::handle_toggle_theme))
        // Clipboard
        .route("/api/v1/clipboard", post(clipboard::handle_copy))
        .with_state(state)
}
