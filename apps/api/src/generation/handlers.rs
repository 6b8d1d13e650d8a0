//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::form::PostForm;
use crate::generation::generator::run_generation;
use crate::session::SessionSnapshot;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub posts: Vec<String>,
}

/// POST /api/v1/posts/generate
///
/// Validates the topic, calls the generation API once, returns the drafts.
/// Returns 409 while another generation is still pending.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<PostForm>,
) -> Result<Json<GenerateResponse>, AppError> {
    let posts = run_generation(&state, form).await?;
    Ok(Json(GenerateResponse { posts }))
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}
