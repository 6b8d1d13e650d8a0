use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::preferences::Theme;
use crate::session::SessionEvent;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeBody> {
    let theme = state.session.lock().await.theme();
    Json(ThemeBody { theme })
}

/// PUT /api/v1/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, AppError> {
    let theme = set_theme(&state, body.theme).await?;
    Ok(Json(ThemeBody { theme }))
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeBody>, AppError> {
    let mut session = state.session.lock().await;
    let theme = session.theme().toggled();
    state.themes.save(theme)?;
    session.apply(SessionEvent::ThemeChanged(theme))?;
    info!("Theme toggled to {theme}");
    Ok(Json(ThemeBody { theme }))
}

/// Persists first so the session never shows a theme the store does not have.
async fn set_theme(state: &AppState, theme: Theme) -> Result<Theme, AppError> {
    let mut session = state.session.lock().await;
    state.themes.save(theme)?;
    session.apply(SessionEvent::ThemeChanged(theme))?;
    info!("Theme set to {theme}");
    Ok(theme)
}
