use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::session::SessionEvent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    pub copied: bool,
}

/// POST /api/v1/clipboard
///
/// On success the caller shows its own transient confirmation. On failure the
/// session error is set as well.
pub async fn handle_copy(
    State(state): State<AppState>,
    Json(request): Json<CopyRequest>,
) -> Result<Json<CopyResponse>, AppError> {
    if let Err(e) = state.clipboard.write_text(&request.text).await {
        let err = AppError::Clipboard(e.to_string());
        state
            .session
            .lock()
            .await
            .apply(SessionEvent::CopyFailed(err.user_message()))?;
        return Err(err);
    }

    Ok(Json(CopyResponse { copied: true }))
}
