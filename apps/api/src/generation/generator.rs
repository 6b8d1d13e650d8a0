//! Post Generation — validates the form, calls the generation API once, and
//! splits the reply into drafts.
//!
//! Flow: validate_topic → build_prompt → TextGenerator::generate → split_posts.
//!
//! Every failure after validation collapses to `AppError::Generation`; the
//! cause goes to the logs, users get one generic message.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::errors::{AppError, EMPTY_TOPIC_MESSAGE, GENERATION_FAILED_MESSAGE};
use crate::generation::form::PostForm;
use crate::generation::parser::split_posts;
use crate::generation::prompts::build_prompt;
use crate::llm_client::TextGenerator;
use crate::session::{Session, SessionEvent};
use crate::state::AppState;

/// Fails fast on a blank or whitespace-only topic.
pub fn validate_topic(form: &PostForm) -> Result<(), AppError> {
    if form.has_topic() {
        Ok(())
    } else {
        Err(AppError::Validation(EMPTY_TOPIC_MESSAGE.to_string()))
    }
}

/// Runs one generation round trip. No network call is made for a blank topic.
pub async fn generate_posts(
    llm: &dyn TextGenerator,
    form: &PostForm,
) -> Result<Vec<String>, AppError> {
    validate_topic(form)?;

    let prompt = build_prompt(form);
    let text = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    Ok(split_posts(&text))
}

/// Moves the session out of `pending` with the generic failure if the request
/// future is dropped (client gone) before the round trip resolves.
struct PendingGuard {
    session: Arc<Mutex<Session>>,
    armed: bool,
}

impl PendingGuard {
    fn new(session: Arc<Mutex<Session>>) -> Self {
        Self {
            session,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Generation abandoned before completion");
        let abandoned = SessionEvent::Failed(GENERATION_FAILED_MESSAGE.to_string());

        match self.session.try_lock() {
            Ok(mut session) => {
                if let Err(e) = session.apply(abandoned) {
                    warn!("Could not clear pending generation: {e}");
                }
            }
            // Lock is busy: finish the transition once it frees up. No new
            // submission can slip in first because the session is still pending.
            Err(_) => {
                let session = self.session.clone();
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    handle.spawn(async move {
                        if let Err(e) = session.lock().await.apply(abandoned) {
                            warn!("Could not clear pending generation: {e}");
                        }
                    });
                }
            }
        }
    }
}

/// Drives the session lifecycle around [`generate_posts`]:
/// idle → pending → succeeded | failed. A blank topic records the validation
/// error and never enters pending. Pending is always left, even when the
/// caller stops polling mid-request.
pub async fn run_generation(state: &AppState, form: PostForm) -> Result<Vec<String>, AppError> {
    if let Err(e) = validate_topic(&form) {
        state
            .session
            .lock()
            .await
            .apply(SessionEvent::Rejected(e.user_message()))?;
        return Err(e);
    }

    state
        .session
        .lock()
        .await
        .apply(SessionEvent::Submitted(form.clone()))?;
    let guard = PendingGuard::new(state.session.clone());

    info!(
        "Generating {} post(s) for {} (tone={})",
        form.variations.get(),
        form.platform,
        form.tone
    );

    let result = generate_posts(state.llm.as_ref(), &form).await;

    let mut session = state.session.lock().await;
    let transition = match &result {
        Ok(posts) => {
            info!("Generation succeeded: {} post(s)", posts.len());
            session.apply(SessionEvent::Completed(posts.clone()))
        }
        Err(e) => {
            warn!("Generation failed: {e}");
            session.apply(SessionEvent::Failed(e.user_message()))
        }
    };
    guard.disarm();
    drop(session);

    transition?;
    result
}
