//! Session — the application state object behind the form page.
//!
//! Holds the last submitted form, the generated posts, the current error, the
//! request lifecycle, and the theme. Every mutation goes through
//! [`Session::apply`], so the lifecycle can be driven deterministically in
//! tests without a network.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::form::PostForm;
use crate::preferences::{Theme, ThemeStore};

/// Where the most recent generation request stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A non-blank submission: enter pending, clear posts and error.
    Submitted(PostForm),
    /// Submission refused before any network call (blank topic).
    Rejected(String),
    Completed(Vec<String>),
    Failed(String),
    CopyFailed(String),
    ThemeChanged(Theme),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A generation is already in progress")]
    GenerationInProgress,

    #[error("No generation is in progress")]
    NotPending,
}

impl From<TransitionError> for AppError {
    fn from(e: TransitionError) -> Self {
        match e {
            TransitionError::GenerationInProgress => AppError::Conflict(e.to_string()),
            TransitionError::NotPending => AppError::Internal(e.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    form: PostForm,
    posts: Vec<String>,
    error: Option<String>,
    lifecycle: RequestLifecycle,
    theme: Theme,
}

/// Serializable view of the session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub form: PostForm,
    pub status: RequestLifecycle,
    pub is_loading: bool,
    pub posts: Vec<String>,
    pub error: Option<String>,
    pub theme: Theme,
}

impl Session {
    /// Builds a fresh session, reading the persisted theme once.
    /// Falls back to light when nothing was saved.
    pub fn initialize(store: &dyn ThemeStore) -> Result<Self, AppError> {
        let theme = store.load()?.unwrap_or_default();
        debug!("Session initialized with theme={theme}");
        Ok(Self {
            theme,
            ..Self::default()
        })
    }

    pub fn apply(&mut self, event: SessionEvent) -> Result<(), TransitionError> {
        match event {
            SessionEvent::Submitted(form) => {
                if self.lifecycle == RequestLifecycle::Pending {
                    return Err(TransitionError::GenerationInProgress);
                }
                self.form = form;
                self.posts.clear();
                self.error = None;
                self.lifecycle = RequestLifecycle::Pending;
            }
            SessionEvent::Rejected(message) => {
                self.error = Some(message);
            }
            SessionEvent::Completed(posts) => {
                self.ensure_pending()?;
                self.posts = posts;
                self.lifecycle = RequestLifecycle::Succeeded;
            }
            SessionEvent::Failed(message) => {
                self.ensure_pending()?;
                self.error = Some(message);
                self.lifecycle = RequestLifecycle::Failed;
            }
            SessionEvent::CopyFailed(message) => {
                self.error = Some(message);
            }
            SessionEvent::ThemeChanged(theme) => {
                self.theme = theme;
            }
        }
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), TransitionError> {
        if self.lifecycle == RequestLifecycle::Pending {
            Ok(())
        } else {
            Err(TransitionError::NotPending)
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == RequestLifecycle::Pending
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            form: self.form.clone(),
            status: self.lifecycle,
            is_loading: self.is_loading(),
            posts: self.posts.clone(),
            error: self.error.clone(),
            theme: self.theme,
        }
    }
}

#[cfg(test)]
impl Session {
    pub fn lifecycle(&self) -> RequestLifecycle {
        self.lifecycle
    }

    pub fn posts(&self) -> &[String] {
        &self.posts
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{FileThemeStore, MemoryThemeStore};

    fn submitted(topic: &str) -> SessionEvent {
        SessionEvent::Submitted(PostForm {
            topic: topic.to_string(),
            ..PostForm::default()
        })
    }

    #[test]
    fn test_fresh_session_is_idle_and_empty() {
        let session = Session::initialize(&MemoryThemeStore::default()).unwrap();
        assert_eq!(session.lifecycle(), RequestLifecycle::Idle);
        assert!(session.posts().is_empty());
        assert_eq!(session.error(), None);
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_success_path() {
        let mut session = Session::default();
        session.apply(submitted("rust")).unwrap();
        assert!(session.is_loading());

        session
            .apply(SessionEvent::Completed(vec!["A".into(), "B".into()]))
            .unwrap();
        assert_eq!(session.lifecycle(), RequestLifecycle::Succeeded);
        assert!(!session.is_loading());
        assert_eq!(session.posts(), ["A", "B"]);
        assert_eq!(session.form().topic, "rust");
    }

    #[test]
    fn test_failure_after_success_leaves_posts_empty() {
        let mut session = Session::default();
        session.apply(submitted("one")).unwrap();
        session.apply(SessionEvent::Completed(vec!["A".into()])).unwrap();

        session.apply(submitted("two")).unwrap();
        assert!(session.posts().is_empty(), "new call clears prior posts");

        session.apply(SessionEvent::Failed("boom".into())).unwrap();
        assert_eq!(session.lifecycle(), RequestLifecycle::Failed);
        assert!(!session.is_loading());
        assert!(session.posts().is_empty());
        assert_eq!(session.error(), Some("boom"));
    }

    #[test]
    fn test_rejection_keeps_prior_posts() {
        let mut session = Session::default();
        session.apply(submitted("one")).unwrap();
        session.apply(SessionEvent::Completed(vec!["A".into()])).unwrap();

        session.apply(SessionEvent::Rejected("blank".into())).unwrap();
        assert_eq!(session.posts(), ["A"]);
        assert_eq!(session.error(), Some("blank"));
        assert_eq!(session.lifecycle(), RequestLifecycle::Succeeded);
    }

    #[test]
    fn test_new_submission_clears_error() {
        let mut session = Session::default();
        session.apply(SessionEvent::Rejected("blank".into())).unwrap();
        session.apply(submitted("ok")).unwrap();
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_overlapping_submission_rejected() {
        let mut session = Session::default();
        session.apply(submitted("one")).unwrap();
        assert_eq!(
            session.apply(submitted("two")),
            Err(TransitionError::GenerationInProgress)
        );
        assert_eq!(session.form().topic, "one");
    }

    #[test]
    fn test_completion_without_pending_rejected() {
        let mut session = Session::default();
        assert_eq!(
            session.apply(SessionEvent::Completed(vec![])),
            Err(TransitionError::NotPending)
        );
        assert_eq!(
            session.apply(SessionEvent::Failed("x".into())),
            Err(TransitionError::NotPending)
        );
    }

    #[test]
    fn test_copy_failure_sets_error_only() {
        let mut session = Session::default();
        session.apply(submitted("one")).unwrap();
        session.apply(SessionEvent::Completed(vec!["A".into()])).unwrap();
        session.apply(SessionEvent::CopyFailed("nope".into())).unwrap();
        assert_eq!(session.error(), Some("nope"));
        assert_eq!(session.posts(), ["A"]);
    }

    #[test]
    fn test_theme_survives_reinitialize() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = FileThemeStore::new(&path);
        let mut session = Session::initialize(&store).unwrap();
        let next = session.theme().toggled();
        store.save(next).unwrap();
        session.apply(SessionEvent::ThemeChanged(next)).unwrap();
        assert_eq!(session.theme(), Theme::Dark);

        let reloaded = Session::initialize(&FileThemeStore::new(&path)).unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_snapshot_serializes_status_lowercase() {
        let mut session = Session::default();
        session.apply(submitted("x")).unwrap();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["is_loading"], true);
        assert_eq!(json["theme"], "light");
        assert_eq!(json["form"]["platform"], "twitter");
    }
}
