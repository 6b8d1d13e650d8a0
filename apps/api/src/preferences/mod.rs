//! Theme preference persistence.
//!
//! The preference is a single `{"theme": "light" | "dark"}` record. The file
//! backend is the durable store; the memory backend serves tests and
//! throwaway runs.

pub mod handlers;

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;

/// Key the preference is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where the theme preference lives. Read once at startup, written on change.
pub trait ThemeStore: Send + Sync {
    /// `Ok(None)` when nothing usable has been saved yet.
    fn load(&self) -> Result<Option<Theme>, AppError>;
    fn save(&self, theme: Theme) -> Result<(), AppError>;
}

/// JSON file backend. Writes go through a temp file and a rename.
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, AppError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "reading {}: {e}",
                    self.path.display()
                )))
            }
        };

        let record: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("Ignoring unreadable preferences file {}: {e}", self.path.display());
                return Ok(None);
            }
        };

        let theme = record
            .get(THEME_KEY)
            .and_then(|v| v.as_str())
            .and_then(Theme::parse);
        debug!("Loaded theme preference: {theme:?}");
        Ok(theme)
    }

    fn save(&self, theme: Theme) -> Result<(), AppError> {
        let body = serde_json::json!({ THEME_KEY: theme });
        let body = serde_json::to_vec_pretty(&body)
            .map_err(|e| AppError::Storage(format!("encoding preferences: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body)
            .and_then(|_| std::fs::rename(&tmp, &self.path))
            .map_err(|e| AppError::Storage(format!("writing {}: {e}", self.path.display())))
    }
}

/// In-process backend.
#[derive(Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Option<Theme>>,
}

impl MemoryThemeStore {
    #[cfg(test)]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Mutex::new(Some(theme)),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, AppError> {
        self.theme
            .lock()
            .map(|t| *t)
            .map_err(|_| AppError::Storage("theme store lock poisoned".to_string()))
    }

    fn save(&self, theme: Theme) -> Result<(), AppError> {
        let mut slot = self
            .theme
            .lock()
            .map_err(|_| AppError::Storage("theme store lock poisoned".to_string()))?;
        *slot = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        FileThemeStore::new(&path).save(Theme::Dark).unwrap();

        let reopened = FileThemeStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(Theme::Dark));

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["theme"], "dark");
    }

    #[test]
    fn test_file_store_unknown_value_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"theme": "sepia"}"#).unwrap();
        assert_eq!(FileThemeStore::new(&path).load().unwrap(), None);
    }

    #[test]
    fn test_file_store_garbage_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(FileThemeStore::new(&path).load().unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryThemeStore::default();
        assert_eq!(store.load().unwrap(), None);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
    }
}
