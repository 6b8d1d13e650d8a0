use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the generative text endpoint, including any key query parameter.
    pub generation_api_url: String,
    /// `None` when `THEME_STORE_PATH` is set to an empty string: the theme
    /// then lives in memory for the life of the process.
    pub theme_store_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generation_api_url: require_env("GENERATION_API_URL")?,
            theme_store_path: theme_store_path(std::env::var("THEME_STORE_PATH").ok()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn theme_store_path(raw: Option<String>) -> Option<PathBuf> {
    match raw {
        None => Some(PathBuf::from("postgen-preferences.json")),
        Some(path) if path.trim().is_empty() => None,
        Some(path) => Some(PathBuf::from(path)),
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing_names_the_variable() {
        let err = require_env("POSTGEN_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.to_string().contains("POSTGEN_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_theme_store_path_defaults_and_memory_opt_out() {
        assert_eq!(
            theme_store_path(None),
            Some(PathBuf::from("postgen-preferences.json"))
        );
        assert_eq!(theme_store_path(Some(String::new())), None);
        assert_eq!(
            theme_store_path(Some("/tmp/prefs.json".to_string())),
            Some(PathBuf::from("/tmp/prefs.json"))
        );
    }
}
