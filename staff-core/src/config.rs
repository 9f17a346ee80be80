//! Console configuration
//!
//! Stored as a JSON file; any missing field takes its default. Environment
//! variables (and a `.env` file) override the file.

use serde::{Deserialize, Serialize};
use shared::AppError;
use staff_client::NarrativeConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_login_delay_ms() -> u64 {
    800
}

fn default_seed_sample_data() -> bool {
    true
}

/// Console configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Root of the slot files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Simulated delay before a demo login is applied
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Seed the sample roster when no roster has ever been saved
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    #[serde(default)]
    pub narrative: NarrativeConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_dir: default_log_dir(),
            login_delay_ms: default_login_delay_ms(),
            seed_sample_data: default_seed_sample_data(),
            narrative: NarrativeConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load from file, defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save to file (the API key is never written)
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults plus environment overrides, reading `.env` if present
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Failed to read .env file"),
        }
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup
    ///
    /// Recognized: `STAFF_DATA_DIR`, `STAFF_LOG_DIR`, `GEMINI_API_KEY`
    /// (falling back to `API_KEY`), `GEMINI_MODEL`, `NARRATIVE_BASE_URL`.
    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| var(key).filter(|v| !v.is_empty());

        if let Some(dir) = var("STAFF_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = var("STAFF_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(key) = var("GEMINI_API_KEY").or_else(|| var("API_KEY")) {
            self.narrative.api_key = Some(key);
        }
        if let Some(model) = var("GEMINI_MODEL") {
            self.narrative.model = model;
        }
        if let Some(url) = var("NARRATIVE_BASE_URL") {
            self.narrative.base_url = url;
        }
        self
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
        assert_eq!(config.login_delay(), Duration::from_millis(800));
        assert!(config.seed_sample_data);
        assert_eq!(config.narrative, NarrativeConfig::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{"login_delay_ms": 0, "narrative": {"model": "m"}}"#).unwrap();

        assert_eq!(config.login_delay_ms, 0);
        assert_eq!(config.narrative.model, "m");
        assert_eq!(config.narrative.timeout_secs, 30);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConsoleConfig::load(&dir.path().join("console.json")).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_save_load_round_trip_drops_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/console.json");

        let mut config = ConsoleConfig {
            login_delay_ms: 10,
            seed_sample_data: false,
            ..ConsoleConfig::default()
        };
        config.narrative.api_key = Some("secret".to_string());
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("secret"));

        let loaded = ConsoleConfig::load(&path).unwrap();
        assert_eq!(loaded.login_delay_ms, 10);
        assert!(!loaded.seed_sample_data);
        assert_eq!(loaded.narrative.api_key, None);
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = ConsoleConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert_eq!(AppError::from(err).code, shared::ErrorCode::ConfigError);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STAFF_DATA_DIR", "/tmp/staff"),
            ("API_KEY", "fallback-key"),
            ("GEMINI_MODEL", "gemini-test"),
            ("NARRATIVE_BASE_URL", "http://127.0.0.1:9"),
            ("STAFF_LOG_DIR", ""),
        ]
        .into_iter()
        .collect();

        let config = ConsoleConfig::default()
            .with_env_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/tmp/staff"));
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
        assert_eq!(config.narrative.api_key.as_deref(), Some("fallback-key"));
        assert_eq!(config.narrative.model, "gemini-test");
        assert_eq!(config.narrative.base_url, "http://127.0.0.1:9");
    }

    #[test]
    fn test_gemini_key_wins_over_api_key() {
        let config = ConsoleConfig::default().with_env_overrides(|key| match key {
            "GEMINI_API_KEY" => Some("primary".to_string()),
            "API_KEY" => Some("secondary".to_string()),
            _ => None,
        });
        assert_eq!(config.narrative.api_key.as_deref(), Some("primary"));
    }
}
