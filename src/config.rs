//! Configuration module

use std::env;
use std::path::Path;

use crate::classifier::ClassifierConfig;
use crate::error::ConfigError;
use crate::store::{LOGS_PAGE_SIZE, MAX_LOGS};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Recent-activity log cap
    pub max_logs: usize,

    /// Entries returned by `/logs`
    pub logs_page_size: usize,

    /// Request body limit in bytes
    pub max_upload_bytes: usize,

    /// Optional JSON file with lexicons, weights, thresholds and platforms
    pub lexicon_path: Option<String>,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_logs: MAX_LOGS,
            logs_page_size: LOGS_PAGE_SIZE,
            max_upload_bytes: 10 * 1024 * 1024,
            lexicon_path: None,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),

            port: parse_env("PORT").unwrap_or(defaults.port),

            max_logs: parse_env("MAX_LOGS").unwrap_or(defaults.max_logs),

            logs_page_size: parse_env("LOGS_PAGE_SIZE").unwrap_or(defaults.logs_page_size),

            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES").unwrap_or(defaults.max_upload_bytes),

            lexicon_path: env::var("LEXICON_PATH").ok().filter(|p| !p.trim().is_empty()),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Classifier tables: the lexicon file if configured, otherwise built-in defaults
    pub fn classifier_config(&self) -> Result<ClassifierConfig, ConfigError> {
        match &self.lexicon_path {
            Some(path) => load_classifier_config(path),
            None => Ok(ClassifierConfig::default()),
        }
    }
}

/// Read a lexicon file; fields it omits keep their defaults
pub fn load_classifier_config(path: impl AsRef<Path>) -> Result<ClassifierConfig, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::LexiconRead {
        path: display.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::LexiconParse {
        path: display,
        source,
    })
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_logs, 200);
        assert_eq!(config.logs_page_size, 100);
        assert!(!config.is_production());
        assert_eq!(config.classifier_config().unwrap(), ClassifierConfig::default());
    }

    #[test]
    fn test_lexicon_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lexicon": {{ "safe": ["kindness"] }} }}"#).unwrap();

        let config = Config {
            lexicon_path: Some(file.path().display().to_string()),
            ..Default::default()
        };
        let classifier = config.classifier_config().unwrap();
        assert_eq!(classifier.lexicon.safe, vec!["kindness".to_string()]);
        assert_eq!(classifier.lexicon.risky.len(), 24);
    }

    #[test]
    fn test_bad_lexicon_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_classifier_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::LexiconParse { .. }));

        let err = load_classifier_config("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::LexiconRead { .. }));
    }
}
