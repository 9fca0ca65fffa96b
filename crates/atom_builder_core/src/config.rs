//! Startup configuration injected into the core.
//!
//! # Responsibility
//! - Describe app id, backend credentials, particle limits, log level and
//!   database location as one explicit value.
//! - Load and validate that value from JSON.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - A returned `AppConfig` has passed `validate()`.

use crate::logging::normalize_level;
use crate::model::atom::{ParticleLimits, MIN_PROTONS};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// App id used when none is configured.
pub const DEFAULT_APP_ID: &str = "default-app-id";

/// Credentials for the hosted backend the gallery would sync with.
///
/// The core never dials out; these are carried for the embedding app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_domain: String,
}

impl BackendConfig {
    /// Whether enough credentials are present to talk to a backend.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.project_id.trim().is_empty()
    }
}

/// Root configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_id: String,
    pub backend: BackendConfig,
    pub limits: ParticleLimits,
    pub log_level: String,
    /// Creations database file. `None` leaves the choice to the embedding
    /// layer; the FFI then reads `ATOM_BUILDER_DB_PATH` and finally uses
    /// `<temp>/atom_builder_creations.sqlite3`.
    pub db_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            backend: BackendConfig::default(),
            limits: ParticleLimits::default(),
            log_level: crate::logging::default_log_level().to_string(),
            db_path: None,
        }
    }
}

impl AppConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Checks semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::Invalid("app_id must not be empty".to_string()));
        }
        if self.limits.max_protons < MIN_PROTONS {
            return Err(ConfigError::Invalid(format!(
                "limits.max_protons must be >= {MIN_PROTONS}"
            )));
        }
        normalize_level(&self.log_level).map_err(ConfigError::Invalid)?;
        if let Some(path) = &self.db_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "db_path must not be empty when set".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Configuration load errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DEFAULT_APP_ID};

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::from_json_str("{}").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert_eq!(config.limits.max_protons, 150);
        assert!(!config.backend.is_configured());
        assert_eq!(config.db_path, None);
    }

    #[test]
    fn partial_limits_keep_other_defaults() {
        let config = AppConfig::from_json_str(r#"{"limits": {"max_protons": 118}}"#)
            .expect("partial limits");
        assert_eq!(config.limits.max_protons, 118);
        assert_eq!(config.limits.max_neutrons, 250);
    }

    #[test]
    fn rejects_blank_app_id_and_unknown_level() {
        let err = AppConfig::from_json_str(r#"{"app_id": "  "}"#).expect_err("blank app id");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AppConfig::from_json_str(r#"{"log_level": "verbose"}"#)
            .expect_err("unknown level");
        assert!(err.to_string().contains("unsupported log level"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = AppConfig::from_json_str("{").expect_err("malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
