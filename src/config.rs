//! Normalizer configuration
//!
//! JSON file, every field optional:
//!
//! ```json
//! { "log_level": "warn", "date_representation": "writable" }
//! ```
//!
//! Unknown fields are rejected.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{Event, Logger, Severity};
use crate::partition::{DateRepresentation, DefaultLiteralEvaluator};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid JSON for this structure
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unknown log level name
    #[error("Invalid log_level: '{0}'. Expected one of trace, info, warn, error.")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Minimum severity that is logged (default "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Date variant produced by the literal evaluator (default "native")
    #[serde(default)]
    pub date_representation: DateRepresentation,
}

fn default_log_level() -> String {
    "error".to_string()
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            date_representation: DateRepresentation::default(),
        }
    }
}

impl NormalizerConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        let shown = path.display().to_string();
        config
            .logger()
            .info(Event::ConfigLoaded, &[("path", shown.as_str())]);
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: NormalizerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.severity().map(|_| ())
    }

    /// Minimum log severity
    pub fn severity(&self) -> ConfigResult<Severity> {
        Severity::parse(&self.log_level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Logger honouring `log_level`. Falls back to ERROR for a config that
    /// bypassed validation.
    pub fn logger(&self) -> Logger {
        Logger::new(self.severity().unwrap_or(Severity::Error))
    }

    pub fn evaluator(&self) -> DefaultLiteralEvaluator {
        DefaultLiteralEvaluator::new(self.date_representation)
    }
}
