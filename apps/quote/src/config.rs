//! Quote runner configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A positional command-line argument overrides the job path.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,

    /// One pretty-printed JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("MOSAIC_OUTPUT".to_string())),
        }
    }
}

/// Quote runner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Job file with the company and the pattern
    pub job_file: PathBuf,

    /// tracing filter directive (e.g. `info`, `mosaic_core=debug`)
    pub log_filter: String,

    /// Report format
    pub output: OutputFormat,
}

impl QuoteConfig {
    /// Load configuration from the process environment and arguments.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            env::args().nth(1),
            |key| env::var(key).ok(),
        )
    }

    /// Build configuration from an optional job argument and an environment
    /// lookup.
    pub fn from_sources<F>(job_arg: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let job_file = job_arg
            .or_else(|| lookup("MOSAIC_JOB_FILE"))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingRequired("MOSAIC_JOB_FILE".to_string()))?;

        let config = QuoteConfig {
            job_file,

            log_filter: lookup("MOSAIC_LOG")
                .map(|value| match EnvFilter::try_new(&value) {
                    Ok(_) => Ok(value),
                    Err(_) => Err(ConfigError::InvalidValue("MOSAIC_LOG".to_string())),
                })
                .transpose()?
                .unwrap_or_else(|| "info".to_string()),

            output: lookup("MOSAIC_OUTPUT")
                .map(|value| value.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
