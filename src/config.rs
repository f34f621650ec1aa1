use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::AppError;

/// Runtime settings, read from a TOML file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum undoable operations per history; 0 keeps everything
    pub history_limit: usize,
    /// One of trace, debug, info, warn, error
    pub log_level: String,
    pub prompt: String,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: 0,
            log_level: "warn".to_string(),
            prompt: "rewind> ".to_string(),
            color: true,
        }
    }
}

impl AppConfig {
    /// Load config from TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("failed to parse config: {}", e)))?;
        config.level()?;
        Ok(config)
    }

    /// Config file if given, defaults otherwise
    pub fn load(path: Option<&PathBuf>) -> Result<Self, AppError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn history_limit(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.history_limit)
    }

    pub fn level(&self) -> Result<Level, AppError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| AppError::Config(format!("unknown log level '{}'", self.log_level)))
    }
}
