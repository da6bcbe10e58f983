//! Configuration: where converted tables are written
//!
//! The conversion core never reads this; only the CLI resolves a
//! [`Config`] and passes explicit paths down.

use crate::error::KeenResult;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BIOKEEN_DATA";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory where TSV tables and summaries are exported
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Default data directory (~/.local/share/biokeen on Linux)
pub fn default_data_dir() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("biokeen")
}

/// Config files checked in order when no explicit path is given
pub fn config_candidates() -> Vec<PathBuf> {
    match dirs::home_dir() {
        Some(home) => {
            let config = home.join(".config");
            vec![config.join("biokeen.yaml"), config.join("biokeen.yml")]
        }
        None => Vec::new(),
    }
}

impl Config {
    /// Resolve configuration from `path`, else the first existing candidate
    /// file, else defaults. `BIOKEEN_DATA` wins over all of them.
    pub fn load(path: Option<&Path>) -> KeenResult<Self> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => match config_candidates().into_iter().find(|p| p.is_file()) {
                Some(found) => {
                    tracing::debug!(path = %found.display(), "using config file");
                    Self::from_path(&found)?
                }
                None => Self::default(),
            },
        };
        Ok(config.with_env_override(std::env::var_os(DATA_DIR_ENV)))
    }

    /// Read a YAML config file
    pub fn from_path(path: &Path) -> KeenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse YAML; an empty document yields defaults
    pub fn from_yaml(text: &str) -> KeenResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Replace the data directory when an override value is set
    pub fn with_env_override(mut self, value: Option<OsString>) -> Self {
        if let Some(dir) = value.filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Create the data directory if needed
    pub fn ensure_data_dir(&self) -> KeenResult<&Path> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(&self.data_dir)
    }
}
