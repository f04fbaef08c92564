use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input file read when neither the CLI nor the config names one
pub const DEFAULT_INPUT: &str = "logs.txt";

/// Output file written when neither the CLI nor the config names one
pub const DEFAULT_OUTPUT: &str = "filtered_logs.txt";

/// Problems loading the TOML filter config named by `--config`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read filter config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid filter config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Input log file
    pub input: PathBuf,
    /// File receiving the matching lines
    pub output: PathBuf,
    pub filter: FilterRules,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            filter: FilterRules::default(),
        }
    }
}

/// Filters applied when the CLI does not override them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    pub level: Option<String>,
    pub service: Option<String>,
}

/// Loads the filter config, or the built-in defaults when no file is named
pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    path.map_or_else(|| Ok(FilterConfig::default()), load_config_from_path)
}

pub fn load_config_from_path(path: &Path) -> Result<FilterConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
