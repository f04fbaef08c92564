use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a filter run.
///
/// Malformed lines and unknown levels are skipped, never reported here.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Cannot find {}. Put the log file next to the tool or pass --input.", .path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read log file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
