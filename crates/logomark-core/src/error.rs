//! Error types module
//!
//! `AppError` covers the conditions that stop a whole batch. Failures that only
//! affect a single file (a deletion that fails, an image that cannot be decoded,
//! a logo overlay that cannot be composed) have their own error types in the
//! processing crate and never abort the run.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input directory {} does not exist. Please add images.", .0.display())]
    InputDirMissing(PathBuf),

    #[error("Logo {} was not found. Please check the logo path.", .0.display())]
    LogoMissing(PathBuf),

    #[error("Failed to load logo from {}: {source}", .path.display())]
    LogoLoad {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the batch stopped before anything on disk was touched
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            AppError::InputDirMissing(_) | AppError::LogoMissing(_) | AppError::Config(_)
        )
    }
}
