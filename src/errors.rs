// ABOUTME: Error types for the slide-manifest application
// ABOUTME: Covers the manifest stage; git failures are reported, not raised

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Directory {} not found. Please create it first.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<glob::PatternError> for PublishError {
    fn from(err: glob::PatternError) -> Self {
        PublishError::Glob(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
