// ABOUTME: Utility functions for the slide-manifest application
// ABOUTME: Path validation and glob helpers shared by the manifest stage

use crate::errors::{PublishError, Result};
use log::warn;
use std::path::Path;

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(PublishError::DirectoryNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Build a glob matching `*.<extension>` directly inside `dir`.
///
/// The directory part is escaped so brackets or asterisks in a real path are
/// taken literally.
pub fn extension_pattern(dir: &Path, extension: &str) -> String {
    if dir.to_str().is_none() {
        warn!("Slides directory {:?} is not valid UTF-8; matching a lossy copy", dir);
    }
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let escaped_ext = glob::Pattern::escape(extension);
    format!("{}/*.{}", escaped_dir.trim_end_matches('/'), escaped_ext)
}

/// Base name of a path as an owned string
pub fn base_name(path: &Path) -> Option<String> {
    let name = path.file_name()?;
    match name.to_str() {
        Some(name) => Some(name.to_string()),
        None => {
            warn!("File name {:?} is not valid UTF-8; recording a lossy copy", name);
            Some(name.to_string_lossy().into_owned())
        }
    }
}
