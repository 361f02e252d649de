// ABOUTME: Configuration module for the slide-manifest application
// ABOUTME: Provides default settings and environment variable overrides

use crate::errors::{PublishError, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SLIDES_DIR: &str = "assets/slides";
pub const DEFAULT_MANIFEST_NAME: &str = "manifest.json";
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["pptx", "pdf", "key"];
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";

/// Global configuration for a publish run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub slides_dir: PathBuf,
    pub manifest_name: String,
    pub extensions: Vec<String>,
    pub remote: String,
    pub branch: String,
    /// Working tree the git commands run in
    pub repo_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slides_dir: PathBuf::from(DEFAULT_SLIDES_DIR),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            repo_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let slides_dir = env::var("SLIDES_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(defaults.slides_dir);
        let manifest_name = env::var("SLIDES_MANIFEST").unwrap_or(defaults.manifest_name);
        let extensions = match env::var("SLIDES_EXTENSIONS") {
            Ok(raw) => parse_extensions(&raw)?,
            Err(_) => defaults.extensions,
        };
        let remote = env::var("SLIDES_REMOTE").unwrap_or(defaults.remote);
        let branch = env::var("SLIDES_BRANCH").unwrap_or(defaults.branch);
        let repo_dir = env::var("SLIDES_REPO_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(defaults.repo_dir);

        let config = Self {
            slides_dir,
            manifest_name,
            extensions,
            remote,
            branch,
            repo_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Path the manifest is written to
    pub fn manifest_path(&self) -> PathBuf {
        self.slides_dir.join(&self.manifest_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.manifest_name.is_empty() || self.manifest_name.contains(['/', '\\']) {
            return Err(PublishError::Config(format!(
                "manifest name must be a plain file name, got {:?}",
                self.manifest_name
            )));
        }
        if self.extensions.is_empty() {
            return Err(PublishError::Config(
                "at least one slide extension is required".to_string(),
            ));
        }
        for extension in &self.extensions {
            validate_extension(extension)?;
        }
        // The manifest lives in the scanned directory and must not list itself.
        if let Some((_, manifest_ext)) = self.manifest_name.rsplit_once('.') {
            if self.extensions.iter().any(|e| e == manifest_ext) {
                return Err(PublishError::Config(format!(
                    "manifest name {:?} would match the slide extension {:?}",
                    self.manifest_name, manifest_ext
                )));
            }
        }
        if self.remote.is_empty() || self.branch.is_empty() {
            return Err(PublishError::Config(
                "remote and branch must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a comma separated extension list such as `pptx, .pdf,key`
pub fn parse_extensions(raw: &str) -> Result<Vec<String>> {
    let extensions: Vec<String> = raw
        .split(',')
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect();

    for extension in &extensions {
        validate_extension(extension)?;
    }
    if extensions.is_empty() {
        return Err(PublishError::Config(format!(
            "no usable extensions in {:?}",
            raw
        )));
    }
    Ok(extensions)
}

/// An extension is a single path component free of glob syntax
fn validate_extension(extension: &str) -> Result<()> {
    const FORBIDDEN: [char; 8] = ['/', '\\', '*', '?', '[', ']', '{', '}'];

    if extension.is_empty() || extension.contains(FORBIDDEN) {
        return Err(PublishError::Config(format!(
            "invalid slide extension {:?}",
            extension
        )));
    }
    Ok(())
}
