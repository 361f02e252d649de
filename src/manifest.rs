// ABOUTME: Manifest module for the slide-manifest application
// ABOUTME: Scans the slides directory and writes the JSON manifest

use crate::config::Config;
use crate::errors::Result;
use crate::utils;
use glob::MatchOptions;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered list of slide file names, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub files: Vec<String>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Render the manifest as pretty-printed JSON; an empty manifest is `[]`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A manifest together with the exact bytes written for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedManifest {
    pub manifest: Manifest,
    pub content: String,
    pub path: PathBuf,
}

/// Fail with `DirectoryNotFound` unless `dir` is an existing directory
pub fn validate_slides_dir(dir: &Path) -> Result<()> {
    utils::validate_directory_exists(dir)
}

/// Collect the slide files directly inside `dir`.
///
/// One glob per extension, in allow-list order; the glob crate yields each
/// extension's matches alphabetically. Dotfiles and directories are skipped.
pub fn scan_slides(dir: &Path, extensions: &[String]) -> Result<Manifest> {
    info!("Scanning {:?} for {:?}", dir, extensions);

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = Vec::new();
    for extension in extensions {
        let pattern = utils::extension_pattern(dir, extension);
        debug!("Matching pattern {}", pattern);

        for path in glob::glob_with(&pattern, options)?.flatten() {
            if !path.is_file() {
                debug!("Skipping non-file entry {:?}", path);
                continue;
            }
            if let Some(name) = utils::base_name(&path) {
                if !files.contains(&name) {
                    files.push(name);
                }
            }
        }
    }

    info!("Found {} slide files", files.len());
    Ok(Manifest { files })
}

/// Overwrite `path` with the manifest and return the written content
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<String> {
    let content = manifest.to_json()?;
    fs::write(path, &content)?;
    info!("Wrote manifest with {} entries to {:?}", manifest.len(), path);
    Ok(content)
}

/// Check the slides directory, scan it and write the manifest.
///
/// Nothing is written when the directory is missing.
pub fn generate_manifest(config: &Config) -> Result<GeneratedManifest> {
    validate_slides_dir(&config.slides_dir)?;
    let manifest = scan_slides(&config.slides_dir, &config.extensions)?;
    let path = config.manifest_path();
    let content = write_manifest(&manifest, &path)?;
    Ok(GeneratedManifest {
        manifest,
        content,
        path,
    })
}
