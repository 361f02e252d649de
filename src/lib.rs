// ABOUTME: Library module for the slide-manifest program.
// ABOUTME: Builds the slides manifest and publishes it through git.

pub mod config;
pub mod errors;
pub mod manifest;
pub mod publish;
pub mod utils;

pub use config::Config;
pub use errors::{PublishError, Result};
pub use manifest::{GeneratedManifest, Manifest, generate_manifest, scan_slides, write_manifest};
pub use publish::{GitStep, PublishReport, StepOutcome, commit_message, publish};
