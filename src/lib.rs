//! Keep `README.md` in sync with `Cargo.toml`.
//!
//! README sections are marked with HTML comment blocks and regenerated from
//! package metadata:
//!
//! ```markdown
//! <!-- automdrs:badges version docs license -->
//! <!-- /automdrs -->
//! ```
//!
//! [`run`] performs one update: parse manifest, scan blocks, generate each
//! body, replace in one pass and write the README only when it changed.

pub mod logger;

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod generator;
pub mod handler;
pub mod manifest;
pub mod readme;
pub mod utils;

pub use error::{Error, Result};
pub use handler::{BlockHandler, DefaultHandler, UpdateContext};
pub use manifest::ParsedManifest;

use std::fs;
use std::path::Path;

/// Result of one README update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// README content after regeneration.
    pub content: String,
    /// Whether `content` differs from the file on disk.
    pub changed: bool,
    /// Number of blocks found.
    pub blocks: usize,
}

/// Update `readme_path` with the built-in generators.
pub fn run(manifest_dir: &Path, readme_path: &Path) -> Result<UpdateOutcome> {
    run_with_handler(manifest_dir, readme_path, &DefaultHandler)
}

/// Update `readme_path` with a custom handler. Writes only when changed.
pub fn run_with_handler(
    manifest_dir: &Path,
    readme_path: &Path,
    handler: &dyn BlockHandler,
) -> Result<UpdateOutcome> {
    let outcome = plan(manifest_dir, readme_path, handler)?;
    if outcome.changed {
        fs::write(readme_path, &outcome.content)?;
        debug!("readme"; "wrote {}", readme_path.display());
    }
    Ok(outcome)
}

/// Compute the updated README without writing it.
pub fn plan(
    manifest_dir: &Path,
    readme_path: &Path,
    handler: &dyn BlockHandler,
) -> Result<UpdateOutcome> {
    let manifest_path = manifest::find_manifest(manifest_dir)
        .ok_or_else(|| Error::CargoTomlNotFound(manifest_dir.to_path_buf()))?;
    let manifest = manifest::parse_file(&manifest_path)?;
    let crate_root = manifest_path
        .parent()
        .map_or_else(|| manifest_dir.to_path_buf(), Path::to_path_buf);
    debug!("manifest"; "{} {} from {}", manifest.name, manifest.version, manifest_path.display());

    if !readme_path.is_file() {
        return Err(Error::ReadmeNotFound(readme_path.to_path_buf()));
    }
    let original = fs::read_to_string(readme_path)?;

    let ctx = UpdateContext {
        manifest,
        manifest_dir: crate_root,
    };
    let (content, blocks) = readme::update_readme(&original, handler, &ctx)?;

    Ok(UpdateOutcome {
        changed: content != original,
        content,
        blocks,
    })
}
