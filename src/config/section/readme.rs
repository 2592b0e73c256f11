//! `[readme]` section: which README to update and where its crate lives.
//!
//! ```toml
//! [readme]
//! path = "README.md"
//! manifest_dir = "."
//! ```

use crate::config::{ConfigDiagnostics, config_fields};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadmeConfig {
    /// README file, relative to the config file's directory.
    pub path: PathBuf,
    /// Directory to start the `Cargo.toml` search from.
    pub manifest_dir: PathBuf,
}

config_fields!(ReadmeConfig => ReadmeConfigFields {
    path: "readme.path",
    manifest_dir: "readme.manifest_dir",
});

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            path: "README.md".into(),
            manifest_dir: ".".into(),
        }
    }
}

impl ReadmeConfig {
    /// Resolve both paths against `root`.
    pub fn normalize(&mut self, root: &Path) {
        use crate::utils::path::resolve_from;
        self.path = resolve_from(root, &self.path);
        self.manifest_dir = resolve_from(root, &self.manifest_dir);
    }

    /// Check that the README exists and a manifest is reachable.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.path.is_file() {
            diag.error_with_hint(
                Self::FIELDS.path,
                format!("README `{}` not found", self.path.display()),
                format!("create it or set {}", Self::FIELDS.path),
            );
        }
        if crate::manifest::find_manifest(&self.manifest_dir).is_none() {
            diag.error_with_hint(
                Self::FIELDS.manifest_dir,
                format!("no Cargo.toml in or above `{}`", self.manifest_dir.display()),
                format!("point {} at the crate directory", Self::FIELDS.manifest_dir),
            );
        }
    }
}
