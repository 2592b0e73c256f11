//! `cargo-install` and `cargo-add` blocks.

use super::fenced;
use crate::manifest::ParsedManifest;
use crate::readme::TagOptions;

/// `cargo install NAME` snippet.
pub fn generate_install(manifest: &ParsedManifest) -> Vec<String> {
    fenced("sh", [format!("cargo install {}", manifest.name)])
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CargoAddConfig {
    /// Add as a dev-dependency.
    pub dev: bool,
    /// Pin the current manifest version (`NAME@VERSION`).
    pub pin: bool,
}

impl CargoAddConfig {
    pub fn from_options(opts: &TagOptions) -> Self {
        Self {
            dev: opts.flag(&["dev"]),
            pin: opts.flag(&["pin", "version"]),
        }
    }
}

/// `cargo add NAME` snippet.
pub fn generate_add(config: &CargoAddConfig, manifest: &ParsedManifest) -> Vec<String> {
    let mut command = format!("cargo add {}", manifest.name);
    if config.pin && !manifest.version.is_empty() {
        command.push('@');
        command.push_str(&manifest.version);
    }
    if config.dev {
        command.push_str(" --dev");
    }
    fenced("sh", [command])
}
