//! Configuration management for `automd.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── readme     # [readme]
//! │   └── docs       # [docs] (nav, sidebar, social links)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath, config_fields!
//! │   └── handle     # Global config handle
//! └── mod.rs         # AutomdConfig (this file)
//! ```
//!
//! The file is optional: without one, defaults apply and the project root
//! is the current directory.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    DocsConfig, LinkError, LinkTarget, NavItem, ReadmeConfig, SidebarGroup, SocialIcon,
    SocialLink,
};

pub(crate) use types::config_fields;
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config,
};

use crate::{
    cli::{Cli, Commands, UpdateArgs},
    log,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "automd.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing automd.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutomdConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file, which may not exist
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root: the config file's directory, or cwd without one
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub readme: ReadmeConfig,

    #[serde(default)]
    pub docs: DocsConfig,
}

impl AutomdConfig {
    /// Load configuration for `cli`, searching upward from cwd.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if started in `cwd`.
    pub fn load_from(cli: &'static Cli, cwd: &Path) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli, cwd);

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        let root = if exists {
            config_path
                .parent()
                .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf)
        } else {
            cwd.to_path_buf()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli, &root);

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> (PathBuf, bool) {
        if cli.is_init() {
            let path = cwd.join(&cli.config);
            let exists = path.exists();
            return (path, exists);
        }

        match find_config_file(cwd, &cli.config) {
            Some(path) => (path, true),
            None => (cwd.join(&cli.config), false),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        crate::logger::set_verbose(cli.verbose);

        if let Some(args) = cli.update_args() {
            self.apply_update_args(args);
        }
        self.normalize_paths(root);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Whether an `automd.toml` was actually found.
    pub fn has_file(&self) -> bool {
        self.config_path.is_file()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// CLI paths override the config file; both are relative to the root.
    fn apply_update_args(&mut self, args: &UpdateArgs) {
        Self::update_option(&mut self.readme.path, args.readme.as_ref());
        Self::update_option(&mut self.readme.manifest_dir, args.manifest_dir.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        use crate::utils::path::{normalize_path, resolve_from};

        self.root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);
        self.readme.normalize(&self.root);
        if let Some(src_dir) = self.docs.src_dir.take() {
            self.docs.src_dir = Some(resolve_from(&self.root, &src_dir));
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the sections the current command uses.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        match self.cli.map(Cli::resolved_command) {
            Some(Commands::Docs(_)) => self.docs.validate(&mut diag),
            Some(Commands::Init(_)) => {}
            Some(Commands::Update(_)) | None => self.readme.validate(&mut diag),
        }

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AutomdConfig {
    let (parsed, ignored) = AutomdConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
