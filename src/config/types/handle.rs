//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! Watch mode reloads `automd.toml` through this handle.

use crate::config::AutomdConfig;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<AutomdConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(AutomdConfig::default()));

/// Hash of the current config file content.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn cfg() -> Arc<AutomdConfig> {
    CONFIG.load_full()
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged or
/// there is no config file.
pub fn reload_config() -> Result<bool> {
    let c = cfg();
    let cli = c.cli.context("config handle used before initialization")?;
    if !c.config_path.is_file() {
        return Ok(false);
    }

    let content = std::fs::read_to_string(&c.config_path)?;
    let new_hash = crate::utils::hash::compute(&content);
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = AutomdConfig::load(cli)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

#[inline]
pub fn init_config(config: AutomdConfig) -> Arc<AutomdConfig> {
    if let Some(hash) = crate::utils::hash::compute_file(&config.config_path) {
        CONFIG_HASH.store(hash, Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
