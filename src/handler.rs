//! Block dispatch: [`BlockRequest`] → generated lines.

use crate::error::Result;
use crate::generator::{
    badges::{self, BadgesConfig},
    contributors::{self, ContributorsConfig},
    description,
    file::{self, FileConfig},
    install::{self, CargoAddConfig},
    with_automdrs::{self, WithAutomdrsConfig},
};
use crate::log;
use crate::manifest::ParsedManifest;
use crate::readme::BlockRequest;
use std::path::PathBuf;

/// Everything a generator may read while producing a block.
#[derive(Debug, Clone)]
pub struct UpdateContext {
    pub manifest: ParsedManifest,
    /// Directory holding `Cargo.toml`; the root for `file` blocks.
    pub manifest_dir: PathBuf,
}

/// Produces the body of one block.
///
/// `Ok(None)` keeps the block's current body.
pub trait BlockHandler: Send + Sync {
    fn generate(&self, block: &BlockRequest, ctx: &UpdateContext) -> Result<Option<Vec<String>>>;
}

/// Names understood by [`DefaultHandler`].
pub const BUILTIN_BLOCKS: &[&str] = &[
    "badges",
    "contributors",
    "with-automdrs",
    "cargo-install",
    "cargo-add",
    "description",
    "file",
];

/// Dispatches built-in block names to their generators.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHandler;

impl BlockHandler for DefaultHandler {
    fn generate(&self, block: &BlockRequest, ctx: &UpdateContext) -> Result<Option<Vec<String>>> {
        let opts = block.options();
        let manifest = &ctx.manifest;

        let lines = match block.name.as_str() {
            "badges" => badges::generate(&BadgesConfig::from_options(&opts), manifest),
            "contributors" => contributors::generate(
                &ContributorsConfig::from_options(&opts)?,
                manifest,
                &ctx.manifest_dir,
            )?,
            "with-automdrs" => with_automdrs::generate(&WithAutomdrsConfig::from_options(&opts)),
            "cargo-install" => install::generate_install(manifest),
            "cargo-add" => install::generate_add(&CargoAddConfig::from_options(&opts), manifest),
            "description" => description::generate(manifest),
            "file" => file::generate(&FileConfig::from_options(&opts), &ctx.manifest_dir)?,
            unknown => {
                log!(
                    "warning";
                    "unknown block `{}` at line {}, left unchanged", unknown, block.line
                );
                return Ok(None);
            }
        };

        Ok(Some(lines))
    }
}
