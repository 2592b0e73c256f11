//! README block engine.
//!
//! ```text
//! content ──► ReadmeDocument::parse ──► requests ──► BlockHandler
//!                     │                                   │
//!                     └──────────── render ◄── generated ─┘
//! ```

mod block;
mod options;
mod replace;

pub use block::{BlockRequest, ReadmeDocument, is_close_tag, parse_block_name, parse_readme_blocks};
pub use options::{TagOptions, parse_tag_options};
pub use replace::{render, replace_blocks_once};

use crate::error::Result;
use crate::handler::{BlockHandler, UpdateContext};

/// Run `handler` for every request, in document order.
///
/// The result has exactly one entry per request. The first handler error
/// aborts the whole update.
pub fn assign_and_generate(
    requests: &[BlockRequest],
    handler: &dyn BlockHandler,
    ctx: &UpdateContext,
) -> Result<Vec<Option<Vec<String>>>> {
    requests
        .iter()
        .map(|request| handler.generate(request, ctx))
        .collect()
}

/// Regenerate every block of `content`.
pub fn update_readme(
    content: &str,
    handler: &dyn BlockHandler,
    ctx: &UpdateContext,
) -> Result<(String, usize)> {
    let doc = ReadmeDocument::parse(content)?;
    let generated = assign_and_generate(&doc.requests(), handler, ctx)?;
    Ok((render(&doc, &generated), doc.block_count()))
}
