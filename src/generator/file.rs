//! `file` block: include a file from the crate, optionally in a code fence.
//!
//! ```markdown
//! <!-- automdrs:file src="examples/basic.rs" -->
//! <!-- automdrs:file src="automd.toml" lang=toml -->
//! <!-- automdrs:file src="CHANGELOG.md" code=false -->
//! ```

use crate::error::{Error, Result};
use crate::readme::TagOptions;
use crate::debug;
use std::fs;
use std::path::Path;

const BLOCK: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Path relative to the crate root.
    pub src: String,
    /// Fence language; inferred from the extension when empty.
    pub lang: String,
    /// Wrap in a code fence.
    pub code: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            src: String::new(),
            lang: String::new(),
            code: true,
        }
    }
}

impl FileConfig {
    pub fn from_options(opts: &TagOptions) -> Self {
        Self {
            src: opts.get("src").unwrap_or_default().to_string(),
            lang: opts.get_or(&["lang", "language"], "").to_string(),
            code: opts.get("code").is_none() || opts.flag(&["code"]),
        }
    }
}

/// Infer code fence language from file extension.
fn infer_lang(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "rs" => "rust",
        "toml" => "toml",
        "md" => "markdown",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "sh" | "bash" => "bash",
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        _ => "",
    }
}

/// Read `crate_root/src` and render it as block lines.
///
/// Paths resolving outside `crate_root` are rejected.
pub fn generate(config: &FileConfig, crate_root: &Path) -> Result<Vec<String>> {
    if config.src.is_empty() {
        return Err(Error::block(BLOCK, "missing required option: src"));
    }

    let path = crate_root.join(&config.src);
    let canonical = path
        .canonicalize()
        .map_err(|e| Error::block(BLOCK, format!("{}: {}", config.src, e)))?;
    let root = crate_root
        .canonicalize()
        .map_err(|e| Error::block(BLOCK, e.to_string()))?;
    if !canonical.starts_with(&root) {
        return Err(Error::block(
            BLOCK,
            format!("path outside crate root: {}", config.src),
        ));
    }

    let content = fs::read_to_string(&canonical)
        .map_err(|e| Error::block(BLOCK, format!("{}: {}", config.src, e)))?;

    let lang = if config.lang.is_empty() {
        infer_lang(&canonical)
    } else {
        config.lang.as_str()
    };
    debug!("file"; "src={} lang={:?} code={}", config.src, lang, config.code);

    let body = content.lines().map(str::to_string);
    if !config.code {
        return Ok(body.collect());
    }
    Ok(super::fenced(lang, body))
}
