//! Error types for the README update pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the manifest or rewriting README blocks.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cargo.toml not found from `{0}`")]
    CargoTomlNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse Cargo.toml: {0}")]
    CargoParse(String),

    #[error("Invalid repository URL: {0}")]
    InvalidRepoUrl(String),

    #[error("Block handler '{0}': {1}")]
    BlockHandler(String, String),

    #[error("block `{name}` opened at line {line} is never closed")]
    UnclosedBlock { name: String, line: usize },

    #[error("README `{0}` not found")]
    ReadmeNotFound(PathBuf),
}

impl Error {
    /// Shorthand for a generator failure attributed to `block`.
    pub fn block(block: &str, message: impl Into<String>) -> Self {
        Self::BlockHandler(block.to_string(), message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnclosedBlock {
            name: "badges".into(),
            line: 3,
        };
        assert_eq!(
            err.to_string(),
            "block `badges` opened at line 3 is never closed"
        );

        let err = Error::block("file", "missing required option: src");
        assert_eq!(
            err.to_string(),
            "Block handler 'file': missing required option: src"
        );
    }
}
