//! Link classification for docs navigation.
//!
//! | Link                             | Target                |
//! |----------------------------------|-----------------------|
//! | `/guide/getting-started`         | in-site path          |
//! | `https://github.com/o/r`         | external URL          |
//! | `guide/x`, `//cdn`, `ftp://...`  | rejected              |

use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Where a navigation link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Path inside the docs site, starting with a single `/`.
    Internal(String),
    /// `http` or `https` URL with a host.
    External(Url),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link is empty")]
    Empty,

    #[error("`{0}` contains whitespace")]
    Whitespace(String),

    #[error("`{0}` is protocol-relative")]
    ProtocolRelative(String),

    #[error("`{0}` is relative, in-site links start with `/`")]
    Relative(String),

    #[error("scheme `{scheme}` not supported in `{link}`, must be http or https")]
    UnsupportedScheme { link: String, scheme: String },

    #[error("`{0}` has no host")]
    MissingHost(String),

    #[error("invalid URL `{0}`: {1}")]
    Invalid(String, String),
}

impl LinkTarget {
    pub fn classify(link: &str) -> Result<Self, LinkError> {
        if link.trim().is_empty() {
            return Err(LinkError::Empty);
        }
        if link.chars().any(char::is_whitespace) {
            return Err(LinkError::Whitespace(link.to_string()));
        }
        if link.starts_with("//") {
            return Err(LinkError::ProtocolRelative(link.to_string()));
        }
        if link.starts_with('/') {
            return Ok(Self::Internal(link.to_string()));
        }

        let url = match Url::parse(link) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                return Err(LinkError::Relative(link.to_string()));
            }
            Err(e) => return Err(LinkError::Invalid(link.to_string(), e.to_string())),
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Err(LinkError::UnsupportedScheme {
                link: link.to_string(),
                scheme: url.scheme().to_string(),
            });
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(LinkError::MissingHost(link.to_string()));
        }

        Ok(Self::External(url))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Markdown sources an in-site link may be served from.
    ///
    /// `/guide/api` → `<src_dir>/guide/api.md`, `<src_dir>/guide/api/index.md`;
    /// `/guide/` → `<src_dir>/guide/index.md`. Query and fragment are
    /// ignored. External links have no source.
    pub fn source_candidates(&self, src_dir: &Path) -> Vec<PathBuf> {
        let Self::Internal(link) = self else {
            return Vec::new();
        };

        let path = link.split(['#', '?']).next().unwrap_or_default();
        let relative = path.trim_start_matches('/');
        let relative = relative.strip_suffix(".html").unwrap_or(relative);

        if relative.is_empty() || relative.ends_with('/') {
            return vec![src_dir.join(relative).join("index.md")];
        }
        vec![
            src_dir.join(format!("{relative}.md")),
            src_dir.join(relative).join("index.md"),
        ]
    }
}
