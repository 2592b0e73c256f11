//! Repository URL parsing.

use crate::error::{Error, Result};
use url::Url;

/// Parse a repository URL into `(username, repository_name)`.
///
/// Accepts:
/// - `https://github.com/user/repo`
/// - `https://github.com/user/repo.git`
/// - `https://github.com/user/repo/tree/main/crates/x` (extra segments ignored)
/// - `git@github.com:user/repo.git`
pub fn parse_repository_url(repository: &str) -> Result<(String, String)> {
    let repository = repository.trim();
    let path = match scp_path(repository) {
        Some(path) => path.to_string(),
        None => {
            let url = Url::parse(repository).map_err(|e| Error::InvalidRepoUrl(e.to_string()))?;
            url.path().to_string()
        }
    };

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() < 2 {
        return Err(Error::InvalidRepoUrl(format!(
            "expected user/repo, got: {repository}"
        )));
    }

    let username = parts[0];
    let repo = parts[1].strip_suffix(".git").unwrap_or(parts[1]);
    Ok((username.to_string(), repo.to_string()))
}

/// Path part of an scp-like git address (`git@host:user/repo.git`).
fn scp_path(repository: &str) -> Option<&str> {
    if repository.contains("://") {
        return None;
    }
    let (host, path) = repository.split_once(':')?;
    host.contains('@').then_some(path)
}
