//! Git history queries.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::path::Path;

/// A commit author with their commit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub commits: usize,
}

/// Authors reachable from `HEAD` of the repository containing `root`.
///
/// Authors are merged by email (case-insensitive), bots (`[bot]` suffix)
/// are skipped, and the result is ordered by commit count, then name.
pub fn commit_authors(root: &Path) -> Result<Vec<Contributor>> {
    let repo = gix::discover(root)
        .with_context(|| format!("no git repository found from {}", root.display()))?;
    let head = repo.head_id().context("repository has no commits")?;

    let mut authors = Vec::new();
    for info in head.ancestors().all()? {
        let commit = info?.object()?;
        let author = commit.author()?;
        authors.push((author.name.to_string(), author.email.to_string()));
    }

    Ok(tally(authors))
}

/// Merge `(name, email)` pairs into contributors.
fn tally(authors: impl IntoIterator<Item = (String, String)>) -> Vec<Contributor> {
    let mut by_email: FxHashMap<String, Contributor> = FxHashMap::default();

    for (name, email) in authors {
        if name.ends_with("[bot]") {
            continue;
        }
        by_email
            .entry(email.to_ascii_lowercase())
            .and_modify(|c| c.commits += 1)
            .or_insert(Contributor {
                name,
                email,
                commits: 1,
            });
    }

    let mut list: Vec<Contributor> = by_email.into_values().collect();
    list.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.name.cmp(&b.name)));
    list
}
