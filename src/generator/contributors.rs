//! `contributors` block: license line, author credit and contributor list.
//!
//! ```markdown
//! <!-- automdrs:contributors author="YONGQI" license="MIT" -->
//! <!-- automdrs:contributors source=git limit=5 -->
//! ```
//!
//! `author` and `license` fall back to the manifest. With `source=git` the
//! contributor list comes from commit history instead of contrib.rocks.

use crate::error::{Error, Result};
use crate::manifest::ParsedManifest;
use crate::readme::TagOptions;
use crate::debug;
use crate::utils::git::{Contributor, commit_authors};
use crate::utils::plural::plural_count;
use std::path::Path;

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContributorsSource {
    /// contrib.rocks image of GitHub contributors.
    #[default]
    GitHub,
    /// Commit authors from local git history.
    Git,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorsConfig {
    pub author: String,
    pub license: String,
    pub source: ContributorsSource,
    /// Maximum authors listed for `source=git`.
    pub limit: usize,
}

impl Default for ContributorsConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            license: String::new(),
            source: ContributorsSource::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ContributorsConfig {
    pub fn from_options(opts: &TagOptions) -> Result<Self> {
        let source = match opts.get("source") {
            None | Some("github") => ContributorsSource::GitHub,
            Some("git") => ContributorsSource::Git,
            Some(other) => {
                return Err(Error::block(
                    "contributors",
                    format!("unknown source `{other}`, expected `github` or `git`"),
                ));
            }
        };
        let limit = match opts.get("limit") {
            None => DEFAULT_LIMIT,
            Some(v) => v.parse().map_err(|_| {
                Error::block("contributors", format!("limit must be a number, got `{v}`"))
            })?,
        };

        Ok(Self {
            author: opts.get("author").unwrap_or_default().to_string(),
            license: opts.get("license").unwrap_or_default().to_string(),
            source,
            limit,
        })
    }
}

pub fn generate(
    config: &ContributorsConfig,
    manifest: &ParsedManifest,
    crate_root: &Path,
) -> Result<Vec<String>> {
    let contributors = match config.source {
        ContributorsSource::GitHub => Vec::new(),
        ContributorsSource::Git => commit_authors(crate_root)
            .map_err(|e| Error::block("contributors", format!("{e:#}")))?,
    };
    debug!("contributors"; "{} author(s) from history", contributors.len());
    Ok(render(config, manifest, &contributors))
}

fn render(
    config: &ContributorsConfig,
    manifest: &ParsedManifest,
    contributors: &[Contributor],
) -> Vec<String> {
    let repo_url = format!(
        "https://github.com/{}/{}",
        manifest.username, manifest.repository_name
    );
    let graph_url = format!("{repo_url}/graphs/contributors");

    let license = non_empty(&config.license).or_else(|| non_empty(&manifest.license));
    let author = non_empty(&config.author).or_else(|| manifest.primary_author());

    let mut lines = Vec::new();
    if let Some(license) = license {
        lines.push(format!(
            "Published under the [{license}]({repo_url}/blob/main/LICENSE) license."
        ));
    }
    match author {
        Some(author) => lines.push(format!(
            "Made by {author} and [community]({graph_url}) 💛"
        )),
        None => lines.push(format!("Made by [community]({graph_url}) 💛")),
    }
    lines.push("<br><br>".to_string());

    match config.source {
        ContributorsSource::GitHub => {
            lines.push(format!("<a href=\"{graph_url}\">"));
            lines.push(format!(
                "<img src=\"https://contrib.rocks/image?repo={}/{}\" />",
                manifest.username, manifest.repository_name
            ));
            lines.push("</a>".to_string());
        }
        ContributorsSource::Git => {
            for c in contributors.iter().take(config.limit) {
                lines.push(format!("- {} ({})", c.name, plural_count(c.commits, "commit")));
            }
        }
    }

    lines
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> ParsedManifest {
        ParsedManifest {
            name: "test-crate".into(),
            license: "Apache-2.0".into(),
            authors: vec!["Manifest Author <m@example.com>".into()],
            username: "u".into(),
            repository_name: "r".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_options() {
        let mut opts = TagOptions::default();
        opts.insert("author", "A");
        opts.insert("source", "git");
        opts.insert("limit", "3");
        let config = ContributorsConfig::from_options(&opts).unwrap();
        assert_eq!(config.author, "A");
        assert_eq!(config.source, ContributorsSource::Git);
        assert_eq!(config.limit, 3);

        opts.insert("limit", "many");
        assert!(ContributorsConfig::from_options(&opts).is_err());

        let mut opts = TagOptions::default();
        opts.insert("source", "svn");
        assert!(ContributorsConfig::from_options(&opts).is_err());
    }

    #[test]
    fn test_render_with_options() {
        let config = ContributorsConfig {
            author: "A".into(),
            license: "MIT".into(),
            ..Default::default()
        };
        let lines = render(&config, &manifest(), &[]);
        assert_eq!(
            lines[0],
            "Published under the [MIT](https://github.com/u/r/blob/main/LICENSE) license."
        );
        assert_eq!(
            lines[1],
            "Made by A and [community](https://github.com/u/r/graphs/contributors) 💛"
        );
        assert!(lines.contains(&"<img src=\"https://contrib.rocks/image?repo=u/r\" />".to_string()));
    }

    #[test]
    fn test_render_falls_back_to_manifest() {
        let lines = render(&ContributorsConfig::default(), &manifest(), &[]);
        assert!(lines[0].contains("[Apache-2.0]"));
        assert!(lines[1].starts_with("Made by Manifest Author and"));
    }

    #[test]
    fn test_render_without_license_or_author() {
        let manifest = ParsedManifest {
            username: "u".into(),
            repository_name: "r".into(),
            ..Default::default()
        };
        let lines = render(&ContributorsConfig::default(), &manifest, &[]);
        assert_eq!(
            lines[0],
            "Made by [community](https://github.com/u/r/graphs/contributors) 💛"
        );
    }

    #[test]
    fn test_render_git_list() {
        let config = ContributorsConfig {
            source: ContributorsSource::Git,
            limit: 2,
            ..Default::default()
        };
        let contributors = vec![
            Contributor {
                name: "Alice".into(),
                email: "a@example.com".into(),
                commits: 5,
            },
            Contributor {
                name: "Bob".into(),
                email: "b@example.com".into(),
                commits: 1,
            },
            Contributor {
                name: "Carol".into(),
                email: "c@example.com".into(),
                commits: 1,
            },
        ];
        let lines = render(&config, &manifest(), &contributors);
        let list: Vec<_> = lines.iter().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(list, vec!["- Alice (5 commits)", "- Bob (1 commit)"]);
        assert!(!lines.iter().any(|l| l.contains("contrib.rocks")));
    }
}
