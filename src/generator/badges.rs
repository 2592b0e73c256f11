//! `badges` block: shields.io badges for the crate and its repository.

use crate::debug;
use crate::manifest::ParsedManifest;
use crate::readme::TagOptions;

const SHIELDS: &str = "https://img.shields.io";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BadgesConfig {
    pub version: bool,
    pub downloads: bool,
    pub docs: bool,
    pub commit_activity: bool,
    pub repo_stars: bool,
    pub license: bool,
}

impl BadgesConfig {
    /// Each badge accepts its camelCase name or a short alias.
    pub fn from_options(opts: &TagOptions) -> Self {
        Self {
            version: opts.flag(&["showCrateVersion", "version"]),
            downloads: opts.flag(&["showCrateDownloads", "downloads"]),
            docs: opts.flag(&["showCrateDocs", "docs"]),
            commit_activity: opts.flag(&["showCommitActivity", "commit_activity"]),
            repo_stars: opts.flag(&["showRepoStars", "repo_stars"]),
            license: opts.flag(&["showLicense", "license"]),
        }
    }
}

pub fn generate(config: &BadgesConfig, manifest: &ParsedManifest) -> Vec<String> {
    let name = &manifest.name;
    let slug = format!("{}/{}", manifest.username, manifest.repository_name);

    let badges = [
        (
            config.version,
            format!("![Crates.io Version]({SHIELDS}/crates/v/{name})"),
        ),
        (
            config.downloads,
            format!("![Crates.io Total Downloads]({SHIELDS}/crates/d/{name})"),
        ),
        (
            config.docs,
            format!("![docs.rs]({SHIELDS}/docsrs/{name})"),
        ),
        (
            config.commit_activity,
            format!("![GitHub commit activity]({SHIELDS}/github/commit-activity/m/{slug})"),
        ),
        (
            config.repo_stars,
            format!("![GitHub Repo stars]({SHIELDS}/github/stars/{slug})"),
        ),
        (
            config.license,
            format!("![Crates.io License]({SHIELDS}/crates/l/{name})"),
        ),
    ];

    let lines: Vec<String> = badges
        .into_iter()
        .filter_map(|(enabled, badge)| enabled.then_some(badge))
        .collect();
    debug!("badges"; "{} badge(s) for {}", lines.len(), name);
    lines
}
