//! `[docs]` section: metadata for the documentation site.
//!
//! The site itself is built by an external generator; this section only
//! describes it and is exported with `automd-rs docs`.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! title = "Automd-RS"
//! description = "Update README.md from Cargo.toml, automatically."
//! nav = [
//!     { text = "Guide", link = "/guide/getting-started" },
//! ]
//! sidebar = [
//!     { text = "Guide", items = [{ text = "Guide", link = "/guide/getting-started" }] },
//! ]
//! social_links = [
//!     { icon = "github", link = "https://github.com/betterhyq/automd-rs" },
//! ]
//! ```

mod link;
mod nav;
mod social;

pub use link::{LinkError, LinkTarget};
pub use nav::{NavItem, SidebarGroup};
pub use social::{SocialIcon, SocialLink};

use crate::config::{ConfigDiagnostics, config_fields};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub title: String,
    pub description: String,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarGroup>,
    pub social_links: Vec<SocialLink>,

    /// Require the flattened sidebar to repeat the nav exactly.
    pub mirror_nav: bool,

    /// Markdown source directory; when set, in-site links must resolve to
    /// a page in it.
    pub src_dir: Option<PathBuf>,
}

config_fields!(DocsConfig => DocsConfigFields {
    title: "docs.title",
    description: "docs.description",
    nav: "docs.nav",
    sidebar: "docs.sidebar",
    social_links: "docs.social_links",
    mirror_nav: "docs.mirror_nav",
    src_dir: "docs.src_dir",
});

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            nav: Vec::new(),
            sidebar: Vec::new(),
            social_links: Vec::new(),
            mirror_nav: true,
            src_dir: None,
        }
    }
}

impl DocsConfig {
    /// Sidebar items, flattened across groups in display order.
    pub fn sidebar_items(&self) -> impl Iterator<Item = &NavItem> {
        self.sidebar.iter().flat_map(|group| group.items.iter())
    }

    /// Whether the flattened sidebar lists the nav items (same text, link
    /// and order).
    pub fn sidebar_mirrors_nav(&self) -> bool {
        self.sidebar_items().eq(self.nav.iter())
    }

    /// Collect every problem in the section.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = Self::FIELDS;

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                fields.title,
                "site title is empty",
                format!("set {}, e.g.: \"Automd-RS\"", fields.title),
            );
        }
        if self.description.trim().is_empty() {
            diag.warn(fields.description, "site description is empty");
        }

        for (i, item) in self.nav.iter().enumerate() {
            self.validate_item(item, &format!("nav[{i}]"), fields.nav, diag);
        }

        for (g, group) in self.sidebar.iter().enumerate() {
            if group.text.trim().is_empty() {
                diag.error(fields.sidebar, format!("sidebar[{g}].text is empty"));
            }
            if group.items.is_empty() {
                diag.warn(fields.sidebar, format!("sidebar group `{}` has no items", group.text));
            }
            for (i, item) in group.items.iter().enumerate() {
                let at = format!("sidebar[{g}].items[{i}]");
                self.validate_item(item, &at, fields.sidebar, diag);
            }
        }

        if self.mirror_nav && !self.sidebar_mirrors_nav() {
            diag.error_with_hint(
                fields.sidebar,
                "sidebar items do not match the nav items",
                format!(
                    "list the nav links in the same order, or set {} = false",
                    fields.mirror_nav
                ),
            );
        }

        for (i, social) in self.social_links.iter().enumerate() {
            match LinkTarget::classify(&social.link) {
                Ok(LinkTarget::External(_)) => {}
                Ok(LinkTarget::Internal(_)) => diag.error_with_hint(
                    fields.social_links,
                    format!("social_links[{i}] ({}) must be an absolute URL", social.icon),
                    "use format like https://github.com/owner/repo",
                ),
                Err(e) => diag.error_with_hint(
                    fields.social_links,
                    format!("social_links[{i}] ({}): {e}", social.icon),
                    "use format like https://github.com/owner/repo",
                ),
            }
        }

        if let Some(src_dir) = &self.src_dir
            && !src_dir.is_dir()
        {
            diag.error(
                fields.src_dir,
                format!("directory `{}` does not exist", src_dir.display()),
            );
        }
    }

    fn validate_item(
        &self,
        item: &NavItem,
        at: &str,
        field: crate::config::FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        if item.text.trim().is_empty() {
            diag.error(field, format!("{at}.text is empty"));
        }

        let target = match LinkTarget::classify(&item.link) {
            Ok(target) => target,
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("{at}.link: {e}"),
                    "use an in-site path like /guide/getting-started or an http(s) URL",
                );
                return;
            }
        };

        if let Some(src_dir) = self.src_dir.as_deref().filter(|d| d.is_dir()) {
            let candidates = target.source_candidates(src_dir);
            if !candidates.is_empty() && !candidates.iter().any(|c| c.is_file()) {
                let expected = candidates
                    .iter()
                    .map(|c| c.display().to_string())
                    .collect::<Vec<_>>()
                    .join(" or ");
                diag.error(
                    field,
                    format!("{at}.link `{}` has no page, expected {expected}", item.link),
                );
            }
        }
    }
}
