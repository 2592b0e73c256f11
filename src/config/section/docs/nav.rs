//! Navigation bar and sidebar entries.
//!
//! ```toml
//! [[docs.nav]]
//! text = "Guide"
//! link = "/guide/getting-started"
//!
//! [[docs.sidebar]]
//! text = "Guide"
//! items = [
//!     { text = "Guide", link = "/guide/getting-started" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A labelled link in the top navigation or a sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A titled, ordered list of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        nav: Vec<NavItem>,
        sidebar: Vec<SidebarGroup>,
    }

    #[test]
    fn test_parse_preserves_order() {
        let toml = r#"
nav = [
    { text = "B", link = "/b" },
    { text = "A", link = "/a" },
]

[[sidebar]]
text = "Group"
items = [{ text = "B", link = "/b" }, { text = "A", link = "/a" }]
"#;
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(parsed.nav, vec![NavItem::new("B", "/b"), NavItem::new("A", "/a")]);
        assert_eq!(parsed.sidebar[0].items, parsed.nav);
    }

    #[test]
    fn test_missing_link_rejected() {
        let result: Result<Wrapper, _> = toml::from_str("nav = [{ text = \"A\" }]\nsidebar = []");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_item_field_rejected() {
        let result: Result<Wrapper, _> =
            toml::from_str("nav = [{ text = \"A\", link = \"/a\", icon = \"x\" }]\nsidebar = []");
        assert!(result.is_err());
    }
}
