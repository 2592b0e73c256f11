//! `[docs]` → site generator JSON.

use crate::config::{DocsConfig, NavItem, SidebarGroup, SocialLink};
use serde::Serialize;
use serde_json::Value;

/// Top-level site object.
#[derive(Debug, Serialize)]
pub struct SiteExport<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(rename = "themeConfig")]
    pub theme_config: ThemeConfigExport<'a>,
}

#[derive(Debug, Serialize)]
pub struct ThemeConfigExport<'a> {
    pub nav: &'a [NavItem],
    pub sidebar: &'a [SidebarGroup],
    #[serde(rename = "socialLinks")]
    pub social_links: &'a [SocialLink],
}

impl<'a> From<&'a DocsConfig> for SiteExport<'a> {
    fn from(config: &'a DocsConfig) -> Self {
        Self {
            title: &config.title,
            description: &config.description,
            theme_config: ThemeConfigExport {
                nav: &config.nav,
                sidebar: &config.sidebar,
                social_links: &config.social_links,
            },
        }
    }
}

/// Export `config` as a JSON value.
pub fn to_site_json(config: &DocsConfig) -> Value {
    serde_json::json!(SiteExport::from(config))
}

/// Export `config` as JSON text, optionally pretty-printed.
pub fn to_site_string(config: &DocsConfig, pretty: bool) -> serde_json::Result<String> {
    let export = SiteExport::from(config);
    if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    fn config() -> DocsConfig {
        test_parse_config(
            r#"
[docs]
title = "Demo"
description = "A demo."
nav = [
    { text = "Guide", link = "/guide/" },
    { text = "API", link = "/api" },
]
sidebar = [
    { text = "Start", items = [{ text = "Guide", link = "/guide/" }] },
    { text = "Reference", items = [{ text = "API", link = "/api" }] },
]
social_links = [{ icon = "x", link = "https://x.com/demo" }]
"#,
        )
        .docs
    }

    #[test]
    fn test_to_site_json_shape() {
        let value = to_site_json(&config());
        assert_eq!(
            value,
            json!({
                "title": "Demo",
                "description": "A demo.",
                "themeConfig": {
                    "nav": [
                        { "text": "Guide", "link": "/guide/" },
                        { "text": "API", "link": "/api" }
                    ],
                    "sidebar": [
                        { "text": "Start", "items": [{ "text": "Guide", "link": "/guide/" }] },
                        { "text": "Reference", "items": [{ "text": "API", "link": "/api" }] }
                    ],
                    "socialLinks": [{ "icon": "x", "link": "https://x.com/demo" }]
                }
            })
        );
    }

    #[test]
    fn test_key_order_preserved() {
        let text = to_site_string(&config(), false).unwrap();
        let title = text.find("\"title\"").unwrap();
        let description = text.find("\"description\"").unwrap();
        let theme = text.find("\"themeConfig\"").unwrap();
        assert!(title < description && description < theme);

        let nav = text.find("\"nav\"").unwrap();
        let social = text.find("\"socialLinks\"").unwrap();
        assert!(nav < social);
    }

    #[test]
    fn test_pretty() {
        let pretty = to_site_string(&config(), true).unwrap();
        assert!(pretty.contains("\n  \"themeConfig\""));
        assert!(!to_site_string(&config(), false).unwrap().contains('\n'));
    }

    #[test]
    fn test_empty_config() {
        let value = to_site_json(&DocsConfig::default());
        assert_eq!(value["themeConfig"]["nav"], json!([]));
        assert_eq!(value["title"], "");
    }
}
