//! Social links shown in the docs site header.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon identifiers recognised by the docs theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    pub const ALL: [Self; 11] = [
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{ icon = "github", link = "https://github.com/..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}
