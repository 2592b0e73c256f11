//! Configuration section definitions.
//!
//! Each module corresponds to a section in `automd.toml`:
//!
//! | Module   | TOML Section | Purpose                               |
//! |----------|--------------|---------------------------------------|
//! | `readme` | `[readme]`   | README path and crate directory       |
//! | `docs`   | `[docs]`     | Documentation site nav/sidebar/social |

pub mod docs;
mod readme;

pub use docs::{
    DocsConfig, LinkError, LinkTarget, NavItem, SidebarGroup, SocialIcon, SocialLink,
};
pub use readme::ReadmeConfig;
