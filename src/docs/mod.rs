//! Documentation site export.
//!
//! The `[docs]` section is handed to the external site generator as JSON:
//!
//! ```json
//! {
//!   "title": "Automd-RS",
//!   "description": "...",
//!   "themeConfig": { "nav": [...], "sidebar": [...], "socialLinks": [...] }
//! }
//! ```

pub mod export;

pub use export::{SiteExport, ThemeConfigExport, to_site_json, to_site_string};
