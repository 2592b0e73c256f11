//! Type-safe config field path.

use crate::logger::paint;
use owo_colors::Style;
use std::fmt;

/// A dotted path into `automd.toml`, e.g. `docs.nav`.
///
/// Sections declare their paths once with [`config_fields!`] and refer to
/// them through `Self::FIELDS`:
///
/// ```ignore
/// config_fields!(DocsConfig => DocsConfigFields {
///     title: "docs.title",
/// });
///
/// diag.error(DocsConfig::FIELDS.title, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&paint(format_args!("`{}`", self.0), Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Declare a `FIELDS` constant listing a section's field paths.
macro_rules! config_fields {
    ($ty:ident => $fields:ident { $($field:ident: $path:literal),* $(,)? }) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new($path),)*
            };
        }
    };
}

pub(crate) use config_fields;
