//! Parsing of `<!-- automdrs:NAME key="value" ... -->` tag options.
//!
//! Supports `key="quoted value"`, `key='quoted value'`, `key=bare` and
//! standalone words (treated as `word = "true"`).

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use super::block::{OPEN_PREFIX, OPEN_SUFFIX};
use crate::debug;

static RE_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z0-9_][A-Za-z0-9_.-]*)(?:=(?:"([^"]*)"|'([^']*)'|([^ \t"'][^ \t]*)))?"#)
        .unwrap()
});

/// Options given on a block's opening tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    values: FxHashMap<String, String>,
}

impl TagOptions {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// First present key among `keys`, or `default`.
    pub fn get_or<'a>(&'a self, keys: &[&str], default: &'a str) -> &'a str {
        keys.iter()
            .find_map(|key| self.get(key))
            .unwrap_or(default)
    }

    /// Boolean option with aliases, checked in order.
    ///
    /// `true|yes|1|on` → true, `false|no|0|off` → false; a key with any
    /// other value is skipped. Missing keys are false.
    pub fn flag(&self, keys: &[&str]) -> bool {
        for key in keys {
            if let Some(v) = self.get(key) {
                match v.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "1" | "on" => return true,
                    "false" | "no" | "0" | "off" => return false,
                    _ => {}
                }
            }
        }
        false
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse options following `block_name` on an opening tag line.
///
/// Returns empty options when the line is not an opening tag for `block_name`.
///
/// # Examples
/// - `<!-- automdrs:badges version downloads -->` → `{version: "true", downloads: "true"}`
/// - `<!-- automdrs:contributors author="YONGQI" license="MIT" -->` → `{author: "YONGQI", license: "MIT"}`
pub fn parse_tag_options(open_tag_line: &str, block_name: &str) -> TagOptions {
    let mut out = TagOptions::default();

    let Some(inner) = open_tag_line
        .trim()
        .strip_prefix(OPEN_PREFIX)
        .and_then(|s| s.strip_suffix(OPEN_SUFFIX))
        .map(str::trim)
    else {
        return out;
    };

    let rest = match inner.strip_prefix(block_name) {
        Some(r) if r.is_empty() || r.starts_with(char::is_whitespace) => r.trim(),
        _ => return out,
    };

    for cap in RE_OPTION.captures_iter(rest) {
        let key = &cap[1];
        let value = cap
            .get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .map_or("true", |m| m.as_str());
        out.insert(key, value);
    }

    debug!("options"; "{block_name}: {:?}", out.values);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> TagOptions {
        let mut o = TagOptions::default();
        for (k, v) in pairs {
            o.insert(*k, *v);
        }
        o
    }

    #[test]
    fn test_parse_standalone() {
        let opts = parse_tag_options("  <!-- automdrs:badges version downloads -->  ", "badges");
        assert_eq!(opts.get("version"), Some("true"));
        assert_eq!(opts.get("downloads"), Some("true"));
        assert_eq!(opts.len(), 2);
    }

    #[test]
    fn test_parse_key_value() {
        let opts = parse_tag_options(
            "<!-- automdrs:contributors author=\"YONGQI\" license=\"MIT\" -->",
            "contributors",
        );
        assert_eq!(opts.get("author"), Some("YONGQI"));
        assert_eq!(opts.get("license"), Some("MIT"));
    }

    #[test]
    fn test_parse_quoted_with_spaces() {
        let opts = parse_tag_options(
            "<!-- automdrs:with-automdrs message='Made with love' lang=rust -->",
            "with-automdrs",
        );
        assert_eq!(opts.get("message"), Some("Made with love"));
        assert_eq!(opts.get("lang"), Some("rust"));
    }

    #[test]
    fn test_parse_mixed() {
        let opts = parse_tag_options(
            "<!-- automdrs:badges showCrateVersion=\"true\" docs -->",
            "badges",
        );
        assert_eq!(opts.get("showCrateVersion"), Some("true"));
        assert_eq!(opts.get("docs"), Some("true"));
    }

    #[test]
    fn test_wrong_block_name() {
        assert!(parse_tag_options("<!-- automdrs:other version -->", "badges").is_empty());
        // prefix of a longer name is not a match
        assert!(parse_tag_options("<!-- automdrs:cargo-add dev -->", "cargo").is_empty());
    }

    #[test]
    fn test_no_options() {
        assert!(parse_tag_options("<!-- automdrs:cargo-install -->", "cargo-install").is_empty());
    }

    #[test]
    fn test_flag() {
        let o = opts(&[("on", "true"), ("off", "false"), ("junk", "maybe")]);
        assert!(o.flag(&["on"]));
        assert!(!o.flag(&["off"]));
        assert!(o.flag(&["missing", "on"]));
        assert!(!o.flag(&["missing"]));
        assert!(o.flag(&["junk", "on"]));
    }

    #[test]
    fn test_flag_yes_no_1_0() {
        let o = opts(&[("y", "YES"), ("n", "no"), ("one", "1"), ("zero", "0")]);
        assert!(o.flag(&["y"]));
        assert!(!o.flag(&["n"]));
        assert!(o.flag(&["one"]));
        assert!(!o.flag(&["zero"]));
    }

    #[test]
    fn test_get_or() {
        let o = opts(&[("lang", "toml")]);
        assert_eq!(o.get_or(&["language", "lang"], "text"), "toml");
        assert_eq!(o.get_or(&["missing"], "text"), "text");
    }
}
