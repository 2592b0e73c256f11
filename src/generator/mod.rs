//! Block generators: (config, manifest) → README lines.
//!
//! Each generator owns a small config struct built from the block's tag
//! options, so generators never parse tags themselves.
//!
//! | Block           | Module          |
//! |-----------------|-----------------|
//! | `badges`        | `badges`        |
//! | `contributors`  | `contributors`  |
//! | `with-automdrs` | `with_automdrs` |
//! | `cargo-install` | `install`       |
//! | `cargo-add`     | `install`       |
//! | `description`   | `description`   |
//! | `file`          | `file`          |

pub mod badges;
pub mod contributors;
pub mod description;
pub mod file;
pub mod install;
pub mod with_automdrs;

/// Wrap `lines` in a fenced code block, padded with blank lines.
pub(crate) fn fenced(lang: &str, lines: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out = vec![String::new(), format!("```{lang}")];
    out.extend(lines);
    out.push("```".to_string());
    out.push(String::new());
    out
}
