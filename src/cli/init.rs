//! `init` command: write a commented `automd.toml`.

use anyhow::{Context, Result, bail};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::config::AutomdConfig;
use crate::manifest::{self, ParsedManifest};
use crate::{debug, log};

/// Generate automd.toml content with comments.
///
/// `[docs]` is seeded from the manifest when one is found.
pub fn generate_config_template(manifest: Option<&ParsedManifest>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "# automd-rs configuration file (v{})",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str("# https://github.com/betterhyq/automd-rs\n\n");

    out.push_str("[readme]\n");
    out.push_str("# README to update, relative to this file.\n");
    out.push_str("path = \"README.md\"\n");
    out.push_str("# Directory to start the Cargo.toml search from.\n");
    out.push_str("manifest_dir = \".\"\n\n");

    let (title, description, repo) = match manifest {
        Some(m) => (
            m.name.as_str(),
            m.description.as_str(),
            format!("https://github.com/{}/{}", m.username, m.repository_name),
        ),
        None => ("My Crate", "", "https://github.com/owner/repo".to_string()),
    };

    out.push_str("[docs]\n");
    let _ = writeln!(out, "title = {}", toml_string(title));
    let _ = writeln!(out, "description = {}", toml_string(description));
    out.push_str("# Sidebar must list the nav items in order unless this is false.\n");
    out.push_str("mirror_nav = true\n");
    out.push_str("# Markdown sources; when set, every in-site link must have a page.\n");
    out.push_str("# src_dir = \"docs\"\n");
    out.push_str("nav = [\n");
    out.push_str("    { text = \"Guide\", link = \"/guide/getting-started\" },\n");
    out.push_str("]\n");
    out.push_str("sidebar = [\n");
    out.push_str("    { text = \"Guide\", items = [\n");
    out.push_str("        { text = \"Guide\", link = \"/guide/getting-started\" },\n");
    out.push_str("    ] },\n");
    out.push_str("]\n");
    out.push_str("# icons: discord, facebook, github, instagram, linkedin, mastodon,\n");
    out.push_str("#        npm, slack, twitter, x, youtube\n");
    out.push_str("social_links = [\n");
    let _ = writeln!(out, "    {{ icon = \"github\", link = {} }},", toml_string(&repo));
    out.push_str("]\n");

    out
}

/// Quote `s` as a TOML basic string.
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

/// Write the template to the config path, or print it with `--dry`.
pub fn run_init(config: &AutomdConfig, args: &InitArgs) -> Result<()> {
    let manifest = manifest::parse(config.get_root())
        .inspect_err(|e| debug!("init"; "no manifest for template: {}", e))
        .ok();
    let content = generate_config_template(manifest.as_ref());

    if args.dry {
        print!("{content}");
        return Ok(());
    }

    write_config(&config.config_path, &content, args.force)?;
    log!("init"; "wrote {}", config.root_relative(&config.config_path).display());
    Ok(())
}

fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}
