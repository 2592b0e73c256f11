//! `docs` command: validate `[docs]` and export it.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;

use super::DocsArgs;
use crate::config::AutomdConfig;
use crate::docs::to_site_string;
use crate::log;

pub fn run_docs(config: &AutomdConfig, args: &DocsArgs) -> Result<()> {
    let mut json = to_site_string(&config.docs, args.pretty).context("Failed to serialize [docs]")?;
    json.push('\n');

    match &args.output {
        Some(path) => {
            let path = crate::utils::path::resolve_from(config.get_root(), path);
            fs::write(&path, &json)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("docs"; "wrote {}", config.root_relative(&path).display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
[docs]
title = "Demo"
description = "A demo site."
nav = [{ text = "Guide", link = "/guide/intro" }]
sidebar = [{ text = "Guide", items = [{ text = "Guide", link = "/guide/intro" }] }]
social_links = [{ icon = "github", link = "https://github.com/jane/demo" }]
"#;

    fn cli(args: &[&str]) -> &'static Cli {
        let argv = std::iter::once("automd-rs").chain(args.iter().copied());
        Box::leak(Box::new(Cli::parse_from(argv)))
    }

    fn docs_args(cli: &Cli) -> DocsArgs {
        match cli.resolved_command() {
            Commands::Docs(args) => args,
            other => panic!("expected docs command, got {other:?}"),
        }
    }

    #[test]
    fn test_output_is_root_relative() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("automd.toml"), CONFIG).unwrap();
        let sub = dir.path().join("src");
        fs::create_dir_all(&sub).unwrap();

        let cli = cli(&["docs", "-o", "site.json"]);
        let config = AutomdConfig::load_from(cli, &sub).unwrap();
        run_docs(&config, &docs_args(cli)).unwrap();

        assert!(!sub.join("site.json").exists());
        let written = fs::read_to_string(dir.path().join("site.json")).unwrap();
        assert!(written.ends_with('\n'));
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["title"], "Demo");
        assert_eq!(json["themeConfig"]["nav"][0]["link"], "/guide/intro");
        assert_eq!(json["themeConfig"]["socialLinks"][0]["icon"], "github");
    }

    #[test]
    fn test_pretty_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("automd.toml"), CONFIG).unwrap();

        let cli = cli(&["d", "--pretty", "-o", "site.json"]);
        let config = AutomdConfig::load_from(cli, dir.path()).unwrap();
        run_docs(&config, &docs_args(cli)).unwrap();

        let written = fs::read_to_string(dir.path().join("site.json")).unwrap();
        assert!(written.starts_with("{\n"));
    }

    #[test]
    fn test_invalid_docs_rejected_before_export() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("automd.toml"),
            "[docs]\ntitle = \"\"\nnav = [{ text = \"Bad\", link = \"ftp://example.com\" }]\nmirror_nav = false\n",
        )
        .unwrap();

        let cli = cli(&["docs", "-o", "site.json"]);
        assert!(AutomdConfig::load_from(cli, dir.path()).is_err());
        assert!(!dir.path().join("site.json").exists());
    }
}
