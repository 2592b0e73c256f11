//! automd-rs - Update README.md from Cargo.toml, automatically.

use anyhow::Result;
use automd_rs::cli::{self, Cli, Commands};
use automd_rs::config::{AutomdConfig, init_config};
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(AutomdConfig::load(cli)?);

    match cli.resolved_command() {
        Commands::Update(args) => cli::update::run_update(&config, &args),
        Commands::Docs(args) => cli::docs::run_docs(&config, &args),
        Commands::Init(args) => cli::init::run_init(&config, &args),
    }
}
