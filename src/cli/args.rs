//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Update README.md from Cargo.toml, automatically
///
/// Runs `update` when no command is given.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: automd.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "automd.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Arguments for the implicit `update` command
    #[command(flatten)]
    pub update: UpdateArgs,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Regenerate README blocks from Cargo.toml
    #[command(visible_alias = "u")]
    Update(UpdateArgs),

    /// Validate [docs] and export it as site generator JSON
    #[command(visible_alias = "d")]
    Docs(DocsArgs),

    /// Write a commented automd.toml
    #[command(visible_alias = "i")]
    Init(InitArgs),
}

/// Update command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// Directory to search for Cargo.toml (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub manifest_dir: Option<PathBuf>,

    /// README file to update (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub readme: Option<PathBuf>,

    /// Fail if the README is out of date instead of writing it
    #[arg(long, conflicts_with_all = ["dry", "watch"])]
    pub check: bool,

    /// Print the updated README to stdout without writing it
    #[arg(long, conflicts_with = "watch")]
    pub dry: bool,

    /// Re-run when Cargo.toml, the README or automd.toml changes
    #[arg(short, long)]
    pub watch: bool,
}

/// Docs command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DocsArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Init command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Print the template to stdout instead of writing it
    #[arg(long)]
    pub dry: bool,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// The command to run; `update` when none is given.
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Update(self.update.clone()))
    }

    /// Update arguments, when the command is `update`.
    pub fn update_args(&self) -> Option<&UpdateArgs> {
        match &self.command {
            None => Some(&self.update),
            Some(Commands::Update(args)) => Some(args),
            Some(_) => None,
        }
    }

    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Commands::Init(_)))
    }
}
