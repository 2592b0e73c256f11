//! Command-line interface module.

mod args;
pub mod docs;
pub mod init;
pub mod update;
pub mod watch;

pub use args::{Cli, Commands, DocsArgs, InitArgs, UpdateArgs};
