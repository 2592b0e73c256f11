//! `update` command: regenerate README blocks.

use anyhow::{Result, bail};
use std::io::Write;

use super::UpdateArgs;
use crate::config::AutomdConfig;
use crate::utils::plural::plural_count;
use crate::{DefaultHandler, UpdateOutcome, log};

/// Run `update` in the mode selected by `args`.
pub fn run_update(config: &AutomdConfig, args: &UpdateArgs) -> Result<()> {
    if args.watch {
        return super::watch::watch_readme(config);
    }

    let readme = config.root_relative(&config.readme.path);

    if args.check || args.dry {
        let outcome = plan(config)?;
        if args.dry {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(outcome.content.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }
        if outcome.changed {
            bail!(
                "{} is out of date, run `automd-rs` to update it",
                readme.display()
            );
        }
        log!("readme"; "{} is up to date", readme.display());
        return Ok(());
    }

    let outcome = update_once(config)?;
    report(&readme.display().to_string(), &outcome);
    Ok(())
}

/// Update the configured README on disk.
pub fn update_once(config: &AutomdConfig) -> crate::Result<UpdateOutcome> {
    crate::run(&config.readme.manifest_dir, &config.readme.path)
}

fn plan(config: &AutomdConfig) -> crate::Result<UpdateOutcome> {
    crate::plan(
        &config.readme.manifest_dir,
        &config.readme.path,
        &DefaultHandler,
    )
}

fn report(readme: &str, outcome: &UpdateOutcome) {
    let blocks = plural_count(outcome.blocks, "block");
    if outcome.changed {
        log!("readme"; "updated {} ({})", readme, blocks);
    } else {
        log!("readme"; "{} unchanged ({})", readme, blocks);
    }
}
