//! `update --watch`: re-run on changes to the manifest, README or config.
//!
//! Parent directories are watched non-recursively so editors that replace
//! files atomically are still seen. Events are debounced, and the event
//! caused by our own README write is recognised by content hash.

use anyhow::Result;
use notify::{EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::config::{AutomdConfig, cfg, reload_config};
use crate::logger::{status_error, status_success, status_unchanged};
use crate::utils::{hash, path::normalize_path};
use crate::{debug, log, manifest};

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Files whose changes trigger a re-run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WatchTargets {
    readme: PathBuf,
    manifest: Option<PathBuf>,
    config: PathBuf,
}

impl WatchTargets {
    fn from_config(config: &AutomdConfig) -> Self {
        Self {
            readme: normalize_path(&config.readme.path),
            manifest: manifest::find_manifest(&config.readme.manifest_dir),
            config: normalize_path(&config.config_path),
        }
    }

    fn files(&self) -> impl Iterator<Item = &Path> {
        [Some(&self.readme), self.manifest.as_ref(), Some(&self.config)]
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
    }

    fn dirs(&self) -> FxHashSet<PathBuf> {
        self.files()
            .filter_map(Path::parent)
            .map(Path::to_path_buf)
            .collect()
    }

    fn matches(&self, path: &Path) -> bool {
        let path = normalize_path(path);
        self.files().any(|target| target == path)
    }
}

/// Paths touched by one debounced batch of events.
#[derive(Debug, Default)]
struct Batch {
    readme: bool,
    manifest: bool,
    config: bool,
}

impl Batch {
    fn add(&mut self, targets: &WatchTargets, event: &notify::Event) {
        if !matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) || matches!(event.kind, EventKind::Modify(notify::event::ModifyKind::Metadata(_)))
        {
            return;
        }

        for path in &event.paths {
            if !targets.matches(path) {
                continue;
            }
            let path = normalize_path(path);
            if path == targets.readme {
                self.readme = true;
            } else if path == targets.config {
                self.config = true;
            } else {
                self.manifest = true;
            }
        }
    }

    fn is_empty(&self) -> bool {
        !(self.readme || self.manifest || self.config)
    }

    /// Only the README changed, and it still holds what we wrote.
    fn is_own_write(&self, readme: &Path, last_written: Option<u64>) -> bool {
        self.readme
            && !self.manifest
            && !self.config
            && last_written.is_some()
            && hash::compute_file(readme) == last_written
    }
}

/// Watch and re-run until the process is interrupted.
pub fn watch_readme(config: &AutomdConfig) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;

    let mut targets = WatchTargets::from_config(config);
    let mut watched = FxHashSet::default();
    watch_dirs(&mut watcher, &targets, &mut watched)?;

    log!(
        "watch";
        "watching {} (ctrl-c to stop)",
        config.root_relative(&targets.readme).display()
    );
    let mut last_written = rerun(config);

    while let Some(batch) = next_batch(&rx, &targets) {
        if batch.is_own_write(&targets.readme, last_written) {
            debug!("watch"; "ignoring own write");
            continue;
        }

        if batch.config {
            match reload_config() {
                Ok(true) => log!("watch"; "config reloaded"),
                Ok(false) => {}
                Err(e) => {
                    status_error("config reload failed", &format!("{e:#}"));
                    continue;
                }
            }
        }

        let config = cfg();
        targets = WatchTargets::from_config(&config);
        watch_dirs(&mut watcher, &targets, &mut watched)?;
        last_written = rerun(&config).or(last_written);
    }

    Ok(())
}

/// Run one update; returns the hash of the content written, if any.
fn rerun(config: &AutomdConfig) -> Option<u64> {
    let readme = config.root_relative(&config.readme.path);
    match super::update::update_once(config) {
        Ok(outcome) if outcome.changed => {
            status_success(&format!("updated: {}", readme.display()));
            Some(hash::compute(&outcome.content))
        }
        Ok(_) => {
            status_unchanged(&format!("unchanged: {}", readme.display()));
            None
        }
        Err(e) => {
            status_error(&format!("failed: {}", readme.display()), &e.to_string());
            None
        }
    }
}

/// Block for the next relevant batch; `None` when the watcher is gone.
fn next_batch(rx: &Receiver<notify::Result<notify::Event>>, targets: &WatchTargets) -> Option<Batch> {
    loop {
        let mut batch = Batch::default();
        add_result(&mut batch, targets, rx.recv().ok()?);

        loop {
            match rx.recv_timeout(DEBOUNCE) {
                Ok(res) => add_result(&mut batch, targets, res),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }

        if !batch.is_empty() {
            return Some(batch);
        }
    }
}

fn add_result(batch: &mut Batch, targets: &WatchTargets, res: notify::Result<notify::Event>) {
    match res {
        Ok(event) => batch.add(targets, &event),
        Err(e) => log!("watch"; "notify error: {}", e),
    }
}

fn watch_dirs(
    watcher: &mut notify::RecommendedWatcher,
    targets: &WatchTargets,
    watched: &mut FxHashSet<PathBuf>,
) -> notify::Result<()> {
    for dir in targets.dirs() {
        if watched.contains(&dir) || !dir.is_dir() {
            continue;
        }
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!("watch"; "watching {}", dir.display());
        watched.insert(dir);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, MetadataKind, ModifyKind};
    use std::fs;
    use tempfile::TempDir;

    fn targets(dir: &Path) -> WatchTargets {
        WatchTargets {
            readme: dir.join("README.md"),
            manifest: Some(dir.join("Cargo.toml")),
            config: dir.join("automd.toml"),
        }
    }

    fn event(kind: EventKind, path: PathBuf) -> notify::Event {
        notify::Event::new(kind).add_path(path)
    }

    fn setup() -> (TempDir, WatchTargets) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        for file in ["README.md", "Cargo.toml", "automd.toml"] {
            fs::write(root.join(file), "").unwrap();
        }
        let targets = targets(&root);
        (dir, targets)
    }

    #[test]
    fn test_dirs_deduplicated() {
        let (_dir, targets) = setup();
        assert_eq!(targets.dirs().len(), 1);
    }

    #[test]
    fn test_batch_classifies_paths() {
        let (_dir, targets) = setup();
        let modify = EventKind::Modify(ModifyKind::Data(DataChange::Content));

        let mut batch = Batch::default();
        batch.add(&targets, &event(modify, targets.config.clone()));
        assert!(batch.config && !batch.readme && !batch.manifest);

        let parent = targets.readme.parent().unwrap().to_path_buf();
        batch.add(&targets, &event(modify, parent.join("Cargo.toml")));
        assert!(batch.manifest);
    }

    #[test]
    fn test_batch_ignores_noise() {
        let (_dir, targets) = setup();
        let root = targets.readme.parent().unwrap().to_path_buf();

        let mut batch = Batch::default();
        batch.add(
            &targets,
            &event(EventKind::Create(CreateKind::File), root.join("notes.txt")),
        );
        batch.add(
            &targets,
            &event(
                EventKind::Modify(ModifyKind::Metadata(MetadataKind::AccessTime)),
                targets.readme.clone(),
            ),
        );
        assert!(batch.is_empty());
    }

    #[test]
    fn test_own_write_detection() {
        let (_dir, targets) = setup();
        fs::write(&targets.readme, "generated").unwrap();
        let written = Some(hash::compute("generated"));

        let batch = Batch {
            readme: true,
            ..Default::default()
        };
        assert!(batch.is_own_write(&targets.readme, written));
        assert!(!batch.is_own_write(&targets.readme, None));

        fs::write(&targets.readme, "edited by hand").unwrap();
        assert!(!batch.is_own_write(&targets.readme, written));

        let with_manifest = Batch {
            readme: true,
            manifest: true,
            ..Default::default()
        };
        fs::write(&targets.readme, "generated").unwrap();
        assert!(!with_manifest.is_own_write(&targets.readme, written));
    }
}
