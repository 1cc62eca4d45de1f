//! Manifest file watcher for development reloads.

use std::path::{Path, PathBuf};
use std::time::Duration;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_manifest;
use crate::config::schema::RouteManifest;

/// Monitors a manifest file and forwards each valid new version.
///
/// Consumers build a fresh `RouteTable` from each manifest; existing tables
/// are never modified.
pub struct ManifestWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RouteManifest>,
}

impl ManifestWatcher {
    /// Create a new watcher and the receiver for manifest updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouteManifest>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    tracing::info!(path = ?path, "Manifest change detected, reloading");
                    match load_manifest(&path) {
                        Ok(manifest) => {
                            if tx.send(manifest).is_err() {
                                tracing::debug!("Manifest receiver dropped");
                            }
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to reload manifest, keeping current routes");
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Manifest watcher started");
        Ok(watcher)
    }
}
