use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc::{self, Sender};
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::catalog;
use crate::events::DeckCommand;
use crate::profile::Profile;

/// Hot-swaps the deck catalog from an externally written recommendations file.
///
/// The watcher is installed before the startup read, so a write landing in
/// between is still seen. After that the file is read again once each burst
/// of create/modify events has been quiet for `debounce`. Removing the file
/// keeps the current deck.
#[instrument(skip(path, to_deck, cancel), fields(path = %path.display()))]
pub async fn run(
    path: PathBuf,
    debounce: Duration,
    to_deck: Sender<DeckCommand>,
    cancel: CancellationToken,
) -> Result<()> {
    let file_name = path
        .file_name()
        .map(OsString::from)
        .with_context(|| format!("{} has no file name", path.display()))?;
    let dir = watch_dir(&path);

    // Bridge notify callback -> async channel
    let (watch_tx, mut watch_rx) = mpsc::channel::<notify::Result<Event>>(128);
    let mut watcher = recommended_watcher(move |res| {
        let _ = watch_tx.blocking_send(res);
    })?;
    // Watch the directory: editors and generators often replace the file atomically.
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching {}", dir.display()))?;
    info!(watching = %dir.display(), "recommendations watcher initialized");

    // Startup read goes through the same branch as a change, without waiting.
    let mut deadline = path.exists().then(Instant::now);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting recommendations task");
                break;
            }

            maybe_res = watch_rx.recv() => match maybe_res {
                Some(Ok(event)) => {
                    if touches(&event, &file_name) {
                        debug!(kind = ?event.kind, "recommendations changed");
                        deadline = Some(Instant::now() + debounce);
                    }
                }
                Some(Err(err)) => error!("watch error: {err}"),
                None => break,
            },

            () = async move { if let Some(at) = deadline { sleep_until(at).await } }, if deadline.is_some() => {
                deadline = None;
                if !path.exists() {
                    debug!("recommendations file gone; keeping current deck");
                    continue;
                }
                if !forward(&path, &to_deck).await {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Read the file and send it to the deck. Returns `false` once the deck is gone.
async fn forward(path: &Path, to_deck: &Sender<DeckCommand>) -> bool {
    match catalog::load_file::<Profile>(path) {
        Ok(items) => {
            info!(count = items.len(), "recommendations loaded");
            if to_deck.send(DeckCommand::ReplaceCatalog(items)).await.is_err() {
                warn!("deck channel closed");
                return false;
            }
        }
        Err(err) => warn!("ignoring unreadable recommendations: {err}"),
    }
    true
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn touches(event: &Event, file_name: &OsString) -> bool {
    let relevant = match &event.kind {
        EventKind::Create(_) => true,
        EventKind::Modify(kind) => !matches!(kind, ModifyKind::Metadata(_)),
        _ => false,
    };
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_watches_current_dir() {
        assert_eq!(watch_dir(Path::new("recs.json")), PathBuf::from("."));
        assert_eq!(
            watch_dir(Path::new("/data/recs.json")),
            PathBuf::from("/data")
        );
    }

    #[test]
    fn only_matching_create_or_modify_counts() {
        let name = OsString::from("recs.json");
        let modify = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/data/recs.json"));
        assert!(touches(&modify, &name));

        let other = Event::new(EventKind::Create(notify::event::CreateKind::File))
            .add_path(PathBuf::from("/data/other.json"));
        assert!(!touches(&other, &name));

        let removed = Event::new(EventKind::Remove(notify::event::RemoveKind::File))
            .add_path(PathBuf::from("/data/recs.json"));
        assert!(!touches(&removed, &name));
    }
}
