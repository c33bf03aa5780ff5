use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::deck::WindowedCircularDeck;
use crate::events::{DeckCommand, SnapshotCause, ViewerEvent, WindowSnapshot};
use crate::profile::{Profile, matches_location};

pub type ProfileDeck = WindowedCircularDeck<Profile>;

/// Owns the deck and applies commands in arrival order.
///
/// Rules:
/// - Publish a snapshot right after startup so the viewer has something to draw.
/// - Every command produces exactly one viewer event: a fresh snapshot when
///   the deck changed, a notice when it did not.
/// - A rejected catalog replacement keeps the current deck serving.
pub async fn run(
    mut deck: ProfileDeck,
    mut commands: Receiver<DeckCommand>,
    to_viewer: Sender<ViewerEvent>,
    cancel: CancellationToken,
) -> Result<()> {
    let initial = ViewerEvent::Window(snapshot(&deck, SnapshotCause::Loaded));
    if to_viewer.send(initial).await.is_err() {
        warn!("viewer channel closed before first snapshot");
        return Ok(());
    }

    loop {
        select! {
            // Commands already queued are applied before honouring cancellation.
            biased;
            maybe_cmd = commands.recv() => {
                let Some(cmd) = maybe_cmd else {
                    debug!("command producers gone; deck task exiting");
                    break;
                };
                let event = apply(&mut deck, cmd);
                if to_viewer.send(event).await.is_err() {
                    warn!("viewer channel closed");
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }
    Ok(())
}

/// Apply one command to the deck and describe the outcome for the viewer.
pub fn apply(deck: &mut ProfileDeck, cmd: DeckCommand) -> ViewerEvent {
    match cmd {
        DeckCommand::Dismiss(direction) => {
            let index = deck.advance();
            debug!(index, %direction, front = deck.front(), next = deck.next(), "dismissed");
            ViewerEvent::Window(snapshot(deck, SnapshotCause::Dismissed { index, direction }))
        }
        DeckCommand::Find(query) => {
            if deck.jump_to(|p| matches_location(p, &query)) {
                info!(query = %query, front = deck.front(), "jumped to location");
                ViewerEvent::Window(snapshot(deck, SnapshotCause::Jumped { query }))
            } else {
                info!(query = %query, "no profile matches location");
                ViewerEvent::Notice(format!("no profile found in {query:?}"))
            }
        }
        DeckCommand::ReplaceCatalog(catalog) => {
            let count = catalog.len();
            match deck.replace_catalog(catalog) {
                Ok(()) => {
                    info!(count, "catalog replaced");
                    ViewerEvent::Window(snapshot(deck, SnapshotCause::Replaced))
                }
                Err(err) => {
                    error!("catalog replacement rejected: {err}");
                    ViewerEvent::Notice(format!("recommendations not applied: {err}"))
                }
            }
        }
        DeckCommand::Redraw => ViewerEvent::Window(snapshot(deck, SnapshotCause::Redraw)),
    }
}

pub fn snapshot(deck: &ProfileDeck, cause: SnapshotCause) -> WindowSnapshot {
    WindowSnapshot {
        cause,
        cards: deck.items().cloned().collect(),
        front: deck.front(),
        next: deck.next(),
        catalog_len: deck.len(),
    }
}
