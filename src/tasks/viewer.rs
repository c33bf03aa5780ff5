use std::io::Write;

use anyhow::{Context, Result};
use tokio::sync::mpsc::Receiver;
use tracing::debug;

use crate::events::{SnapshotCause, ViewerEvent, WindowSnapshot};
use crate::render::render_window;

/// Redraws the whole stack for every event; the deck keeps no render state.
///
/// Runs until the deck task drops its sender, so the last snapshot is always drawn.
pub async fn run<W>(mut from_deck: Receiver<ViewerEvent>, mut out: W) -> Result<()>
where
    W: Write + Send,
{
    while let Some(event) = from_deck.recv().await {
        draw(&mut out, &event).context("writing to terminal")?;
    }
    debug!("deck gone; viewer exiting");
    Ok(())
}

pub fn draw<W: Write>(out: &mut W, event: &ViewerEvent) -> std::io::Result<()> {
    match event {
        ViewerEvent::Window(snapshot) => {
            debug!(front = snapshot.front, cards = snapshot.cards.len(), "redraw");
            writeln!(out, "{}", headline(snapshot))?;
            out.write_all(render_window(&snapshot.cards).as_bytes())?;
        }
        ViewerEvent::Notice(text) => writeln!(out, "! {text}")?,
    }
    out.flush()
}

fn headline(snapshot: &WindowSnapshot) -> String {
    let what = match &snapshot.cause {
        SnapshotCause::Loaded => "loaded".to_string(),
        SnapshotCause::Dismissed { direction, .. } => format!("swiped {direction}"),
        SnapshotCause::Jumped { query } => format!("found {query:?}"),
        SnapshotCause::Replaced => "new recommendations".to_string(),
        SnapshotCause::Redraw => "current".to_string(),
    };
    format!(
        "-- {what}: card {}/{} --",
        snapshot.front + 1,
        snapshot.catalog_len
    )
}
