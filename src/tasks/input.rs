use std::io::BufRead;
use std::thread;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::events::DeckCommand;
use crate::gesture::{Gesture, Parsed, parse_line};

/// Read stdin on a dedicated thread so a pending read never holds up shutdown.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel::<String>(16);
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!("stdin read failed: {err}");
                    break;
                }
            }
        }
    });
    rx
}

/// Turns input lines into deck commands.
///
/// End of input and `quit` both cancel the whole pipeline.
pub async fn run(
    mut lines: Receiver<String>,
    to_deck: Sender<DeckCommand>,
    cancel: CancellationToken,
) -> Result<()> {
    loop {
        let line = select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => line,
        };
        let Some(line) = line else {
            info!("input closed; initiating shutdown");
            cancel.cancel();
            break;
        };

        let cmd = match parse_line(&line) {
            Parsed::Blank => continue,
            Parsed::Unknown(text) => {
                warn!(input = %text, "unrecognized input (try: left, right, find <place>, show, quit)");
                continue;
            }
            Parsed::Gesture(Gesture::Quit) => {
                info!("quit requested");
                cancel.cancel();
                break;
            }
            Parsed::Gesture(Gesture::Dismiss(direction)) => DeckCommand::Dismiss(direction),
            Parsed::Gesture(Gesture::Find(query)) => DeckCommand::Find(query),
            Parsed::Gesture(Gesture::Show) => DeckCommand::Redraw,
        };
        debug!(?cmd, "gesture");
        if to_deck.send(cmd).await.is_err() {
            warn!("deck channel closed");
            break;
        }
    }
    Ok(())
}
