use crate::gesture::SwipeDirection;
use crate::profile::Profile;

/// Requests handled by the task that owns the deck.
#[derive(Debug)]
pub enum DeckCommand {
    Dismiss(SwipeDirection),
    /// Jump to the first profile whose location contains the query.
    Find(String),
    /// Hot-swap the catalog (e.g. freshly computed recommendations).
    ReplaceCatalog(Vec<Profile>),
    Redraw,
}

/// Why a new window snapshot was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotCause {
    Loaded,
    Dismissed {
        index: usize,
        direction: SwipeDirection,
    },
    Jumped {
        query: String,
    },
    Replaced,
    Redraw,
}

/// Everything a renderer needs to redraw the stack, front card first.
#[derive(Debug, Clone)]
pub struct WindowSnapshot {
    pub cause: SnapshotCause,
    pub cards: Vec<Profile>,
    pub front: usize,
    pub next: usize,
    pub catalog_len: usize,
}

#[derive(Debug, Clone)]
pub enum ViewerEvent {
    Window(WindowSnapshot),
    /// A request left the deck unchanged (no match, rejected catalog).
    Notice(String),
}
