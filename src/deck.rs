//! Windowed circular deck: a fixed-size visible window over a wrap-around catalog.
//!
//! The deck never inspects its items. It only tracks which catalog indices
//! are visible (the window) and where the user is in the catalog (the
//! `front`/`next` cursor). Entry `k` of the window is always
//! `(front + k) % len`, so after the last item the first one comes back.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::error::Error;

/// Number of stacked cards shown when nothing else is configured.
pub const DEFAULT_WINDOW_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => panic!("default window size must be non-zero"),
};

/// A fixed-size visible window sliding over a circular catalog.
///
/// Constructing a deck is the `load` step; a deck that failed to load does
/// not exist, so `advance` and `jump_to` always operate on a usable catalog.
#[derive(Debug, Clone)]
pub struct WindowedCircularDeck<T> {
    catalog: Vec<T>,
    window_size: NonZeroUsize,
    /// Catalog indices, front (topmost card) first.
    window: VecDeque<usize>,
    front: usize,
    next: usize,
}

impl<T> WindowedCircularDeck<T> {
    /// Build a deck whose window starts at the first catalog item.
    ///
    /// The window holds `min(window_size, catalog.len())` entries.
    ///
    /// # Errors
    /// Returns [`Error::EmptyCatalog`] if `catalog` is empty.
    pub fn load(catalog: Vec<T>, window_size: NonZeroUsize) -> Result<Self, Error> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let mut deck = Self {
            catalog,
            window_size,
            window: VecDeque::with_capacity(window_size.get()),
            front: 0,
            next: 0,
        };
        deck.rebuild();
        Ok(deck)
    }

    /// Dismiss the front card and return its catalog index.
    ///
    /// The window shifts by one: the dismissed entry leaves the front and
    /// the item at `next` joins at the back, wrapping around the catalog.
    pub fn advance(&mut self) -> usize {
        let len = self.catalog.len();
        let dismissed = self.front;
        self.window.pop_front();
        self.front = (self.front + 1) % len;
        if len > self.window.len() {
            self.window.push_back(self.next);
            self.next = (self.next + 1) % len;
        }
        dismissed
    }

    /// Move the front to the first catalog item matching `predicate`.
    ///
    /// Returns `false` and leaves the deck untouched when nothing matches.
    pub fn jump_to<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        match self.catalog.iter().position(|item| predicate(item)) {
            Some(index) => {
                self.front = index;
                self.rebuild();
                true
            }
            None => false,
        }
    }

    /// Swap in a new catalog and restart from its first item.
    ///
    /// # Errors
    /// Returns [`Error::EmptyCatalog`] if `catalog` is empty; the current
    /// catalog, cursor and window are kept as they were.
    pub fn replace_catalog(&mut self, catalog: Vec<T>) -> Result<(), Error> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        self.catalog = catalog;
        self.front = 0;
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        let len = self.catalog.len();
        let front = self.front;
        let occupancy = self.occupancy_for(len);
        self.window.clear();
        self.window.extend((0..occupancy).map(|k| (front + k) % len));
        self.next = (front + occupancy) % len;
    }

    fn occupancy_for(&self, len: usize) -> usize {
        self.window_size.get().min(len)
    }

    /// Catalog index of the topmost card.
    #[must_use]
    pub const fn front(&self) -> usize {
        self.front
    }

    /// Catalog index of the card that joins the window on the next advance.
    #[must_use]
    pub const fn next(&self) -> usize {
        self.next
    }

    /// Number of catalog items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always `false` for a loaded deck; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Requested window size (before clamping to the catalog length).
    #[must_use]
    pub const fn window_size(&self) -> NonZeroUsize {
        self.window_size
    }

    /// Number of entries currently in the window.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        self.window.len()
    }

    /// Window entries as catalog indices, front first.
    pub fn window(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.window.iter().copied()
    }

    /// Window items, front first.
    pub fn items(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.window.iter().map(|&idx| &self.catalog[idx])
    }

    /// Window items, furthest card first, the order a stacking renderer draws them.
    pub fn items_back_to_front(&self) -> impl Iterator<Item = &T> + '_ {
        self.items().rev()
    }

    /// The topmost, interactive item.
    #[must_use]
    pub fn front_item(&self) -> &T {
        &self.catalog[self.front]
    }

    /// Borrow the whole catalog (read-only).
    #[must_use]
    pub fn catalog(&self) -> &[T] {
        &self.catalog
    }
}
