use std::num::NonZeroUsize;

use swipe_deck::{Error, WindowedCircularDeck};

fn w(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn items(deck: &WindowedCircularDeck<char>) -> Vec<char> {
    deck.items().copied().collect()
}

#[test]
fn window_holds_min_of_size_and_catalog() {
    for len in 1..=6 {
        for size in 1..=6 {
            let catalog: Vec<usize> = (0..len).collect();
            let deck = WindowedCircularDeck::load(catalog, w(size)).unwrap();
            assert_eq!(deck.occupancy(), size.min(len), "len={len} size={size}");
            assert_eq!(deck.front(), 0);
            assert_eq!(deck.next(), size.min(len) % len);
        }
    }
}

#[test]
fn advancing_wraps_around_the_catalog() {
    let mut deck = WindowedCircularDeck::load(vec!['A', 'B', 'C'], w(3)).unwrap();
    assert_eq!(items(&deck), vec!['A', 'B', 'C']);

    assert_eq!(deck.advance(), 0);
    assert_eq!(items(&deck), vec!['B', 'C', 'A']);

    deck.advance();
    deck.advance();
    assert_eq!(items(&deck), vec!['A', 'B', 'C']);
    assert_eq!(deck.front(), 0);
}

#[test]
fn back_to_front_is_draw_order() {
    let deck = WindowedCircularDeck::load(vec!['A', 'B', 'C', 'D'], w(3)).unwrap();
    let drawn: Vec<char> = deck.items_back_to_front().copied().collect();
    assert_eq!(drawn, vec!['C', 'B', 'A']);
    assert_eq!(*deck.front_item(), 'A');
}

#[test]
fn single_item_reappears_after_dismissal() {
    let mut deck = WindowedCircularDeck::load(vec!['A'], w(3)).unwrap();
    assert_eq!(items(&deck), vec!['A']);

    assert_eq!(deck.advance(), 0);
    assert_eq!(items(&deck), vec!['A']);
    assert_eq!(deck.front(), 0);
    assert_eq!(deck.next(), 0);
}

#[test]
fn window_stays_contiguous_when_larger_than_catalog() {
    let mut deck = WindowedCircularDeck::load(vec!['A', 'B'], w(3)).unwrap();
    assert_eq!(items(&deck), vec!['A', 'B']);
    for _ in 0..7 {
        deck.advance();
        let len = deck.len();
        let expected: Vec<usize> = (0..deck.occupancy())
            .map(|k| (deck.front() + k) % len)
            .collect();
        assert_eq!(deck.window().collect::<Vec<_>>(), expected);
        assert_eq!(deck.occupancy(), 2);
    }
}

#[test]
fn cursor_invariants_hold_over_long_runs() {
    let mut deck = WindowedCircularDeck::load((0..5).collect::<Vec<u32>>(), w(3)).unwrap();
    for step in 0..23 {
        let dismissed = deck.front();
        assert_eq!(deck.advance(), dismissed);
        assert_eq!(deck.front(), (step + 1) % 5);
        assert_eq!(deck.next(), (deck.front() + 3) % 5);
        let window: Vec<usize> = deck.window().collect();
        let mut distinct = window.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 3, "no repeats in {window:?}");
    }
}

#[test]
fn jump_to_rebuilds_from_first_match() {
    let mut deck = WindowedCircularDeck::load(vec!['a', 'b', 'c', 'X', 'e'], w(3)).unwrap();
    assert!(deck.jump_to(|c| *c == 'X'));
    assert_eq!(deck.front(), 3);
    assert_eq!(items(&deck), vec!['X', 'e', 'a']);
    assert_eq!(deck.next(), 1);
}

#[test]
fn jump_to_prefers_lowest_index() {
    let mut deck = WindowedCircularDeck::load(vec![1, 2, 3, 4, 6], w(2)).unwrap();
    deck.advance();
    deck.advance();
    assert!(deck.jump_to(|n| n % 2 == 0));
    assert_eq!(deck.front(), 1);
}

#[test]
fn jump_to_without_match_changes_nothing() {
    let mut deck = WindowedCircularDeck::load(vec!['a', 'b', 'c', 'd', 'e'], w(3)).unwrap();
    deck.advance();
    let before = (deck.front(), deck.next(), deck.window().collect::<Vec<_>>());

    assert!(!deck.jump_to(|c| *c == 'z'));

    let after = (deck.front(), deck.next(), deck.window().collect::<Vec<_>>());
    assert_eq!(before, after);
}

#[test]
fn jump_with_clamped_window_keeps_next_contiguous() {
    let mut deck = WindowedCircularDeck::load(vec!['a', 'b'], w(3)).unwrap();
    assert!(deck.jump_to(|c| *c == 'b'));
    assert_eq!(items(&deck), vec!['b', 'a']);
    assert_eq!(deck.next(), 1);
    deck.advance();
    assert_eq!(items(&deck), vec!['a', 'b']);
}

#[test]
fn replace_catalog_resets_position() {
    let mut deck = WindowedCircularDeck::load(vec!['a', 'b', 'c', 'd'], w(3)).unwrap();
    deck.advance();
    deck.advance();
    assert_eq!(deck.front(), 2);

    deck.replace_catalog(vec!['X', 'Y', 'Z', 'W', 'V']).unwrap();
    assert_eq!(deck.front(), 0);
    assert_eq!(deck.next(), 3);
    assert_eq!(items(&deck), vec!['X', 'Y', 'Z']);
    assert_eq!(deck.len(), 5);
}

#[test]
fn replace_with_shorter_catalog_clamps_window() {
    let mut deck = WindowedCircularDeck::load(vec!['a', 'b', 'c', 'd'], w(3)).unwrap();
    deck.advance();
    deck.replace_catalog(vec!['X']).unwrap();
    assert_eq!(items(&deck), vec!['X']);
    assert_eq!(deck.next(), 0);
}

#[test]
fn empty_catalog_is_rejected() {
    let err = WindowedCircularDeck::<char>::load(Vec::new(), w(3)).unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog));

    let mut deck = WindowedCircularDeck::load(vec!['a', 'b', 'c', 'd'], w(3)).unwrap();
    deck.advance();
    let before = (deck.front(), deck.next(), items(&deck));

    let err = deck.replace_catalog(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog));
    assert_eq!((deck.front(), deck.next(), items(&deck)), before);
    assert_eq!(deck.catalog(), &['a', 'b', 'c', 'd']);
}
