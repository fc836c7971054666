//! Tests for the history module

use super::*;
use crate::sequence::parse_sequence;

fn snap(s: &str) -> Snapshot {
    parse_sequence(s).unwrap()
}

#[test]
fn test_new_history_cannot_undo_or_redo() {
    let mut history = History::new(snap("ATG"));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), None);
    assert_eq!(history.current(), &snap("ATG"));
}

#[test]
fn test_undo_returns_previous_commit() {
    let mut history = History::new(snap("ATG"));
    history.commit(snap("TG"));
    history.commit(snap("G"));

    assert_eq!(history.undo(), Some(&snap("TG")));
    assert_eq!(history.undo(), Some(&snap("ATG")));
    // Seed is the floor
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo_count(), 2);
}

#[test]
fn test_redo_after_undo_roundtrip() {
    let mut history = History::new(snap("ATG"));
    history.commit(snap("TG"));

    assert_eq!(history.undo(), Some(&snap("ATG")));
    assert_eq!(history.redo(), Some(&snap("TG")));
    assert!(!history.can_redo());
    assert_eq!(history.current(), &snap("TG"));
}

#[test]
fn test_commit_clears_future() {
    let mut history = History::new(snap("ATG"));
    history.commit(snap("TG"));
    history.undo();
    assert!(history.can_redo());

    history.commit(snap("CATG"));
    assert!(!history.can_redo());
    assert_eq!(history.redo(), None);
}

#[test]
fn test_limit_drops_oldest_snapshots() {
    let mut history = History::with_limit(snap("A"), 3);
    history.commit(snap("AC"));
    history.commit(snap("ACG"));
    history.commit(snap("ACGT"));

    assert_eq!(history.undo_count(), 2);
    assert_eq!(history.undo(), Some(&snap("ACG")));
    assert_eq!(history.undo(), Some(&snap("AC")));
    assert_eq!(history.undo(), None);
}

#[test]
fn test_zero_limit_keeps_seed() {
    let mut history = History::with_limit(snap("A"), 0);
    history.commit(snap("AC"));
    assert_eq!(history.current(), &snap("AC"));
    assert!(!history.can_undo());
}
