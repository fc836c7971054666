//! Undo/redo history over buffer snapshots
//!
//! Maintains two stacks of full symbol snapshots:
//! - `past`: commit points, seeded with the initial buffer. Its top always
//!   mirrors the live buffer.
//! - `future`: states that were undone and can be redone
//!
//! A new commit clears `future` (no branching redo, standard vim behavior).
//! Only the symbols are snapshotted; the editor re-clamps the cursor after
//! restoring.

#[cfg(test)]
mod tests;

use crate::sequence::Nucleotide;

/// Default maximum number of snapshots to keep
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

pub type Snapshot = Vec<Nucleotide>;

#[derive(Debug, Clone)]
pub struct History {
    /// Commit points (most recent at end, never empty)
    past: Vec<Snapshot>,
    /// Undone states (most recent at end)
    future: Vec<Snapshot>,
    limit: usize,
}

impl History {
    /// Create a history seeded with the initial buffer state
    pub fn new(seed: Snapshot) -> Self {
        Self::with_limit(seed, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(seed: Snapshot, limit: usize) -> Self {
        Self {
            past: vec![seed],
            future: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a new buffer state
    ///
    /// This clears the redo stack (can't redo after a new edit).
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        self.future.clear();

        // Enforce max size; the oldest surviving snapshot becomes the floor
        if self.past.len() > self.limit {
            let excess = self.past.len() - self.limit;
            self.past.drain(..excess);
        }
    }

    /// Step back one commit
    ///
    /// Returns the state to restore, or `None` when only the seed remains.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.past.len() <= 1 {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push(current);
        self.past.last()
    }

    /// Re-apply the last undone state
    ///
    /// Returns the state to restore, or `None` if nothing was undone.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let state = self.future.pop()?;
        self.past.push(state);
        self.past.last()
    }

    /// Latest committed state
    pub fn current(&self) -> &Snapshot {
        // past always holds at least the seed
        &self.past[self.past.len() - 1]
    }

    /// Check if there are commits to undo
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Check if there are states to redo
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_count(&self) -> usize {
        self.past.len() - 1
    }

    /// Number of redo steps available
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}
