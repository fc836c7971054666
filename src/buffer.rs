//! Sequence buffer: the symbols under edit plus the cursor
//!
//! Invariant: `0 <= cursor <= len` after every public operation.

use std::ops::Range;

use crate::sequence::{self, Nucleotide};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuffer {
    symbols: Vec<Nucleotide>,
    cursor: usize,
}

impl SequenceBuffer {
    pub fn new(symbols: Vec<Nucleotide>) -> Self {
        Self { symbols, cursor: 0 }
    }

    pub fn symbols(&self) -> &[Nucleotide] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping to the buffer end
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.symbols.len());
    }

    /// Symbol under the cursor (None at the end-of-buffer position)
    pub fn current(&self) -> Option<Nucleotide> {
        self.symbols.get(self.cursor).copied()
    }

    /// Insert at the cursor and advance past the inserted symbols
    pub fn insert_at_cursor(&mut self, symbols: &[Nucleotide]) {
        let at = self.cursor;
        self.symbols.splice(at..at, symbols.iter().copied());
        self.cursor = at + symbols.len();
    }

    /// Insert at an arbitrary position; the cursor keeps pointing at the same symbol
    pub fn insert_at(&mut self, pos: usize, symbols: &[Nucleotide]) {
        let pos = pos.min(self.symbols.len());
        self.symbols.splice(pos..pos, symbols.iter().copied());
        if pos < self.cursor {
            self.cursor += symbols.len();
        }
    }

    /// Remove a span and return it; out-of-range parts are ignored
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<Nucleotide> {
        let len = self.symbols.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        let removed: Vec<_> = self.symbols.drain(start..end).collect();

        if self.cursor >= end {
            self.cursor -= removed.len();
        } else if self.cursor > start {
            self.cursor = start;
        }
        self.cursor = self.cursor.min(self.symbols.len());
        removed
    }

    /// Overwrite the symbol under the cursor and advance
    ///
    /// Returns false (no-op) when the cursor is at the end of the buffer.
    pub fn replace_at_cursor(&mut self, symbol: Nucleotide) -> bool {
        match self.symbols.get_mut(self.cursor) {
            Some(slot) => {
                *slot = symbol;
                self.cursor += 1;
                true
            }
            None => false,
        }
    }

    /// Copy of a span, clamped to the buffer
    pub fn slice(&self, range: Range<usize>) -> Vec<Nucleotide> {
        let len = self.symbols.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.symbols[start..end].to_vec()
    }

    /// Swap in a whole new sequence (undo/redo, load, mutate, recombine)
    pub fn replace_all(&mut self, symbols: Vec<Nucleotide>) {
        self.symbols = symbols;
        self.cursor = self.cursor.min(self.symbols.len());
    }

    pub fn to_sequence_string(&self) -> String {
        sequence::to_string(&self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::parse_sequence;

    fn buffer(text: &str) -> SequenceBuffer {
        SequenceBuffer::new(parse_sequence(text).unwrap())
    }

    #[test]
    fn test_insert_then_remove_restores_sequence_and_cursor() {
        for p in 0..=6 {
            let mut buf = buffer("ATGCCA");
            buf.set_cursor(p);
            buf.insert_at_cursor(&[Nucleotide::G]);
            assert_eq!(buf.cursor(), p + 1);
            buf.remove_range(p..p + 1);
            assert_eq!(buf.to_sequence_string(), "ATGCCA");
            assert_eq!(buf.cursor(), p);
        }
    }

    #[test]
    fn test_remove_at_end_clamps_cursor() {
        let mut buf = buffer("ATG");
        buf.set_cursor(2);
        buf.remove_range(2..3);
        assert_eq!(buf.to_sequence_string(), "AT");
        assert_eq!(buf.cursor(), 2);

        buf.remove_range(5..9);
        assert_eq!(buf.to_sequence_string(), "AT");
    }

    #[test]
    fn test_remove_span_containing_cursor_moves_to_start() {
        let mut buf = buffer("AATTGG");
        buf.set_cursor(3);
        let removed = buf.remove_range(2..5);
        assert_eq!(sequence::to_string(&removed), "TTG");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_insert_before_cursor_shifts_it() {
        let mut buf = buffer("AAAA");
        buf.set_cursor(2);
        buf.insert_at(0, &[Nucleotide::C, Nucleotide::C]);
        assert_eq!(buf.cursor(), 4);
        buf.insert_at(4, &[Nucleotide::G]);
        assert_eq!(buf.cursor(), 4);
        assert_eq!(buf.to_sequence_string(), "CCAAGAA");
    }

    #[test]
    fn test_replace_at_end_is_noop() {
        let mut buf = buffer("AC");
        buf.set_cursor(2);
        assert!(!buf.replace_at_cursor(Nucleotide::G));
        assert_eq!(buf.to_sequence_string(), "AC");

        buf.set_cursor(0);
        assert!(buf.replace_at_cursor(Nucleotide::G));
        assert_eq!(buf.to_sequence_string(), "GC");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut buf = buffer("ACGT");
        buf.set_cursor(42);
        assert_eq!(buf.cursor(), 4);
        assert_eq!(buf.current(), None);
    }

    #[test]
    fn test_replace_all_clamps_cursor() {
        let mut buf = buffer("ACGTACGT");
        buf.set_cursor(7);
        buf.replace_all(parse_sequence("AC").unwrap());
        assert_eq!(buf.cursor(), 2);
    }
}
