//! Start-marker search

use crate::sequence::{find_from, Nucleotide};

/// The `ATG` start marker delimiting delete/yank spans
pub const MARKER: [Nucleotide; 3] = [Nucleotide::A, Nucleotide::T, Nucleotide::G];

/// Index of the first marker at or after `pos`, or `symbols.len()` if none
pub fn find_next_marker(symbols: &[Nucleotide], pos: usize) -> usize {
    find_from(symbols, &MARKER, pos).unwrap_or(symbols.len())
}
