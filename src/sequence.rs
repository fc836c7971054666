//! Nucleotide alphabet and sequence helpers
//!
//! The buffer stores `Nucleotide` values rather than raw bytes, so every
//! symbol that reaches it has already been checked against the alphabet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edit::EditError;

/// One symbol of the 4-letter DNA alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    T,
    C,
    G,
}

impl Nucleotide {
    /// Alphabet in canonical order (also the one-hot column order)
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

    /// Parse a single symbol, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'T' => Some(Self::T),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::C => 'C',
            Self::G => 'G',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::T => 1,
            Self::C => 2,
            Self::G => 3,
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Self::G | Self::C)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a whole sequence, rejecting the first symbol outside the alphabet
pub fn parse_sequence(text: &str) -> Result<Vec<Nucleotide>, EditError> {
    text.chars()
        .enumerate()
        .map(|(position, c)| {
            Nucleotide::from_char(c).ok_or(EditError::InvalidSymbol { symbol: c, position })
        })
        .collect()
}

/// Render symbols as an uppercase string
pub fn to_string(symbols: &[Nucleotide]) -> String {
    symbols.iter().map(|n| n.as_char()).collect()
}

/// Render symbols as ASCII bytes (for rust-bio)
pub fn to_bytes(symbols: &[Nucleotide]) -> Vec<u8> {
    symbols.iter().map(|n| n.as_byte()).collect()
}

/// First occurrence of `needle` in `haystack` at or after `from`
pub fn find_from(haystack: &[Nucleotide], needle: &[Nucleotide], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|offset| from + offset)
}
