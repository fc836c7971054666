//! Global pairwise alignment
//!
//! Scores matches 1, mismatches 0 and gaps 0, using rust-bio's aligner.

use bio::alignment::pairwise::Aligner;
use serde::Serialize;

use crate::sequence::{self, Nucleotide};

/// Columns per block in the rendered alignment
const ALIGNMENT_COLUMNS: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub score: i32,
    /// Human-readable alignment (rust-bio pretty format)
    pub text: String,
}

pub fn pairwise_align(a: &[Nucleotide], b: &[Nucleotide]) -> AlignmentReport {
    if a.is_empty() || b.is_empty() {
        return AlignmentReport {
            score: 0,
            text: String::new(),
        };
    }

    let x = sequence::to_bytes(a);
    let y = sequence::to_bytes(b);
    let score = |l: u8, r: u8| if l == r { 1i32 } else { 0i32 };
    let mut aligner = Aligner::new(0, 0, score);
    let alignment = aligner.global(&x, &y);

    AlignmentReport {
        score: alignment.score,
        text: alignment.pretty(&x, &y, ALIGNMENT_COLUMNS),
    }
}
