//! One-hot encoding, columns in `Nucleotide::ALL` order (A, T, C, G)

use crate::sequence::Nucleotide;

pub fn one_hot(symbols: &[Nucleotide]) -> Vec<[u8; 4]> {
    symbols
        .iter()
        .map(|n| {
            let mut row = [0u8; 4];
            row[n.index()] = 1;
            row
        })
        .collect()
}
