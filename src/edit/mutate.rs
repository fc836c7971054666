//! Per-symbol stochastic mutation
//!
//! Each symbol mutates independently with probability `rate`. A mutation is
//! one of substitution (to a different symbol), insertion (the original plus
//! one random symbol) or deletion, chosen uniformly.

use super::EditRng;
use crate::sequence::Nucleotide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MutationKind {
    Substitute,
    Insert,
    Delete,
}

const KINDS: [MutationKind; 3] = [
    MutationKind::Substitute,
    MutationKind::Insert,
    MutationKind::Delete,
];

pub fn mutate<R: EditRng + ?Sized>(symbols: &[Nucleotide], rate: f64, rng: &mut R) -> Vec<Nucleotide> {
    let mut mutated = Vec::with_capacity(symbols.len());

    for &symbol in symbols {
        if !rng.chance(rate) {
            mutated.push(symbol);
            continue;
        }
        match KINDS[rng.below(KINDS.len())] {
            MutationKind::Substitute => {
                let others: Vec<_> = Nucleotide::ALL
                    .iter()
                    .copied()
                    .filter(|&n| n != symbol)
                    .collect();
                mutated.push(others[rng.below(others.len())]);
            }
            MutationKind::Insert => {
                mutated.push(symbol);
                mutated.push(Nucleotide::ALL[rng.below(Nucleotide::ALL.len())]);
            }
            MutationKind::Delete => {}
        }
    }

    mutated
}
