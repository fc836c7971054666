//! Two-point recombination
//!
//! Two distinct crossover points `p1 < p2` are drawn from
//! `0..min(len(current), len(other))`. The result is
//! `current[..p1] + other[p1..p2] + current[p2..]`.

use serde::Serialize;

use super::{EditError, EditRng};
use crate::sequence::Nucleotide;

/// Minimum shared length needed to draw two distinct crossover points
const MIN_SHARED_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recombination {
    /// Crossover points, strictly increasing
    pub points: (usize, usize),
    #[serde(skip)]
    pub sequence: Vec<Nucleotide>,
}

pub fn recombine<R: EditRng + ?Sized>(
    current: &[Nucleotide],
    other: &[Nucleotide],
    rng: &mut R,
) -> Result<Recombination, EditError> {
    let shared = current.len().min(other.len());
    if shared < MIN_SHARED_LENGTH {
        return Err(EditError::InsufficientLength {
            required: MIN_SHARED_LENGTH,
            actual: shared,
        });
    }

    // Sample two distinct indices without replacement
    let first = rng.below(shared);
    let mut second = rng.below(shared - 1);
    if second >= first {
        second += 1;
    }
    let (p1, p2) = (first.min(second), first.max(second));

    let mut sequence = Vec::with_capacity(current.len());
    sequence.extend_from_slice(&current[..p1]);
    sequence.extend_from_slice(&other[p1..p2]);
    sequence.extend_from_slice(&current[p2..]);

    Ok(Recombination {
        points: (p1, p2),
        sequence,
    })
}
