//! Targeted cut-and-repair edit
//!
//! The guide is located from the start of the sequence. At the match start
//! a single draw picks the repair: insert one random symbol, or drop the
//! symbol at the cut site.

use serde::Serialize;

use super::{EditError, EditRng};
use crate::sequence::{self, find_from, Nucleotide};

/// Which repair happened at the cut site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Repair {
    Inserted(Nucleotide),
    Deleted(Nucleotide),
}

/// Result of a successful cut-repair edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasOutcome {
    /// Index of the cut (start of the guide match)
    pub cut_site: usize,
    pub repair: Repair,
    /// The edited sequence
    #[serde(skip)]
    pub sequence: Vec<Nucleotide>,
}

/// Probability that the repair inserts rather than deletes
const INSERTION_PROBABILITY: f64 = 0.5;

pub fn cas_edit<R: EditRng + ?Sized>(
    symbols: &[Nucleotide],
    guide: &[Nucleotide],
    rng: &mut R,
) -> Result<CasOutcome, EditError> {
    let cut_site = find_from(symbols, guide, 0)
        .ok_or_else(|| EditError::NotFound(format!("Target {}", sequence::to_string(guide))))?;

    let mut edited = symbols.to_vec();
    let repair = if rng.chance(INSERTION_PROBABILITY) {
        let inserted = Nucleotide::ALL[rng.below(Nucleotide::ALL.len())];
        edited.insert(cut_site, inserted);
        Repair::Inserted(inserted)
    } else {
        Repair::Deleted(edited.remove(cut_site))
    };

    Ok(CasOutcome {
        cut_site,
        repair,
        sequence: edited,
    })
}
