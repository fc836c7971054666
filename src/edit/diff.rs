//! Position-wise mutation diff against a reference sequence

use std::fmt;

use serde::Serialize;

use super::EditError;
use crate::sequence::Nucleotide;

/// One differing position, reported as e.g. `A5G`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointMutation {
    pub original: Nucleotide,
    /// 1-based position
    pub position: usize,
    pub current: Nucleotide,
}

impl fmt::Display for PointMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.original, self.position, self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationReport {
    pub total_mutations: usize,
    /// Fraction of positions that differ (0 for empty sequences)
    pub mutation_rate: f64,
    pub mutations: Vec<PointMutation>,
}

impl fmt::Display for MutationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Mutations: {}", self.total_mutations)?;
        writeln!(f, "Mutation Rate: {:.2}%", self.mutation_rate * 100.0)?;
        let listed: Vec<String> = self.mutations.iter().map(|m| m.to_string()).collect();
        write!(f, "Mutations: {}", listed.join(", "))
    }
}

/// Compare `current` against `reference`, which must have the same length
pub fn analyze_mutations(
    reference: &[Nucleotide],
    current: &[Nucleotide],
) -> Result<MutationReport, EditError> {
    if reference.len() != current.len() {
        return Err(EditError::LengthMismatch {
            reference: reference.len(),
            current: current.len(),
        });
    }

    let mutations: Vec<_> = reference
        .iter()
        .zip(current)
        .enumerate()
        .filter(|(_, (orig, curr))| orig != curr)
        .map(|(i, (&original, &current))| PointMutation {
            original,
            position: i + 1,
            current,
        })
        .collect();

    let mutation_rate = if current.is_empty() {
        0.0
    } else {
        mutations.len() as f64 / current.len() as f64
    };

    Ok(MutationReport {
        total_mutations: mutations.len(),
        mutation_rate,
        mutations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::parse_sequence;

    fn seq(s: &str) -> Vec<Nucleotide> {
        parse_sequence(s).unwrap()
    }

    #[test]
    fn test_point_mutations_are_one_based() {
        let report = analyze_mutations(&seq("ATGC"), &seq("AAGT")).unwrap();
        assert_eq!(report.total_mutations, 2);
        assert_eq!(report.mutation_rate, 0.5);
        let listed: Vec<_> = report.mutations.iter().map(|m| m.to_string()).collect();
        assert_eq!(listed, vec!["T2A", "C4T"]);
    }

    #[test]
    fn test_count_is_symmetric() {
        let a = seq("ATGGCTAGCT");
        let b = seq("ATCGCTTGCA");
        let ab = analyze_mutations(&a, &b).unwrap();
        let ba = analyze_mutations(&b, &a).unwrap();
        assert_eq!(ab.total_mutations, ba.total_mutations);
    }

    #[test]
    fn test_length_mismatch() {
        let err = analyze_mutations(&seq("ATG"), &seq("ATGC")).unwrap_err();
        assert_eq!(
            err,
            EditError::LengthMismatch {
                reference: 3,
                current: 4
            }
        );
    }

    #[test]
    fn test_empty_sequences_have_zero_rate() {
        let report = analyze_mutations(&[], &[]).unwrap();
        assert_eq!(report.total_mutations, 0);
        assert_eq!(report.mutation_rate, 0.0);
    }

    #[test]
    fn test_report_display() {
        let report = analyze_mutations(&seq("AAAA"), &seq("AAGA")).unwrap();
        assert_eq!(
            report.to_string(),
            "Total Mutations: 1\nMutation Rate: 25.00%\nMutations: A3G"
        );
    }
}
