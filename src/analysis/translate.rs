//! Transcription and translation

use crate::sequence::Nucleotide;

/// Standard genetic code (NCBI table 1), indexed by codon with T=0 C=1 A=2 G=3
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

fn code_index(n: Nucleotide) -> usize {
    match n {
        Nucleotide::T => 0,
        Nucleotide::C => 1,
        Nucleotide::A => 2,
        Nucleotide::G => 3,
    }
}

/// DNA to RNA: every T becomes U
pub fn transcribe(symbols: &[Nucleotide]) -> String {
    symbols
        .iter()
        .map(|n| match n {
            Nucleotide::T => 'U',
            other => other.as_char(),
        })
        .collect()
}

/// DNA to amino acids, reading frame 0; `*` marks stop codons
///
/// A trailing partial codon is ignored.
pub fn translate(symbols: &[Nucleotide]) -> String {
    symbols
        .chunks_exact(3)
        .map(|codon| {
            let idx = code_index(codon[0]) * 16 + code_index(codon[1]) * 4 + code_index(codon[2]);
            STANDARD_CODE[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::parse_sequence;

    #[test]
    fn test_transcribe() {
        let seq = parse_sequence("ATGCTT").unwrap();
        assert_eq!(transcribe(&seq), "AUGCUU");
    }

    #[test]
    fn test_translate_start_and_stop() {
        let seq = parse_sequence("ATGGCTTAA").unwrap();
        assert_eq!(translate(&seq), "MA*");
    }

    #[test]
    fn test_translate_ignores_partial_codon() {
        let seq = parse_sequence("ATGGCTAG").unwrap();
        assert_eq!(translate(&seq), "MA");

        let seq = parse_sequence("ATGGCTAGCTAGCTAGCTAGC").unwrap();
        assert_eq!(translate(&seq), "MAS*LAS");
    }

    #[test]
    fn test_translate_codon_samples() {
        let cases = [("TTT", "F"), ("TGG", "W"), ("TGA", "*"), ("GGG", "G"), ("AAA", "K")];
        for (codon, aa) in cases {
            assert_eq!(translate(&parse_sequence(codon).unwrap()), aa);
        }
    }
}
