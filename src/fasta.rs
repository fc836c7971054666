//! FASTA persistence
//!
//! Reading goes through rust-bio and keeps only the first record. Writing
//! emits a single record wrapped at a fixed line width.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bio::io::fasta;

use crate::edit::EditError;
use crate::sequence::{self, Nucleotide};

/// Record id used when saving
pub const RECORD_ID: &str = "DNA_sequence";

/// Default sequence line width
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// FASTA-related errors
#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No FASTA records in {0}")]
    Empty(String),
    #[error("Invalid sequence in {path}: {source}")]
    InvalidSequence { path: String, source: EditError },
}

/// Load the first record of a FASTA file
pub fn read_fasta(path: &Path) -> Result<Vec<Nucleotide>, FastaError> {
    let reader = fasta::Reader::new(File::open(path)?);
    let record = reader
        .records()
        .next()
        .ok_or_else(|| FastaError::Empty(path.display().to_string()))??;

    let text = String::from_utf8_lossy(record.seq());
    sequence::parse_sequence(&text).map_err(|source| FastaError::InvalidSequence {
        path: path.display().to_string(),
        source,
    })
}

/// Save the sequence as a single FASTA record
pub fn write_fasta(symbols: &[Nucleotide], path: &Path, line_width: usize) -> Result<(), FastaError> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, ">{RECORD_ID}")?;

    for chunk in sequence::to_bytes(symbols).chunks(line_width.max(1)) {
        file.write_all(chunk)?;
        file.write_all(b"\n")?;
    }
    file.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::parse_sequence;
    use std::fs;

    #[test]
    fn test_write_wraps_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.fasta");
        let seq = parse_sequence("ATGGCTAGCT").unwrap();

        write_fasta(&seq, &path, 4).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, ">DNA_sequence\nATGG\nCTAG\nCT\n");
    }

    #[test]
    fn test_read_first_record_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multi.fa");
        fs::write(&path, ">one desc\natgc\nGG\n>two\nTTTT\n").unwrap();

        let seq = read_fasta(&path).unwrap();
        assert_eq!(sequence::to_string(&seq), "ATGCGG");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.fasta");
        let seq = parse_sequence("ATGGCTAGCTAGCTAGCTAGC").unwrap();

        write_fasta(&seq, &path, DEFAULT_LINE_WIDTH).unwrap();
        assert_eq!(read_fasta(&path).unwrap(), seq);
    }

    #[test]
    fn test_read_rejects_ambiguous_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.fa");
        fs::write(&path, ">x\nACGN\n").unwrap();

        assert!(matches!(
            read_fasta(&path),
            Err(FastaError::InvalidSequence { .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_fasta(&dir.path().join("nope.fa")),
            Err(FastaError::Io(_))
        ));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.fa");
        fs::write(&path, "").unwrap();

        assert!(matches!(read_fasta(&path), Err(FastaError::Empty(_))));
    }
}
