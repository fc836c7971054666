//! Structural edit algorithms
//!
//! These operate on plain symbol slices and return new data or an error;
//! the editor decides how results land in the buffer and clipboard.
//! Stochastic algorithms take their randomness as an explicit `EditRng`.

pub mod cas;
pub mod diff;
pub mod marker;
pub mod mutate;
pub mod recombine;
pub mod rng;

pub use cas::{cas_edit, CasOutcome, Repair};
pub use diff::{analyze_mutations, MutationReport, PointMutation};
pub use marker::{find_next_marker, MARKER};
pub use mutate::mutate;
pub use recombine::{recombine, Recombination};
pub use rng::EditRng;

/// Errors surfaced by command parsing and structural edits
///
/// None of these abort a session; the caller reports them and carries on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Sequences must be at least {required} symbols long (got {actual})")]
    InsufficientLength { required: usize, actual: usize },

    #[error("Sequences must be of equal length for mutation analysis (reference {reference}, current {current})")]
    LengthMismatch { reference: usize, current: usize },

    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("{0}")]
    Persistence(String),
}

impl EditError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedCommand(msg.into())
    }
}
