//! Single-slot clipboard register
//!
//! Each yank or delete-to-clipboard overwrites the previous payload.

use crate::sequence::{self, Nucleotide};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    data: Vec<Nucleotide>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the register content
    pub fn set(&mut self, data: Vec<Nucleotide>) {
        self.data = data;
    }

    pub fn get(&self) -> &[Nucleotide] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_string(&self) -> String {
        sequence::to_string(&self.data)
    }
}
