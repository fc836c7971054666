//! genedit - a vim-style modal editor for DNA sequences
//!
//! This library exposes the editing engine (modes, command parsing,
//! buffer/clipboard/history, structural edit algorithms) for testing
//! and embedding. The `genedit` binary wraps it in a line-oriented REPL.

#![deny(warnings)]

pub mod analysis;
pub mod annotation;
pub mod buffer;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod cursor;
pub mod edit;
pub mod editor;
pub mod event_log;
pub mod fasta;
pub mod history;
pub mod input;
pub mod mode;
pub mod outcome;
pub mod sequence;

pub use editor::Editor;
