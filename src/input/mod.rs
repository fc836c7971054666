//! Command-line parsing, routed by mode
//!
//! Each input line resolves to at most one `EditorCommand`:
//! - `Ok(Some(cmd))` - dispatch it
//! - `Ok(None)` - unrecognized; a silent no-op
//! - `Err(MalformedCommand)` - a known extended command with bad arguments
//!
//! Extended (`:`) commands are only recognized in normal mode.

mod extended;

use crate::command::{ChangeTarget, EditorCommand};
use crate::edit::EditError;
use crate::mode::{EditorMode, ESCAPE};
use crate::sequence::{parse_sequence, Nucleotide};

/// Parse one input line for the given mode
pub fn parse_command(mode: EditorMode, line: &str) -> Result<Option<EditorCommand>, EditError> {
    let line = line.trim();
    match mode {
        EditorMode::Normal => parse_normal(line),
        EditorMode::Insert => Ok(parse_insert(line)),
        EditorMode::Visual => Ok(parse_visual(line)),
    }
}

fn parse_normal(line: &str) -> Result<Option<EditorCommand>, EditError> {
    if let Some(rest) = line.strip_prefix(':') {
        return extended::parse_extended(rest);
    }

    let cmd = match line {
        "i" => Some(EditorCommand::EnterInsert),
        "v" => Some(EditorCommand::EnterVisual),
        "x" => Some(EditorCommand::DeleteSymbol),
        "dd" => Some(EditorCommand::DeleteToMarker),
        "yy" => Some(EditorCommand::YankToMarker),
        "p" => Some(EditorCommand::Paste),
        "u" => Some(EditorCommand::Undo),
        "r" => Some(EditorCommand::Redo),
        _ => {
            if let Some(motion) = parse_motion(line) {
                Some(motion)
            } else if let Some(sym) = line.strip_prefix('r') {
                parse_single_symbol(sym).map(EditorCommand::Replace)
            } else if let Some(suffix) = line.strip_prefix('c') {
                parse_change(suffix).map(EditorCommand::Change)
            } else {
                None
            }
        }
    };
    Ok(cmd)
}

fn parse_insert(line: &str) -> Option<EditorCommand> {
    if line == ESCAPE {
        return Some(EditorCommand::Escape);
    }
    match parse_sequence(line) {
        Ok(symbols) if !symbols.is_empty() => Some(EditorCommand::InsertText(symbols)),
        _ => None,
    }
}

fn parse_visual(line: &str) -> Option<EditorCommand> {
    match line {
        l if l == ESCAPE => Some(EditorCommand::Escape),
        "y" => Some(EditorCommand::YankSelection),
        "d" => Some(EditorCommand::DeleteSelection),
        _ => parse_motion(line),
    }
}

/// Motions shared by normal and visual mode
fn parse_motion(line: &str) -> Option<EditorCommand> {
    match line {
        "h" => Some(EditorCommand::MoveLeft),
        "l" => Some(EditorCommand::MoveRight),
        "0" => Some(EditorCommand::MoveToStart),
        "$" => Some(EditorCommand::MoveToEnd),
        "w" => Some(EditorCommand::NextMarker),
        _ => {
            let target = line.strip_prefix('/')?;
            match parse_sequence(target) {
                Ok(symbols) if !symbols.is_empty() => Some(EditorCommand::Search(symbols)),
                _ => None,
            }
        }
    }
}

fn parse_single_symbol(text: &str) -> Option<Nucleotide> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Nucleotide::from_char(c),
        _ => None,
    }
}

fn parse_change(suffix: &str) -> Option<ChangeTarget> {
    if suffix.is_empty() {
        return Some(ChangeTarget::UntilMarker);
    }
    suffix.parse().ok().map(ChangeTarget::Count)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
