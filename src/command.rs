//! Editor command pattern
//!
//! Every input line is parsed into at most one `EditorCommand`, which the
//! editor dispatches. This keeps:
//! - Undo commits decided in one place (`is_undoable`)
//! - Parsing testable without an editor
//! - Event logging uniform (`description`)

use std::path::PathBuf;

use crate::annotation::Annotation;
use crate::sequence::Nucleotide;

/// What a change (`c`) removes before entering insert mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTarget {
    /// Up to the next start marker (`c`)
    UntilMarker,
    /// A fixed number of symbols (`c<N>`)
    Count(usize),
}

/// Editor commands representing all possible state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // ========================================================================
    // Mode
    // ========================================================================
    /// `i`
    EnterInsert,

    /// `v` (anchors the selection at the cursor)
    EnterVisual,

    /// `ESC` from insert or visual mode
    Escape,

    /// Any symbol run typed in insert mode
    InsertText(Vec<Nucleotide>),

    // ========================================================================
    // Motions (normal and visual)
    // ========================================================================
    /// `h`
    MoveLeft,

    /// `l`
    MoveRight,

    /// `0`
    MoveToStart,

    /// `$`
    MoveToEnd,

    /// `w` - next marker strictly after the cursor
    NextMarker,

    /// `/<seq>` - first match at or after the cursor
    Search(Vec<Nucleotide>),

    // ========================================================================
    // Normal-mode edits
    // ========================================================================
    /// `x`
    DeleteSymbol,

    /// `r<sym>`
    Replace(Nucleotide),

    /// `c` / `c<N>`
    Change(ChangeTarget),

    /// `dd` - delete until the next marker (clipboard untouched)
    DeleteToMarker,

    /// `yy` - copy until the next marker
    YankToMarker,

    /// `p`
    Paste,

    /// `u`
    Undo,

    /// `r`
    Redo,

    // ========================================================================
    // Visual-mode edits
    // ========================================================================
    /// `y` in visual mode
    YankSelection,

    /// `d` in visual mode (deleted span goes to the clipboard)
    DeleteSelection,

    // ========================================================================
    // Extended (`:`) commands
    // ========================================================================
    /// `:cas<guide>` - targeted cut-repair edit
    CasEdit(Vec<Nucleotide>),

    Transcribe,

    Translate,

    GcContent,

    OneHot,

    /// `:recombine <seq>`
    Recombine(Vec<Nucleotide>),

    /// `:mutate <rate>`, rate in [0, 1]
    Mutate(f64),

    /// `:align <seq>`
    Align(Vec<Nucleotide>),

    Visualize,

    /// `:save <file>`
    Save(PathBuf),

    /// `:load <file>`
    Load(PathBuf),

    /// `:annotate <start>,<end>,<label>`
    Annotate(Annotation),

    /// `:annotations`
    ListAnnotations,

    /// `:analyze_mutations <seq>`
    AnalyzeMutations(Vec<Nucleotide>),

    /// `:log`
    ShowLog,
}

impl EditorCommand {
    /// Check if this command can change the buffer and so needs a history commit
    ///
    /// Undo and redo move through history rather than adding to it.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            EditorCommand::InsertText(_)
                | EditorCommand::DeleteSymbol
                | EditorCommand::Replace(_)
                | EditorCommand::Change(_)
                | EditorCommand::DeleteToMarker
                | EditorCommand::Paste
                | EditorCommand::DeleteSelection
                | EditorCommand::CasEdit(_)
                | EditorCommand::Recombine(_)
                | EditorCommand::Mutate(_)
                | EditorCommand::Load(_)
        )
    }

    /// Get a short description for logging/debugging
    pub fn description(&self) -> &'static str {
        match self {
            EditorCommand::EnterInsert => "enter insert mode",
            EditorCommand::EnterVisual => "enter visual mode",
            EditorCommand::Escape => "escape",
            EditorCommand::InsertText(_) => "insert",
            EditorCommand::MoveLeft => "move left",
            EditorCommand::MoveRight => "move right",
            EditorCommand::MoveToStart => "move to start",
            EditorCommand::MoveToEnd => "move to end",
            EditorCommand::NextMarker => "next marker",
            EditorCommand::Search(_) => "search",
            EditorCommand::DeleteSymbol => "delete symbol",
            EditorCommand::Replace(_) => "replace symbol",
            EditorCommand::Change(_) => "change",
            EditorCommand::DeleteToMarker => "delete to marker",
            EditorCommand::YankToMarker => "yank to marker",
            EditorCommand::Paste => "paste",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
            EditorCommand::YankSelection => "yank selection",
            EditorCommand::DeleteSelection => "delete selection",
            EditorCommand::CasEdit(_) => "cut-repair edit",
            EditorCommand::Transcribe => "transcribe",
            EditorCommand::Translate => "translate",
            EditorCommand::GcContent => "gc content",
            EditorCommand::OneHot => "one-hot encode",
            EditorCommand::Recombine(_) => "recombine",
            EditorCommand::Mutate(_) => "mutate",
            EditorCommand::Align(_) => "align",
            EditorCommand::Visualize => "visualize",
            EditorCommand::Save(_) => "save",
            EditorCommand::Load(_) => "load",
            EditorCommand::Annotate(_) => "annotate",
            EditorCommand::ListAnnotations => "list annotations",
            EditorCommand::AnalyzeMutations(_) => "analyze mutations",
            EditorCommand::ShowLog => "show log",
        }
    }
}
