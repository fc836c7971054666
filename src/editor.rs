//! Editor state and command dispatch
//!
//! `Editor` owns the buffer, clipboard, mode, selection, history and event
//! log. Input lines go through `execute`, which parses them for the current
//! mode and hands the resulting command to `dispatch`.
//!
//! History commits happen once per dispatched command, only for undoable
//! commands that actually changed the symbols. Undo and redo never commit.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::analysis;
use crate::annotation::Annotation;
use crate::buffer::SequenceBuffer;
use crate::clipboard::Clipboard;
use crate::command::{ChangeTarget, EditorCommand};
use crate::config::EditorConfig;
use crate::cursor::Selection;
use crate::edit::{self, EditError, EditRng, Repair};
use crate::event_log::{Effect, EventLog};
use crate::fasta;
use crate::history::History;
use crate::input;
use crate::mode::EditorMode;
use crate::outcome::Outcome;
use crate::sequence::{self, Nucleotide};

/// Title used for the GC plot
const GC_PLOT_TITLE: &str = "GC Content Along Sequence";

pub struct Editor<R = SmallRng> {
    buffer: SequenceBuffer,
    clipboard: Clipboard,
    mode: EditorMode,
    /// Set while in visual mode
    selection: Option<Selection>,
    history: History,
    annotations: Vec<Annotation>,
    event_log: EventLog,
    rng: R,
    gc_window: usize,
    fasta_line_width: usize,
}

impl Editor<SmallRng> {
    /// Editor over `sequence` with default settings and an OS-seeded RNG
    pub fn new(sequence: &str) -> Result<Self, EditError> {
        let symbols = sequence::parse_sequence(sequence)?;
        Ok(Self::from_symbols(symbols, &EditorConfig::default()))
    }

    /// Editor over the configured initial sequence
    pub fn from_config(config: &EditorConfig) -> Result<Self, EditError> {
        let symbols = sequence::parse_sequence(&config.initial_sequence)?;
        Ok(Self::from_symbols(symbols, config))
    }

    /// Editor over given symbols; seeded from `config.seed` when set
    pub fn from_symbols(symbols: Vec<Nucleotide>, config: &EditorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::with_rng(symbols, rng, config)
    }
}

impl<R: EditRng> Editor<R> {
    /// Editor with an explicit randomness source
    pub fn with_rng(symbols: Vec<Nucleotide>, rng: R, config: &EditorConfig) -> Self {
        Self {
            history: History::with_limit(symbols.clone(), config.history_limit),
            buffer: SequenceBuffer::new(symbols),
            clipboard: Clipboard::new(),
            mode: EditorMode::default(),
            selection: None,
            annotations: Vec::new(),
            event_log: EventLog::new(),
            rng,
            gc_window: config.gc_window,
            fasta_line_width: config.fasta_line_width,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn sequence(&self) -> String {
        self.buffer.to_sequence_string()
    }

    pub fn symbols(&self) -> &[Nucleotide] {
        self.buffer.symbols()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Parse one input line for the current mode and dispatch it
    ///
    /// Unrecognized input is a silent no-op (`Ok(None)`).
    pub fn execute(&mut self, line: &str) -> Result<Option<Outcome>, EditError> {
        match input::parse_command(self.mode, line)? {
            Some(cmd) => self.dispatch(cmd),
            None => Ok(None),
        }
    }

    /// Dispatch a parsed command (single write point for logging and history)
    pub fn dispatch(&mut self, cmd: EditorCommand) -> Result<Option<Outcome>, EditError> {
        let description = cmd.description();
        let undoable = cmd.is_undoable();
        let result = self.apply(cmd);

        let changed = undoable && self.buffer.symbols() != self.history.current().as_slice();
        if changed {
            self.history.commit(self.buffer.symbols().to_vec());
        }

        let effect = match &result {
            Err(e) => Effect::Failed(e.to_string()),
            Ok(_) if changed => Effect::Committed,
            Ok(_) => Effect::Unchanged,
        };
        self.event_log.record(description, effect);
        result
    }

    fn apply(&mut self, cmd: EditorCommand) -> Result<Option<Outcome>, EditError> {
        let cursor = self.buffer.cursor();

        match cmd {
            // Mode
            EditorCommand::EnterInsert => {
                self.mode.enter_insert();
            }
            EditorCommand::EnterVisual => {
                if self.mode.enter_visual() {
                    self.selection = Some(Selection::new(cursor));
                }
            }
            EditorCommand::Escape => {
                self.mode.escape();
                self.selection = None;
            }
            EditorCommand::InsertText(symbols) => self.buffer.insert_at_cursor(&symbols),

            // Motions
            EditorCommand::MoveLeft => self.move_cursor(cursor.saturating_sub(1)),
            EditorCommand::MoveRight => self.move_cursor(cursor + 1),
            EditorCommand::MoveToStart => self.move_cursor(0),
            EditorCommand::MoveToEnd => self.move_cursor(self.buffer.len()),
            EditorCommand::NextMarker => {
                let next = edit::find_next_marker(self.buffer.symbols(), cursor + 1);
                self.move_cursor(next);
            }
            EditorCommand::Search(target) => {
                // Not found leaves the cursor where it is
                if let Some(pos) = sequence::find_from(self.buffer.symbols(), &target, cursor) {
                    self.move_cursor(pos);
                }
            }

            // Normal-mode edits
            EditorCommand::DeleteSymbol => {
                self.buffer.remove_range(cursor..cursor + 1);
            }
            EditorCommand::Replace(symbol) => {
                self.buffer.replace_at_cursor(symbol);
            }
            EditorCommand::Change(target) => {
                let end = match target {
                    ChangeTarget::UntilMarker => self.marker_end(),
                    ChangeTarget::Count(n) => cursor.saturating_add(n),
                };
                self.buffer.remove_range(cursor..end);
                self.mode.enter_insert();
            }
            EditorCommand::DeleteToMarker => {
                let end = self.marker_end();
                self.buffer.remove_range(cursor..end);
            }
            EditorCommand::YankToMarker => {
                let end = self.marker_end();
                self.clipboard.set(self.buffer.slice(cursor..end));
            }
            EditorCommand::Paste => {
                let data = self.clipboard.get().to_vec();
                self.buffer.insert_at_cursor(&data);
            }
            EditorCommand::Undo => {
                if let Some(snapshot) = self.history.undo() {
                    self.buffer.replace_all(snapshot.clone());
                }
            }
            EditorCommand::Redo => {
                if let Some(snapshot) = self.history.redo() {
                    self.buffer.replace_all(snapshot.clone());
                }
            }

            // Visual-mode edits
            EditorCommand::YankSelection => {
                if let Some(span) = self.take_selection_span() {
                    self.clipboard.set(self.buffer.slice(span.clone()));
                    self.buffer.set_cursor(span.start);
                }
            }
            EditorCommand::DeleteSelection => {
                if let Some(span) = self.take_selection_span() {
                    let removed = self.buffer.remove_range(span.clone());
                    self.clipboard.set(removed);
                    self.buffer.set_cursor(span.start);
                }
            }

            // Extended commands
            EditorCommand::CasEdit(guide) => {
                return match edit::cas_edit(self.buffer.symbols(), &guide, &mut self.rng) {
                    Ok(outcome) => {
                        self.buffer.replace_all(outcome.sequence);
                        let repair = match outcome.repair {
                            Repair::Inserted(n) => format!("inserted {n}"),
                            Repair::Deleted(n) => format!("deleted {n}"),
                        };
                        Ok(Some(Outcome::Message(format!(
                            "Cut-repair edit performed at position {} ({repair})",
                            outcome.cut_site
                        ))))
                    }
                    Err(EditError::NotFound(_)) => {
                        Ok(Some(Outcome::Message("Target sequence not found".to_string())))
                    }
                    Err(e) => Err(e),
                };
            }
            EditorCommand::Transcribe => {
                return Ok(Some(Outcome::Sequence(analysis::transcribe(
                    self.buffer.symbols(),
                ))));
            }
            EditorCommand::Translate => {
                return Ok(Some(Outcome::Sequence(analysis::translate(
                    self.buffer.symbols(),
                ))));
            }
            EditorCommand::GcContent => {
                let report = analysis::gc_content(self.buffer.symbols(), self.gc_window);
                return Ok(Some(Outcome::GcContent(report)));
            }
            EditorCommand::OneHot => {
                return Ok(Some(Outcome::OneHot(analysis::one_hot(self.buffer.symbols()))));
            }
            EditorCommand::Recombine(other) => {
                let result = edit::recombine(self.buffer.symbols(), &other, &mut self.rng)?;
                self.buffer.replace_all(result.sequence);
                return Ok(Some(Outcome::Recombination {
                    points: result.points,
                    sequence: self.buffer.to_sequence_string(),
                }));
            }
            EditorCommand::Mutate(rate) => {
                let mutated = edit::mutate(self.buffer.symbols(), rate, &mut self.rng);
                self.buffer.replace_all(mutated);
                return Ok(Some(Outcome::Sequence(self.buffer.to_sequence_string())));
            }
            EditorCommand::Align(other) => {
                let report = analysis::pairwise_align(self.buffer.symbols(), &other);
                return Ok(Some(Outcome::Alignment(report)));
            }
            EditorCommand::Visualize => {
                let report = analysis::gc_content(self.buffer.symbols(), self.gc_window);
                let chart = analysis::plot(GC_PLOT_TITLE, &report.sliding_window_gc_content);
                return Ok(Some(Outcome::Plot(chart)));
            }
            EditorCommand::Save(path) => {
                fasta::write_fasta(self.buffer.symbols(), &path, self.fasta_line_width)
                    .map_err(|e| EditError::Persistence(e.to_string()))?;
                return Ok(Some(Outcome::Message(format!(
                    "Saved {} symbols to {}",
                    self.buffer.len(),
                    path.display()
                ))));
            }
            EditorCommand::Load(path) => {
                let symbols =
                    fasta::read_fasta(&path).map_err(|e| EditError::Persistence(e.to_string()))?;
                self.buffer.replace_all(symbols);
                return Ok(Some(Outcome::Message(format!(
                    "Loaded {} symbols from {}",
                    self.buffer.len(),
                    path.display()
                ))));
            }
            EditorCommand::Annotate(annotation) => {
                let message = format!("Annotated {annotation}");
                self.annotations.push(annotation);
                return Ok(Some(Outcome::Message(message)));
            }
            EditorCommand::ListAnnotations => {
                return Ok(Some(Outcome::Annotations(self.annotations.clone())));
            }
            EditorCommand::AnalyzeMutations(reference) => {
                let report = edit::analyze_mutations(&reference, self.buffer.symbols())?;
                return Ok(Some(Outcome::Mutations(report)));
            }
            EditorCommand::ShowLog => {
                let entries = self.event_log.recent().cloned().collect();
                return Ok(Some(Outcome::Log(entries)));
            }
        }

        Ok(None)
    }

    /// Analyze the buffer against `reference` without dispatching a command
    pub fn analyze_against(&self, reference: &[Nucleotide]) -> Result<edit::MutationReport, EditError> {
        edit::analyze_mutations(reference, self.buffer.symbols())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// End of the half-open span `[cursor, next marker)`
    ///
    /// A marker sitting at the cursor opens the span rather than closing it,
    /// so the search starts one past the cursor.
    fn marker_end(&self) -> usize {
        edit::find_next_marker(self.buffer.symbols(), self.buffer.cursor() + 1)
    }

    /// Move the cursor, dragging the visual selection head along
    fn move_cursor(&mut self, pos: usize) {
        self.buffer.set_cursor(pos);
        if let Some(selection) = &mut self.selection {
            selection.head = self.buffer.cursor();
        }
    }

    /// Consume the selection and leave visual mode
    fn take_selection_span(&mut self) -> Option<std::ops::Range<usize>> {
        self.mode.escape();
        self.selection
            .take()
            .map(|selection| selection.span(self.buffer.len()))
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
