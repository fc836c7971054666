//! genedit - an interactive modal editor for DNA sequences
//!
//! This is the main entry point for the application.

#![deny(warnings)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use genedit::config::{self, EditorConfig};
use genedit::sequence::{self, Nucleotide};
use genedit::{fasta, Editor};

const PROMPT: &str = "genedit> ";

const HELP: &str = "\
NORMAL:  i insert | v visual | x delete | r<sym> replace | c / c<N> change
         dd delete to marker | yy yank to marker | p paste | u undo | r redo
         h l 0 $ w motions | /<seq> search | q quit
INSERT:  <symbols> insert at cursor | ESC back to normal
VISUAL:  motions extend selection | y yank | d delete | ESC back to normal
EXTENDED (normal mode):
  :cas<guide>  :transcribe  :translate  :gc_content  :one_hot  :visualize
  :recombine <seq>  :mutate <rate>  :align <seq>  :analyze_mutations <seq>
  :save <file>  :load <file>  :annotate <start>,<end>,<label>  :annotations  :log";

/// genedit - modal DNA sequence editor
#[derive(Parser, Debug)]
#[command(name = "genedit")]
#[command(about = "A vim-style modal editor for DNA sequences", long_about = None)]
struct Cli {
    /// Initial sequence (overrides the configured one)
    sequence: Option<String>,

    /// Load the initial sequence from a FASTA file
    #[arg(short, long, conflicts_with = "sequence")]
    file: Option<PathBuf>,

    /// Seed for mutate, recombine and cut-repair draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print command results as JSON
    #[arg(long)]
    json: bool,

    /// Config file (defaults to ~/.config/genedit/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default config file
    InitConfig,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);

    match &cli.command {
        Some(Commands::InitConfig) => init_config(&config_path),
        Some(Commands::Completions { shell }) => {
            print_completions(*shell);
            Ok(())
        }
        None => run_repl(&cli, &config_path),
    }
}

/// Print shell completions
fn print_completions(shell: clap_complete::Shell) {
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "genedit",
        &mut std::io::stdout(),
    );
}

fn init_config(path: &Path) -> Result<()> {
    config::save_config(path, &EditorConfig::default())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Load the config, falling back to defaults on a broken file
fn load_config(path: &Path) -> EditorConfig {
    match config::load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config {}: {}", path.display(), e);
            eprintln!("Continuing with default settings.");
            EditorConfig::default()
        }
    }
}

fn initial_symbols(cli: &Cli, config: &EditorConfig) -> Result<Vec<Nucleotide>> {
    if let Some(path) = &cli.file {
        return fasta::read_fasta(path)
            .with_context(|| format!("Failed to load {}", path.display()));
    }
    let text = cli.sequence.as_deref().unwrap_or(&config.initial_sequence);
    sequence::parse_sequence(text).context("Invalid initial sequence")
}

/// Run the interactive loop until `q` or end of input
fn run_repl(cli: &Cli, config_path: &Path) -> Result<()> {
    let mut config = load_config(config_path);
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let original = initial_symbols(cli, &config)?;
    let mut editor = Editor::from_symbols(original.clone(), &config);
    let mut rl = DefaultEditor::new()?;

    println!("Type 'help' for commands, 'q' to quit.");
    print_status(&editor);

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        match line {
            "q" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            _ => {}
        }

        match editor.execute(line) {
            Ok(Some(outcome)) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                } else {
                    println!("Result: {outcome}");
                }
            }
            Ok(None) => {}
            Err(e) => println!("Error: {e}"),
        }

        if line.starts_with(":mutate") || line.starts_with(":recombine") {
            match editor.analyze_against(&original) {
                Ok(report) => println!("Mutation Analysis:\n{report}"),
                Err(e) => println!("Mutation analysis skipped: {e}"),
            }
        }

        print_status(&editor);
    }

    Ok(())
}

fn print_status(editor: &Editor) {
    println!(
        "Mode: {} | Cursor: {} | Sequence: {}",
        editor.mode(),
        editor.cursor(),
        editor.sequence()
    );
}
