//! Extended (`:`) command parsing with argument validation

use std::path::PathBuf;

use crate::annotation::Annotation;
use crate::command::EditorCommand;
use crate::edit::EditError;
use crate::sequence::{parse_sequence, Nucleotide};

/// Parse the text after `:`
pub(super) fn parse_extended(text: &str) -> Result<Option<EditorCommand>, EditError> {
    let (name, args) = match text.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (text, ""),
    };

    // The guide is glued to the name (`:casGCTAGC`), a separate argument is accepted too
    if let Some(glued) = name.strip_prefix("cas") {
        let guide = format!("{glued}{args}");
        return required_sequence("cas", &guide).map(|g| Some(EditorCommand::CasEdit(g)));
    }

    let cmd = match name {
        "transcribe" => EditorCommand::Transcribe,
        "translate" => EditorCommand::Translate,
        "gc_content" => EditorCommand::GcContent,
        "one_hot" => EditorCommand::OneHot,
        "visualize" => EditorCommand::Visualize,
        "annotations" => EditorCommand::ListAnnotations,
        "log" => EditorCommand::ShowLog,
        "recombine" => EditorCommand::Recombine(required_sequence(name, args)?),
        "align" => EditorCommand::Align(required_sequence(name, args)?),
        "analyze_mutations" => EditorCommand::AnalyzeMutations(required_sequence(name, args)?),
        "mutate" => EditorCommand::Mutate(parse_rate(args)?),
        "save" => EditorCommand::Save(required_path(name, args)?),
        "load" => EditorCommand::Load(required_path(name, args)?),
        "annotate" => {
            required(name, args)?;
            EditorCommand::Annotate(args.parse::<Annotation>()?)
        }
        _ => return Ok(None),
    };
    Ok(Some(cmd))
}

fn required<'a>(name: &str, args: &'a str) -> Result<&'a str, EditError> {
    if args.is_empty() {
        Err(EditError::malformed(format!("{name} requires an argument")))
    } else {
        Ok(args)
    }
}

fn required_sequence(name: &str, args: &str) -> Result<Vec<Nucleotide>, EditError> {
    let text = required(name, args)?;
    parse_sequence(text).map_err(|e| EditError::malformed(format!("{name}: {e}")))
}

fn required_path(name: &str, args: &str) -> Result<PathBuf, EditError> {
    required(name, args).map(PathBuf::from)
}

fn parse_rate(args: &str) -> Result<f64, EditError> {
    let text = required("mutate", args)?;
    let rate: f64 = text
        .parse()
        .map_err(|_| EditError::malformed(format!("mutate: invalid rate '{text}'")))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(EditError::malformed(format!(
            "mutate: rate {rate} is outside [0, 1]"
        )));
    }
    Ok(rate)
}
