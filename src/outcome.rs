//! Results reported back from dispatched commands

use std::fmt;

use serde::Serialize;

use crate::analysis::{AlignmentReport, GcReport};
use crate::annotation::Annotation;
use crate::edit::MutationReport;
use crate::event_log::LogEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Status text (cut-repair result, save/load confirmation, ...)
    Message(String),
    /// A derived or resulting sequence (transcription, mutation, ...)
    Sequence(String),
    Recombination {
        points: (usize, usize),
        sequence: String,
    },
    GcContent(GcReport),
    OneHot(Vec<[u8; 4]>),
    Alignment(AlignmentReport),
    Plot(String),
    Mutations(MutationReport),
    Annotations(Vec<Annotation>),
    Log(Vec<LogEntry>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Message(text) | Outcome::Sequence(text) | Outcome::Plot(text) => {
                f.write_str(text)
            }
            Outcome::Recombination { points, sequence } => {
                write!(f, "{sequence} (crossover at {} and {})", points.0, points.1)
            }
            Outcome::GcContent(report) => {
                write!(f, "Overall GC content: {:.2}%", report.overall_gc_content * 100.0)?;
                let series = &report.sliding_window_gc_content;
                if !series.is_empty() {
                    let mean = series.iter().sum::<f64>() / series.len() as f64;
                    write!(f, "\nSliding windows: {} (mean {:.2}%)", series.len(), mean * 100.0)?;
                }
                Ok(())
            }
            Outcome::OneHot(rows) => {
                let lines: Vec<String> = rows
                    .iter()
                    .map(|row| format!("[{} {} {} {}]", row[0], row[1], row[2], row[3]))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            Outcome::Alignment(report) => write!(f, "{}\nScore: {}", report.text, report.score),
            Outcome::Mutations(report) => write!(f, "{report}"),
            Outcome::Annotations(annotations) => {
                if annotations.is_empty() {
                    return f.write_str("No annotations");
                }
                let lines: Vec<String> = annotations.iter().map(|a| a.to_string()).collect();
                f.write_str(&lines.join("\n"))
            }
            Outcome::Log(entries) => {
                if entries.is_empty() {
                    return f.write_str("Log is empty");
                }
                let lines: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_display() {
        assert_eq!(Outcome::Message("hello".into()).to_string(), "hello");
    }

    #[test]
    fn test_recombination_display() {
        let outcome = Outcome::Recombination {
            points: (2, 5),
            sequence: "ATGC".into(),
        };
        assert_eq!(outcome.to_string(), "ATGC (crossover at 2 and 5)");
    }

    #[test]
    fn test_json_is_tagged() {
        let json = serde_json::to_value(Outcome::Sequence("AUG".into())).unwrap();
        assert_eq!(json["kind"], "sequence");
        assert_eq!(json["value"], "AUG");
    }

    #[test]
    fn test_empty_annotations_display() {
        assert_eq!(Outcome::Annotations(vec![]).to_string(), "No annotations");
    }
}
