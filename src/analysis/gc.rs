//! GC content

use serde::Serialize;

use crate::sequence::Nucleotide;

/// Default sliding window size
pub const DEFAULT_GC_WINDOW: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GcReport {
    /// Fraction of G/C over the whole sequence (0 when empty)
    pub overall_gc_content: f64,
    /// One value per window start, step 1; empty if the sequence is shorter than the window
    pub sliding_window_gc_content: Vec<f64>,
}

pub fn gc_content(symbols: &[Nucleotide], window: usize) -> GcReport {
    GcReport {
        overall_gc_content: fraction_gc(symbols),
        sliding_window_gc_content: sliding_window(symbols, window),
    }
}

fn fraction_gc(symbols: &[Nucleotide]) -> f64 {
    if symbols.is_empty() {
        return 0.0;
    }
    symbols.iter().filter(|n| n.is_gc()).count() as f64 / symbols.len() as f64
}

fn sliding_window(symbols: &[Nucleotide], window: usize) -> Vec<f64> {
    if window == 0 || symbols.len() < window {
        return Vec::new();
    }

    // Running count instead of rescanning each window
    let mut gc = symbols[..window].iter().filter(|n| n.is_gc()).count();
    let mut series = Vec::with_capacity(symbols.len() - window + 1);
    series.push(gc as f64 / window as f64);
    for i in window..symbols.len() {
        if symbols[i].is_gc() {
            gc += 1;
        }
        if symbols[i - window].is_gc() {
            gc -= 1;
        }
        series.push(gc as f64 / window as f64);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::parse_sequence;

    #[test]
    fn test_overall_gc() {
        let seq = parse_sequence("AAAGGGTTTCCC").unwrap();
        let report = gc_content(&seq, DEFAULT_GC_WINDOW);
        assert_eq!(report.overall_gc_content, 0.5);
        assert!(report.sliding_window_gc_content.is_empty());
    }

    #[test]
    fn test_sliding_window() {
        let seq = parse_sequence("GGAA").unwrap();
        let report = gc_content(&seq, 2);
        assert_eq!(report.sliding_window_gc_content, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_empty_sequence() {
        let report = gc_content(&[], 3);
        assert_eq!(report.overall_gc_content, 0.0);
        assert!(report.sliding_window_gc_content.is_empty());
    }
}
