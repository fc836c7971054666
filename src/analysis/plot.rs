//! Text sparkline for numeric series in `[0, 1]`

/// Widest sparkline rendered; longer series are averaged into buckets
const MAX_WIDTH: usize = 80;

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn plot(title: &str, series: &[f64]) -> String {
    if series.is_empty() {
        return format!("{title}\n(no data)");
    }

    let bucket = series.len().div_ceil(MAX_WIDTH);
    let line: String = series
        .chunks(bucket)
        .map(|chunk| {
            let mean = chunk.iter().sum::<f64>() / chunk.len() as f64;
            let level = (mean.clamp(0.0, 1.0) * (LEVELS.len() - 1) as f64).round() as usize;
            LEVELS[level]
        })
        .collect();

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    format!("{title}\n{line}\nmin {min:.2}  max {max:.2}  points {}", series.len())
}
