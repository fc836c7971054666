//! Editor configuration
//!
//! Settings live in `~/.config/genedit/config.json`. Every field has a
//! default, so a partial file (or none at all) is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::gc::DEFAULT_GC_WINDOW;
use crate::fasta::DEFAULT_LINE_WIDTH;
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Sequence loaded when nothing else is given
pub const DEFAULT_SEQUENCE: &str = "ATGGCTAGCTAGCTAGCTAGC";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub initial_sequence: String,
    /// Maximum number of undo snapshots
    pub history_limit: usize,
    /// Window size for sliding GC content
    pub gc_window: usize,
    /// Sequence line width when saving FASTA
    pub fasta_line_width: usize,
    /// Fixed seed for stochastic commands (random if unset)
    pub seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_sequence: DEFAULT_SEQUENCE.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            gc_window: DEFAULT_GC_WINDOW,
            fasta_line_width: DEFAULT_LINE_WIDTH,
            seed: None,
        }
    }
}

/// Config-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Get the default config path (~/.config/genedit/config.json)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("genedit")
        .join(CONFIG_FILE_NAME)
}

/// Load config from disk; a missing file yields defaults
pub fn load_config(path: &Path) -> Result<EditorConfig, ConfigError> {
    if !path.exists() {
        return Ok(EditorConfig::default());
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save config to disk (atomic write)
pub fn save_config(path: &Path, config: &EditorConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_file = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&temp_file, &json)?;
    fs::rename(&temp_file, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "seed": 7, "gc_window": 10 }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.gc_window, 10);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.initial_sequence, DEFAULT_SEQUENCE);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = EditorConfig {
            seed: Some(11),
            ..EditorConfig::default()
        };

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_default_path_is_namespaced() {
        assert!(default_config_path().ends_with("genedit/config.json"));
    }
}
