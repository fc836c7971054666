//! Editor mode state machine.
//!
//! The editor is always in exactly one mode. Entering and leaving modes only
//! happens through the tokens below; everything else is routed by mode.
//!
//! ```text
//! NORMAL --"i"--> INSERT --"ESC"--> NORMAL
//! NORMAL --"v"--> VISUAL --"ESC"--> NORMAL
//! ```

use serde::{Deserialize, Serialize};

/// Token that leaves INSERT or VISUAL mode
pub const ESCAPE: &str = "ESC";

/// Editor mode - exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    #[default]
    Normal,
    Insert,
    Visual,
}

impl EditorMode {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Visual => "VISUAL",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert)
    }

    pub fn is_visual(&self) -> bool {
        matches!(self, Self::Visual)
    }

    /// Enter insert mode (only valid from normal mode)
    pub fn enter_insert(&mut self) -> bool {
        self.transition(Self::Insert)
    }

    /// Enter visual mode (only valid from normal mode)
    pub fn enter_visual(&mut self) -> bool {
        self.transition(Self::Visual)
    }

    /// Return to normal mode from any mode
    pub fn escape(&mut self) {
        *self = Self::Normal;
    }

    fn transition(&mut self, to: Self) -> bool {
        if self.is_normal() {
            *self = to;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for EditorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_normal() {
        assert_eq!(EditorMode::default(), EditorMode::Normal);
    }

    #[test]
    fn test_insert_roundtrip() {
        let mut mode = EditorMode::Normal;
        assert!(mode.enter_insert());
        assert!(mode.is_insert());

        mode.escape();
        assert!(mode.is_normal());
    }

    #[test]
    fn test_visual_roundtrip() {
        let mut mode = EditorMode::Normal;
        assert!(mode.enter_visual());
        assert_eq!(mode.as_str(), "VISUAL");

        mode.escape();
        assert!(mode.is_normal());
    }

    #[test]
    fn test_no_direct_insert_visual_switch() {
        let mut mode = EditorMode::Insert;
        assert!(!mode.enter_visual());
        assert!(mode.is_insert());

        let mut mode = EditorMode::Visual;
        assert!(!mode.enter_insert());
        assert!(mode.is_visual());
    }
}
