//! Visual-mode selection state
//!
//! The selection is anchored where VISUAL mode was entered and follows the
//! cursor afterwards. It is only meaningful while in VISUAL mode.

/// Anchor/head pair set when entering visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started
    pub anchor: usize,
    /// Current cursor end of the selection
    pub head: usize,
}

impl Selection {
    pub fn new(at: usize) -> Self {
        Self {
            anchor: at,
            head: at,
        }
    }

    /// Half-open span covered by the selection, clamped to `len`
    ///
    /// Both endpoints are inclusive, so a fresh selection covers one symbol.
    pub fn span(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.anchor.min(self.head).min(len);
        let end = (self.anchor.max(self.head) + 1).min(len);
        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_selection_covers_one_symbol() {
        assert_eq!(Selection::new(2).span(10), 2..3);
    }

    #[test]
    fn test_span_is_direction_independent() {
        let forward = Selection { anchor: 1, head: 4 };
        let backward = Selection { anchor: 4, head: 1 };
        assert_eq!(forward.span(10), 1..5);
        assert_eq!(backward.span(10), 1..5);
    }

    #[test]
    fn test_span_clamps_to_buffer() {
        assert_eq!(Selection::new(5).span(5), 5..5);
        assert_eq!(Selection { anchor: 3, head: 9 }.span(5), 3..5);
        assert_eq!(Selection::new(0).span(0), 0..0);
    }
}
