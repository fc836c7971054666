//! Session trail of dispatched commands
//!
//! Each dispatched command leaves one entry recording what it did to the
//! buffer. The trail is bounded; once full, the oldest entry is evicted.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Entries kept by `EventLog::new`
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// What a dispatched command did to the buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// The symbols changed and a history snapshot was taken
    Committed,
    /// Ran without touching the symbols
    Unchanged,
    /// Returned an error (message kept for display)
    Failed(String),
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Committed => f.write_str("committed"),
            Effect::Unchanged => f.write_str("unchanged"),
            Effect::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    /// `EditorCommand::description()`
    pub command: &'static str,
    pub effect: Effect,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}]",
            self.at.format("%H:%M:%S"),
            self.command,
            self.effect
        )
    }
}

#[derive(Debug)]
pub struct EventLog {
    /// Oldest at front
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// A zero capacity disables the trail
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, command: &'static str, effect: Effect) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Utc::now(),
            command,
            effect,
        });
    }

    /// Newest first
    pub fn recent(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
