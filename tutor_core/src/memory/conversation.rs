//! Conversation records.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Current local time as an ISO-8601 string with microseconds.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// One recorded exchange. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// The user's input, lower-cased.
    pub input: String,

    /// The response that was given.
    pub response: String,

    /// When the exchange was recorded (local ISO-8601).
    pub timestamp: String,

    /// Optional feedback supplied while training.
    #[serde(default)]
    pub feedback: Option<String>,
}

impl ConversationEntry {
    /// Record an exchange happening now.
    pub fn new(input: &str, response: impl Into<String>, feedback: Option<String>) -> Self {
        Self {
            input: input.to_lowercase(),
            response: response.into(),
            timestamp: timestamp_now(),
            feedback,
        }
    }

    /// Override the timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}

/// Ordered, append-only record of exchanges.
///
/// Unbounded in memory; truncation only happens when persisting or exporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    /// Get the total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&ConversationEntry> {
        self.entries.last()
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[ConversationEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Drop everything but the most recent `n` entries.
    pub fn retain_last(&mut self, n: usize) {
        let start = self.entries.len().saturating_sub(n);
        self.entries.drain(..start);
    }

    /// Iterate entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ConversationEntry> {
        self.entries.iter()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<ConversationEntry> for ConversationLog {
    fn from_iter<I: IntoIterator<Item = ConversationEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
