//! Learning document persistence - the only I/O the tutor does.
//!
//! The document is one JSON object:
//!
//! ```text
//! {
//!   "conversations": [ {input, response, timestamp, feedback}, ... ],
//!   "learned_patterns": { "pattern key": ["response", ...], ... }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::PersistenceError;
use crate::memory::{ConversationEntry, ConversationLog, LearnedPatterns};

/// Owned form of the learning document, as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LearningDocument {
    #[serde(default)]
    pub conversations: ConversationLog,

    #[serde(default)]
    pub learned_patterns: LearnedPatterns,
}

#[derive(Serialize)]
struct LearningDocumentRef<'a> {
    conversations: &'a [ConversationEntry],
    learned_patterns: &'a LearnedPatterns,
}

/// Reads and writes the learning document at a fixed path.
#[derive(Debug, Clone)]
pub struct LearningFile {
    path: PathBuf,
    history_cap: usize,
}

impl LearningFile {
    /// `history_cap` bounds the conversations written on save and kept on load.
    pub fn new(path: impl Into<PathBuf>, history_cap: usize) -> Self {
        Self {
            path: path.into(),
            history_cap,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the document currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the document, reporting every failure.
    pub fn read(&self) -> Result<LearningDocument, PersistenceError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load conversations and learned patterns.
    ///
    /// A missing or unreadable document yields empty state; this never fails.
    pub fn load(&self) -> (ConversationLog, LearnedPatterns) {
        let mut doc = match self.read() {
            Ok(doc) => doc,
            Err(PersistenceError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No learning document at {}, starting fresh", self.path.display());
                return Default::default();
            }
            Err(e) => {
                warn!("Could not load learning data from {}: {}", self.path.display(), e);
                return Default::default();
            }
        };

        doc.conversations.retain_last(self.history_cap);
        let pruned = doc.learned_patterns.prune_unusable();
        if pruned > 0 {
            warn!("Dropped {} unusable learned patterns from {}", pruned, self.path.display());
        }

        info!(
            "Loaded {} previous conversations and {} learned patterns",
            doc.conversations.len(),
            doc.learned_patterns.len()
        );
        (doc.conversations, doc.learned_patterns)
    }

    /// Write the document, keeping only the most recent conversations.
    pub fn save(
        &self,
        conversations: &ConversationLog,
        patterns: &LearnedPatterns,
    ) -> Result<(), PersistenceError> {
        let doc = LearningDocumentRef {
            conversations: conversations.tail(self.history_cap),
            learned_patterns: patterns,
        };
        let json = serde_json::to_string_pretty(&doc)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;

        debug!(
            "Saved {} conversations and {} patterns to {}",
            doc.conversations.len(),
            patterns.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Delete the document. Returns `false` if there was nothing to delete.
    pub fn remove(&self) -> Result<bool, PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state(conversations: usize) -> (ConversationLog, LearnedPatterns) {
        let log = (0..conversations)
            .map(|i| ConversationEntry::new(&format!("Câu hỏi {}", i), format!("Trả lời {}", i), None))
            .collect();
        let mut patterns = LearnedPatterns::new();
        patterns.learn("tường chặn", "Có thể chặn");
        patterns.learn("nhảy qua", "Được");
        patterns.learn("tường chặn", "Có thể chặn");
        (log, patterns)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = LearningFile::new(dir.path().join("missing.json"), 100);

        let (log, patterns) = file.load();
        assert!(log.is_empty());
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learning.json");
        fs::write(&path, "{ not json").unwrap();
        let file = LearningFile::new(&path, 100);

        assert!(matches!(file.read(), Err(PersistenceError::Json(_))));
        let (log, patterns) = file.load();
        assert!(log.is_empty());
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_missing_keys_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learning.json");
        fs::write(&path, r#"{"learned_patterns": {"walls block": ["yes"]}}"#).unwrap();

        let (log, patterns) = LearningFile::new(&path, 100).load();
        assert!(log.is_empty());
        assert_eq!(patterns.get("walls block").unwrap(), ["yes"]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = LearningFile::new(dir.path().join("learning.json"), 100);
        let (log, patterns) = sample_state(7);

        file.save(&log, &patterns).unwrap();
        let (loaded_log, loaded_patterns) = file.load();

        assert_eq!(loaded_log, log);
        assert_eq!(loaded_patterns, patterns);
    }

    #[test]
    fn test_save_truncates_to_cap() {
        let dir = tempfile::tempdir().unwrap();
        let file = LearningFile::new(dir.path().join("learning.json"), 100);
        let (log, patterns) = sample_state(130);

        file.save(&log, &patterns).unwrap();
        let doc = file.read().unwrap();

        assert_eq!(doc.conversations.len(), 100);
        assert_eq!(doc.conversations.iter().next().unwrap().input, "câu hỏi 30");
        assert_eq!(doc.conversations.last().unwrap().input, "câu hỏi 129");
        assert_eq!(doc.conversations, log.tail(100).iter().cloned().collect::<ConversationLog>());
    }

    #[test]
    fn test_document_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learning.json");
        let file = LearningFile::new(&path, 100);
        let (log, patterns) = sample_state(1);

        file.save(&log, &patterns).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert!(value["conversations"].is_array());
        assert_eq!(value["conversations"][0]["input"], "câu hỏi 0");
        assert!(value["conversations"][0]["feedback"].is_null());
        assert_eq!(
            value["learned_patterns"]["tường chặn"],
            serde_json::json!(["Có thể chặn", "Có thể chặn"])
        );
        // non-ASCII is written as-is, with two-space indentation
        assert!(text.contains("tường chặn"));
        assert!(text.contains("\n  \"conversations\""));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = LearningFile::new(dir.path().join("nested/deeper/learning.json"), 100);
        let (log, patterns) = sample_state(2);

        file.save(&log, &patterns).unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // the target path is a directory, so writing it fails
        let file = LearningFile::new(dir.path(), 100);
        let (log, patterns) = sample_state(1);

        assert!(matches!(file.save(&log, &patterns), Err(PersistenceError::Io(_))));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let file = LearningFile::new(dir.path().join("learning.json"), 100);
        let (log, patterns) = sample_state(1);

        assert!(!file.remove().unwrap());
        file.save(&log, &patterns).unwrap();
        assert!(file.remove().unwrap());
        assert!(!file.exists());
    }
}
