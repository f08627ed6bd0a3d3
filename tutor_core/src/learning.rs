//! Learning Coordinator - records exchanges and grows the learned patterns.
//!
//! Every recorded exchange:
//! 1. is appended to the conversation log (input lower-cased)
//! 2. yields a pattern key from its long tokens, if any survive
//! 3. appends the response under that key
//! 4. triggers a save whenever the log length hits the autosave cadence
//!
//! Saves are best-effort: a failure is logged and the in-memory update stands.

use tracing::{debug, info, warn};

use crate::config::TutorConfig;
use crate::error::PersistenceError;
use crate::memory::{pattern_key, ConversationEntry, ConversationLog, LearnedPatterns};
use crate::persistence::LearningFile;

pub struct LearningCoordinator {
    conversations: ConversationLog,
    patterns: LearnedPatterns,
    file: LearningFile,
    autosave_every: usize,
    min_keyword_len: usize,
    pattern_keywords: usize,
}

impl LearningCoordinator {
    /// Start with empty state, persisting to the configured learning file.
    pub fn new(config: &TutorConfig) -> Self {
        Self {
            conversations: ConversationLog::new(),
            patterns: LearnedPatterns::new(),
            file: LearningFile::new(&config.learning_file, config.persisted_history),
            autosave_every: config.autosave_every.max(1),
            min_keyword_len: config.min_keyword_len,
            pattern_keywords: config.pattern_keywords,
        }
    }

    /// Start from whatever the configured learning file holds.
    pub fn load(config: &TutorConfig) -> Self {
        let mut coordinator = Self::new(config);
        let (conversations, patterns) = coordinator.file.load();
        coordinator.conversations = conversations;
        coordinator.patterns = patterns;
        coordinator
    }

    pub fn conversations(&self) -> &ConversationLog {
        &self.conversations
    }

    pub fn patterns(&self) -> &LearnedPatterns {
        &self.patterns
    }

    pub fn file(&self) -> &LearningFile {
        &self.file
    }

    /// Record an exchange and learn from it.
    ///
    /// Returns the pattern key the response was stored under, if one was
    /// derived.
    pub fn record(&mut self, input: &str, response: &str, feedback: Option<String>) -> Option<String> {
        self.conversations
            .push(ConversationEntry::new(input, response, feedback));

        let key = pattern_key(input, self.min_keyword_len, self.pattern_keywords);
        if let Some(key) = &key {
            debug!("Learned response under pattern '{}'", key);
            self.patterns.learn(key.clone(), response);
        }

        if self.conversations.len() % self.autosave_every == 0 {
            self.save_best_effort();
        }

        key
    }

    /// Record an exchange, then save immediately regardless of the cadence.
    pub fn train(&mut self, input: &str, response: &str, feedback: Option<String>) -> Option<String> {
        let key = self.record(input, response, feedback);
        self.save_best_effort();
        key
    }

    /// Save the current state, reporting failure.
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.file.save(&self.conversations, &self.patterns)
    }

    fn save_best_effort(&self) {
        if let Err(e) = self.save() {
            warn!(
                "Could not save learning data to {}: {}",
                self.file.path().display(),
                e
            );
        }
    }

    /// Forget every conversation and pattern and delete the learning file.
    pub fn reset(&mut self) {
        self.conversations.clear();
        self.patterns.clear();

        match self.file.remove() {
            Ok(true) => info!("Deleted learning file {}", self.file.path().display()),
            Ok(false) => {}
            Err(e) => warn!(
                "Could not delete learning file {}: {}",
                self.file.path().display(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_in(dir: &Path) -> TutorConfig {
        TutorConfig::default().with_learning_file(dir.join("learning.json"))
    }

    #[test]
    fn test_record_appends_and_learns() {
        let dir = tempfile::tempdir().unwrap();
        let mut learner = LearningCoordinator::new(&config_in(dir.path()));

        let key = learner.record("Walls Block The PAWN", "Yes they do", Some("good".into()));

        assert_eq!(key.as_deref(), Some("walls block pawn"));
        let entry = learner.conversations().last().unwrap();
        assert_eq!(entry.input, "walls block the pawn");
        assert_eq!(entry.feedback.as_deref(), Some("good"));
        assert_eq!(learner.patterns().get("walls block pawn").unwrap(), ["Yes they do"]);
    }

    #[test]
    fn test_short_input_learns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut learner = LearningCoordinator::new(&config_in(dir.path()));

        assert_eq!(learner.record("hi a b", "hello", None), None);
        assert_eq!(learner.conversations().len(), 1);
        assert!(learner.patterns().is_empty());
    }

    #[test]
    fn test_duplicate_responses_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let mut learner = LearningCoordinator::new(&config_in(dir.path()));

        learner.record("jump over pawn", "Yes", None);
        learner.record("JUMP over pawn", "Yes", None);

        assert_eq!(learner.patterns().len(), 1);
        assert_eq!(learner.patterns().get("jump over pawn").unwrap(), ["Yes", "Yes"]);
    }

    #[test]
    fn test_autosave_on_cadence() {
        let dir = tempfile::tempdir().unwrap();
        let mut learner = LearningCoordinator::new(&config_in(dir.path()));

        for i in 0..9 {
            learner.record(&format!("question number {}", i), "answer", None);
        }
        assert!(!learner.file().exists());

        learner.record("question number 9", "answer", None);
        let doc = learner.file().read().unwrap();
        assert_eq!(doc.conversations.len(), 10);
        assert_eq!(doc.conversations.last().unwrap().input, "question number 9");
    }

    #[test]
    fn test_train_saves_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut learner = LearningCoordinator::new(&config_in(dir.path()));

        learner.train("ai học nhanh", "Tốt!", None);

        let doc = learner.file().read().unwrap();
        assert_eq!(doc.conversations.len(), 1);
        assert_eq!(doc.learned_patterns.get("học nhanh").unwrap(), ["Tốt!"]);
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be written as a file
        let config = TutorConfig::default().with_learning_file(dir.path());
        let mut learner = LearningCoordinator::new(&config);

        learner.train("walls block pawns", "Yes", None);

        assert_eq!(learner.conversations().len(), 1);
        assert_eq!(learner.patterns().len(), 1);
        assert!(learner.save().is_err());
    }

    #[test]
    fn test_load_restores_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        {
            let mut learner = LearningCoordinator::new(&config);
            learner.train("walls block pawns", "Yes", None);
        }

        let learner = LearningCoordinator::load(&config);
        assert_eq!(learner.conversations().len(), 1);
        assert_eq!(learner.patterns().get("walls block pawns").unwrap(), ["Yes"]);
    }

    #[test]
    fn test_reset_clears_and_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let mut learner = LearningCoordinator::new(&config_in(dir.path()));
        learner.train("walls block pawns", "Yes", None);
        assert!(learner.file().exists());

        learner.reset();

        assert!(learner.conversations().is_empty());
        assert!(learner.patterns().is_empty());
        assert!(!learner.file().exists());

        // resetting again with no file is fine
        learner.reset();
    }
}
