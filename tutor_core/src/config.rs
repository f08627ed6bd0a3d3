//! Tutor configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Where learned patterns and recent conversations are persisted.
    pub learning_file: PathBuf,

    /// Optional TOML knowledge base replacing the built-in one.
    pub knowledge_file: Option<PathBuf>,

    /// Model name reported by `status`.
    pub model_name: String,

    /// Save automatically whenever the conversation count is a multiple of this.
    pub autosave_every: usize,

    /// Most recent conversations kept in the learning document.
    pub persisted_history: usize,

    /// Most recent conversations included in an export.
    pub exported_history: usize,

    /// Tokens must be strictly longer than this (in UTF-8 bytes) to become keywords.
    pub min_keyword_len: usize,

    /// Maximum number of keywords joined into a pattern key.
    pub pattern_keywords: usize,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            learning_file: PathBuf::from("ai_learning_data.json"),
            knowledge_file: None,
            model_name: "QuoridorAI v1.0".to_string(),
            autosave_every: 10,
            persisted_history: 100,
            exported_history: 50,
            min_keyword_len: 3,
            pattern_keywords: 3,
        }
    }
}

impl TutorConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: TutorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Use a different learning document.
    pub fn with_learning_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.learning_file = path.into();
        self
    }

    /// Reject values that would make the tutor misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autosave_every == 0 {
            return Err(ConfigError::Invalid("autosave_every must be at least 1".into()));
        }
        if self.persisted_history == 0 {
            return Err(ConfigError::Invalid(
                "persisted_history must be at least 1".into(),
            ));
        }
        if self.pattern_keywords == 0 {
            return Err(ConfigError::Invalid(
                "pattern_keywords must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
