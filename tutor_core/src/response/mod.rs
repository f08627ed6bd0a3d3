//! Response Engine - picks an answer for free-text input.
//!
//! Tiers are tried in strict priority order; the first that produces an
//! answer wins:
//! 1. **Common question**: a known question is a substring of the input
//! 2. **Learned pattern**: every token of a learned key occurs in the input
//! 3. **Keyword**: the keyword cascade routes the input to a topic
//! 4. **Fallback**: a clarification reply
//!
//! Responding never mutates learned state; learning happens afterwards in
//! [`crate::LearningCoordinator`].

mod heuristics;

pub use heuristics::*;

use quoridor_rules::{KnowledgeBase, FALLBACK_REPLIES, HOW_TO_START, HOW_TO_WIN};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::choice::{ChoiceSource, ThreadChoice};
use crate::memory::LearnedPatterns;

/// The tier that produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    CommonQuestion,
    LearnedPattern,
    Keyword,
    Fallback,
}

impl Tier {
    /// Fixed confidence reported for answers from this tier.
    pub fn confidence(&self) -> f64 {
        match self {
            Tier::CommonQuestion => 0.9,
            Tier::LearnedPattern => 0.8,
            Tier::Keyword => 0.7,
            Tier::Fallback => 0.3,
        }
    }
}

/// An answer and the tier it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub tier: Tier,
}

impl Answer {
    fn new(text: impl Into<String>, tier: Tier) -> Self {
        Self {
            text: text.into(),
            tier,
        }
    }

    pub fn confidence(&self) -> f64 {
        self.tier.confidence()
    }
}

/// Lower-case and trim input before matching.
pub fn normalize(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}

/// Selects answers from the knowledge base and learned patterns.
pub struct ResponseEngine {
    knowledge: Arc<KnowledgeBase>,
    choice: Arc<dyn ChoiceSource>,
    fallback_pool: Vec<String>,
}

impl ResponseEngine {
    /// Create an engine over a knowledge base with the given random source.
    pub fn new(knowledge: Arc<KnowledgeBase>, choice: Arc<dyn ChoiceSource>) -> Self {
        Self {
            knowledge,
            choice,
            fallback_pool: FALLBACK_REPLIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Engine over the built-in knowledge base with thread-local randomness.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()), Arc::new(ThreadChoice))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Pick an answer for `input`. Always succeeds.
    pub fn respond(&self, input: &str, patterns: &LearnedPatterns) -> Answer {
        let input = normalize(input);

        if let Some(answer) = self.knowledge.answer_for(&input) {
            return Answer::new(answer, Tier::CommonQuestion);
        }

        if let Some((key, responses)) = patterns.find_match(&input) {
            if let Some(response) = self.choice.choose(responses) {
                debug!("Input matched learned pattern '{}'", key);
                return Answer::new(response, Tier::LearnedPattern);
            }
        }

        if let Some(text) = classify(&input).and_then(|topic| self.topic_answer(topic)) {
            return Answer::new(text, Tier::Keyword);
        }

        let text = self.choice.choose(&self.fallback_pool).unwrap_or_default();
        Answer::new(text, Tier::Fallback)
    }

    fn topic_answer(&self, topic: Topic) -> Option<&str> {
        match topic {
            Topic::Facts(category) => self.choice.choose(self.knowledge.category(category)),
            Topic::HowToWin => Some(HOW_TO_WIN),
            Topic::HowToStart => Some(HOW_TO_START),
        }
    }
}
