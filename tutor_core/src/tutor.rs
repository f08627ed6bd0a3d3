//! The tutor facade - the five operations offered to a transport layer.
//!
//! | operation | effect |
//! |-----------|--------|
//! | `chat`    | answer, then learn from the exchange |
//! | `train`   | learn a given exchange, then save |
//! | `status`  | report counters |
//! | `reset`   | forget everything and delete the learning file |
//! | `export`  | snapshot knowledge and recent conversations |
//!
//! The tutor is not internally synchronized: mutating operations take
//! `&mut self`, so a multi-threaded host wraps it in a [`SharedTutor`].

use quoridor_rules::{KnowledgeBase, RENDER_APOLOGY};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::audio::AudioRenderer;
use crate::choice::{ChoiceSource, ThreadChoice};
use crate::config::TutorConfig;
use crate::error::{Result, TutorError};
use crate::learning::LearningCoordinator;
use crate::memory::{timestamp_now, ConversationEntry, LearnedPatterns};
use crate::response::{ResponseEngine, Tier};

/// Value of the `source` field of every chat reply.
pub const CHAT_SOURCE: &str = "local_python_ai";

/// A tutor behind a mutex, for hosts that serve requests from several threads.
pub type SharedTutor = Arc<Mutex<Tutor>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub confidence: f64,
    pub source: &'static str,
    pub timestamp: String,
    /// Tier that produced the response; not part of the wire format.
    #[serde(skip)]
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainReply {
    pub status: &'static str,
    pub message: &'static str,
    pub conversations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_conversations: usize,
    pub learned_patterns: usize,
    pub knowledge_categories: usize,
    pub last_conversation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReply {
    pub status: &'static str,
    pub model: String,
    pub uptime: String,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetReply {
    pub status: &'static str,
    pub message: &'static str,
}

/// Knowledge base plus learned patterns, serialized as one object.
///
/// `learned_patterns` appears once the store is established, and stays
/// (possibly empty) after a reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeSnapshot {
    #[serde(flatten)]
    pub knowledge: KnowledgeBase,

    #[serde(skip_serializing_if = "not_established")]
    pub learned_patterns: LearnedPatterns,
}

impl KnowledgeSnapshot {
    /// Number of top-level groups in the snapshot.
    pub fn category_count(&self) -> usize {
        self.knowledge.category_count() + usize::from(self.learned_patterns.is_established())
    }
}

fn not_established(patterns: &LearnedPatterns) -> bool {
    !patterns.is_established()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReply {
    pub knowledge_base: KnowledgeSnapshot,
    pub conversation_history: Vec<ConversationEntry>,
    pub export_time: String,
}

/// A chat reply together with its rendered audio.
#[derive(Debug, Clone, PartialEq)]
pub struct SpokenReply {
    pub reply: ChatReply,
    pub audio: Vec<u8>,
}

pub struct Tutor {
    config: TutorConfig,
    engine: ResponseEngine,
    learner: LearningCoordinator,
}

impl Tutor {
    /// Build a tutor from config: load the knowledge base (configured file
    /// or built-in) and whatever the learning file holds.
    pub fn open(config: TutorConfig) -> Result<Self> {
        let knowledge = match &config.knowledge_file {
            Some(path) => KnowledgeBase::load(path)?,
            None => KnowledgeBase::builtin(),
        };
        Self::with_parts(config, Arc::new(knowledge), Arc::new(ThreadChoice))
    }

    /// Build a tutor from explicit parts.
    pub fn with_parts(
        config: TutorConfig,
        knowledge: Arc<KnowledgeBase>,
        choice: Arc<dyn ChoiceSource>,
    ) -> Result<Self> {
        config.validate()?;
        let learner = LearningCoordinator::load(&config);
        info!(
            "Tutor '{}' ready with {} conversations and {} learned patterns",
            config.model_name,
            learner.conversations().len(),
            learner.patterns().len()
        );

        Ok(Self {
            engine: ResponseEngine::new(knowledge, choice),
            learner,
            config,
        })
    }

    pub fn into_shared(self) -> SharedTutor {
        Arc::new(Mutex::new(self))
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    pub fn learner(&self) -> &LearningCoordinator {
        &self.learner
    }

    /// Answer a message and learn from the exchange.
    pub fn chat(&mut self, message: &str) -> Result<ChatReply> {
        if message.is_empty() {
            return Err(TutorError::InvalidInput("No message provided".into()));
        }

        let answer = self.engine.respond(message, self.learner.patterns());
        self.learner.record(message, &answer.text, None);

        Ok(ChatReply {
            confidence: answer.confidence(),
            response: answer.text,
            source: CHAT_SOURCE,
            timestamp: timestamp_now(),
            tier: answer.tier,
        })
    }

    /// Learn a given exchange and save right away.
    pub fn train(
        &mut self,
        input: &str,
        response: &str,
        feedback: Option<String>,
    ) -> Result<TrainReply> {
        if input.is_empty() || response.is_empty() {
            return Err(TutorError::InvalidInput("Input and response required".into()));
        }

        self.learner.train(input, response, feedback);

        Ok(TrainReply {
            status: "success",
            message: "Model trained successfully",
            conversations: self.learner.conversations().len(),
        })
    }

    /// Counters describing the current state.
    pub fn stats(&self) -> Stats {
        let conversations = self.learner.conversations();
        Stats {
            total_conversations: conversations.len(),
            learned_patterns: self.learner.patterns().len(),
            knowledge_categories: self.engine.knowledge().category_count()
                + usize::from(self.learner.patterns().is_established()),
            last_conversation: conversations.last().map(|c| c.timestamp.clone()),
        }
    }

    pub fn status(&self) -> StatusReply {
        StatusReply {
            status: "running",
            model: self.config.model_name.clone(),
            uptime: timestamp_now(),
            stats: self.stats(),
        }
    }

    /// Forget every conversation and learned pattern. Irreversible.
    pub fn reset(&mut self) -> ResetReply {
        self.learner.reset();
        info!("Tutor memory reset");
        ResetReply {
            status: "success",
            message: "AI memory reset successfully",
        }
    }

    /// Snapshot of the knowledge base, learned patterns and recent conversations.
    pub fn export(&self) -> ExportReply {
        ExportReply {
            knowledge_base: KnowledgeSnapshot {
                knowledge: self.engine.knowledge().clone(),
                learned_patterns: self.learner.patterns().clone(),
            },
            conversation_history: self
                .learner
                .conversations()
                .tail(self.config.exported_history)
                .to_vec(),
            export_time: timestamp_now(),
        }
    }

    /// Chat, then render the answer to audio.
    ///
    /// If the answer cannot be rendered, a short apology is rendered instead.
    pub fn speak(&mut self, message: &str, renderer: &dyn AudioRenderer) -> Result<SpokenReply> {
        let reply = self.chat(message)?;
        let audio = match renderer.render(&reply.response) {
            Ok(audio) => audio,
            Err(e) => {
                warn!("Rendering answer failed, speaking apology instead: {}", e);
                renderer.render(RENDER_APOLOGY)?
            }
        };
        Ok(SpokenReply { reply, audio })
    }
}
