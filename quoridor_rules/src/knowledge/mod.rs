//! Knowledge Base module - the static facts the tutor answers from.
//!
//! The knowledge base consists of:
//! - **Categories**: ordered fact sentences per [`Category`]
//! - **Common questions**: an ordered question-substring -> answer table

mod builtin;
mod category;

pub use category::*;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a knowledge base from a document.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse knowledge document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Category '{0}' has no facts")]
    EmptyCategory(Category),

    #[error("Common question #{0} has an empty question or answer")]
    EmptyQuestion(usize),
}

/// A direct question with its canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonQuestion {
    /// Lower-cased substring looked for in the normalized input.
    pub question: String,
    pub answer: String,
}

impl CommonQuestion {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Shape of a TOML knowledge document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KnowledgeDocument {
    quoridor_rules: Vec<String>,
    strategies: Vec<String>,
    movement_rules: Vec<String>,
    wall_rules: Vec<String>,
    #[serde(default)]
    common_questions: Vec<CommonQuestion>,
}

/// Immutable domain knowledge, built once at start-up.
///
/// Facts are grouped by [`Category`]; every category holds at least one
/// sentence so a random pick from any of them always succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    facts: BTreeMap<Category, Vec<String>>,
    common_questions: Vec<CommonQuestion>,
}

impl KnowledgeBase {
    /// Build a knowledge base, checking that no category is empty.
    ///
    /// Questions are lower-cased and trimmed so they can be matched against
    /// normalized input.
    pub fn new(
        facts: impl IntoIterator<Item = (Category, Vec<String>)>,
        common_questions: Vec<CommonQuestion>,
    ) -> Result<Self, KnowledgeError> {
        let facts: BTreeMap<_, _> = facts.into_iter().collect();
        for category in Category::ALL {
            if facts.get(&category).map_or(true, |f| f.is_empty()) {
                return Err(KnowledgeError::EmptyCategory(category));
            }
        }

        let mut questions = Vec::with_capacity(common_questions.len());
        for (index, entry) in common_questions.into_iter().enumerate() {
            let question = entry.question.trim().to_lowercase();
            if question.is_empty() || entry.answer.trim().is_empty() {
                return Err(KnowledgeError::EmptyQuestion(index));
            }
            questions.push(CommonQuestion::new(question, entry.answer));
        }

        Ok(Self {
            facts,
            common_questions: questions,
        })
    }

    /// The knowledge base shipped with the tutor.
    pub fn builtin() -> Self {
        Self {
            facts: Category::ALL
                .into_iter()
                .map(|c| (c, builtin::facts(c).iter().map(|s| s.to_string()).collect()))
                .collect(),
            common_questions: builtin::COMMON_QUESTIONS
                .iter()
                .map(|(q, a)| CommonQuestion::new(*q, *a))
                .collect(),
        }
    }

    /// Parse a knowledge base from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, KnowledgeError> {
        let doc: KnowledgeDocument = toml::from_str(text)?;
        Self::new(
            [
                (Category::QuoridorRules, doc.quoridor_rules),
                (Category::Strategies, doc.strategies),
                (Category::MovementRules, doc.movement_rules),
                (Category::WallRules, doc.wall_rules),
            ],
            doc.common_questions,
        )
    }

    /// Read and parse a TOML knowledge document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Get the facts of a category.
    pub fn category(&self, category: Category) -> &[String] {
        self.facts.get(&category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Get the facts of a category by its stable name.
    pub fn category_by_name(&self, name: &str) -> Option<&[String]> {
        Category::from_name(name).map(|c| self.category(c))
    }

    /// The direct question table, in definition order.
    pub fn common_questions(&self) -> &[CommonQuestion] {
        &self.common_questions
    }

    /// Find the answer of the first question contained in `normalized_input`.
    pub fn answer_for(&self, normalized_input: &str) -> Option<&str> {
        self.common_questions
            .iter()
            .find(|q| normalized_input.contains(q.question.as_str()))
            .map(|q| q.answer.as_str())
    }

    /// Number of top-level groups: every fact category plus the question table.
    pub fn category_count(&self) -> usize {
        self.facts.len() + 1
    }

    /// Iterate categories with their facts, in definition order.
    pub fn iter_categories(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.facts.iter().map(|(c, f)| (*c, f.as_slice()))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Serialized as one object: each category name maps to its facts, followed
/// by `common_questions` as a question -> answer object.
impl Serialize for KnowledgeBase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.category_count()))?;
        for (category, facts) in self.iter_categories() {
            map.serialize_entry(category.name(), facts)?;
        }
        map.serialize_entry("common_questions", &QuestionTable(&self.common_questions))?;
        map.end()
    }
}

struct QuestionTable<'a>(&'a [CommonQuestion]);

impl Serialize for QuestionTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.question, &entry.answer)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_DOC: &str = r#"
quoridor_rules = ["Rule one"]
strategies = ["Go forward"]
movement_rules = ["Move one square"]
wall_rules = ["Walls are two squares long"]

[[common_questions]]
question = "  What Is Quoridor "
answer = "A board game."
"#;

    #[test]
    fn test_builtin_has_every_category() {
        let kb = KnowledgeBase::builtin();
        for category in Category::ALL {
            assert!(!kb.category(category).is_empty(), "{} is empty", category);
        }
        assert_eq!(kb.category(Category::Strategies).len(), 6);
        assert_eq!(kb.common_questions().len(), 7);
        assert_eq!(kb.category_count(), 5);
    }

    #[test]
    fn test_category_by_name() {
        let kb = KnowledgeBase::builtin();
        let walls = kb.category_by_name("wall_rules").unwrap();
        assert_eq!(walls[0], "Tường có thể đặt ngang hoặc dọc giữa các ô");
        assert!(kb.category_by_name("learned_patterns").is_none());
    }

    #[test]
    fn test_answer_for_first_match_wins() {
        let kb = KnowledgeBase::builtin();

        // "luật chơi" comes before "thắng" in the table
        let answer = kb.answer_for("luật chơi để thắng là gì").unwrap();
        assert!(answer.starts_with("Mỗi lượt bạn có thể di chuyển"));

        assert!(kb.answer_for("xin chào").is_none());
    }

    #[test]
    fn test_from_toml_normalizes_questions() {
        let kb = KnowledgeBase::from_toml_str(SMALL_DOC).unwrap();
        assert_eq!(kb.common_questions()[0].question, "what is quoridor");
        assert_eq!(kb.answer_for("so, what is quoridor?"), Some("A board game."));
        assert_eq!(kb.category(Category::MovementRules), ["Move one square"]);
    }

    #[test]
    fn test_from_toml_rejects_empty_category() {
        let doc = SMALL_DOC.replace(r#"strategies = ["Go forward"]"#, "strategies = []");
        let err = KnowledgeBase::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, KnowledgeError::EmptyCategory(Category::Strategies)));
    }

    #[test]
    fn test_from_toml_rejects_unknown_category() {
        let doc = format!("{}\nopenings = [\"e2\"]\n", SMALL_DOC.split("[[").next().unwrap());
        assert!(matches!(
            KnowledgeBase::from_toml_str(&doc),
            Err(KnowledgeError::Parse(_))
        ));
    }

    #[test]
    fn test_from_toml_rejects_blank_question() {
        let doc = SMALL_DOC.replace("  What Is Quoridor ", "   ");
        assert!(matches!(
            KnowledgeBase::from_toml_str(&doc),
            Err(KnowledgeError::EmptyQuestion(0))
        ));
    }

    #[test]
    fn test_new_requires_all_categories() {
        let err = KnowledgeBase::new(
            [(Category::QuoridorRules, vec!["Rule".to_string()])],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeError::EmptyCategory(Category::Strategies)));
    }
}
