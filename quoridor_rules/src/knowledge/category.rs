//! Category definitions - the closed set of fact groups in the knowledge base.

use serde::{Deserialize, Serialize};

/// A named group of facts in the knowledge base.
///
/// The set is closed: every knowledge base carries all four categories, and
/// each one holds at least one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// General rules of play.
    QuoridorRules,
    /// Strategy advice.
    Strategies,
    /// How pawns move and jump.
    MovementRules,
    /// How walls are placed.
    WallRules,
}

impl Category {
    /// Every category, in definition order.
    pub const ALL: [Category; 4] = [
        Category::QuoridorRules,
        Category::Strategies,
        Category::MovementRules,
        Category::WallRules,
    ];

    /// The stable name used in exported and configured documents.
    pub fn name(&self) -> &'static str {
        match self {
            Category::QuoridorRules => "quoridor_rules",
            Category::Strategies => "strategies",
            Category::MovementRules => "movement_rules",
            Category::WallRules => "wall_rules",
        }
    }

    /// Look a category up by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
