//! Keyword cascade routing free text to a topic.

use quoridor_rules::{Category, KeywordSet};

/// What the keyword tier decided the question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Answer with a random fact from a category.
    Facts(Category),
    HowToWin,
    HowToStart,
}

/// Route normalized input through the keyword cascade.
///
/// The checks overlap on purpose and are evaluated in this exact order; the
/// first one that fires decides the topic:
///
/// 1. game keyword and rules keyword -> rules
/// 2. game keyword and strategy keyword -> strategies
/// 3. wall keyword -> wall rules
/// 4. movement keyword -> movement rules
/// 5. win keyword -> how to win
/// 6. start keyword -> how to start
pub fn classify(input: &str) -> Option<Topic> {
    if KeywordSet::Game.matches(input) {
        if KeywordSet::Rules.matches(input) {
            return Some(Topic::Facts(Category::QuoridorRules));
        } else if KeywordSet::Strategy.matches(input) {
            return Some(Topic::Facts(Category::Strategies));
        }
    }

    if KeywordSet::Wall.matches(input) {
        return Some(Topic::Facts(Category::WallRules));
    }

    if KeywordSet::Movement.matches(input) {
        return Some(Topic::Facts(Category::MovementRules));
    }

    if KeywordSet::Win.matches(input) {
        return Some(Topic::HowToWin);
    }

    if KeywordSet::Start.matches(input) {
        return Some(Topic::HowToStart);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_and_rules() {
        assert_eq!(
            classify("what are the rules of this game"),
            Some(Topic::Facts(Category::QuoridorRules))
        );
    }

    #[test]
    fn test_game_and_strategy() {
        assert_eq!(
            classify("best strategy for quoridor"),
            Some(Topic::Facts(Category::Strategies))
        );
    }

    #[test]
    fn test_game_without_subtopic_falls_through() {
        // game keyword alone does not decide; the wall check still runs
        assert_eq!(
            classify("quoridor wall placement"),
            Some(Topic::Facts(Category::WallRules))
        );
        assert_eq!(classify("quoridor"), None);
    }

    #[test]
    fn test_wall_checked_before_movement() {
        assert_eq!(
            classify("can i jump a wall"),
            Some(Topic::Facts(Category::WallRules))
        );
        assert_eq!(classify("can i jump"), Some(Topic::Facts(Category::MovementRules)));
    }

    #[test]
    fn test_win_without_game_keyword() {
        assert_eq!(classify("how to win"), Some(Topic::HowToWin));
    }

    #[test]
    fn test_game_and_win_is_strategy() {
        assert_eq!(
            classify("how to win the game"),
            Some(Topic::Facts(Category::Strategies))
        );
    }

    #[test]
    fn test_start() {
        assert_eq!(classify("how should i start"), Some(Topic::HowToStart));
        assert_eq!(classify("bắt đầu thế nào"), Some(Topic::HowToStart));
    }

    #[test]
    fn test_nothing_matches() {
        assert_eq!(classify("hello there"), None);
    }
}
