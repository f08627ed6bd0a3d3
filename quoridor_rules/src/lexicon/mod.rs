//! Keyword lexicon: substring sets that route a question to a topic, plus the
//! fixed sentences used when no fact table applies.

/// Keyword groups recognised in normalized (lower-cased) input.
///
/// Matching is plain substring containment, not word-boundary matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordSet {
    /// Mentions of the game itself.
    Game,
    /// Asking about rules or how to play.
    Rules,
    /// Asking about strategy or winning, in the context of the game.
    Strategy,
    Wall,
    Movement,
    /// Asking how to win.
    Win,
    /// Asking how to start.
    Start,
}

impl KeywordSet {
    /// The keywords of this set.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            KeywordSet::Game => &["quoridor", "game", "trò chơi", "board"],
            KeywordSet::Rules => &["luật", "rule", "chơi", "cách"],
            KeywordSet::Strategy => &["chiến thuật", "strategy", "thắng", "win"],
            KeywordSet::Wall => &["tường", "wall", "chặn", "block"],
            KeywordSet::Movement => &["di chuyển", "move", "đi", "nhảy", "jump"],
            KeywordSet::Win => &["thắng", "win", "chiến thắng"],
            KeywordSet::Start => &["bắt đầu", "start", "khởi đầu"],
        }
    }

    /// Check whether any keyword of the set occurs in `input`.
    pub fn matches(&self, input: &str) -> bool {
        self.keywords().iter().any(|k| input.contains(k))
    }
}

/// Answer given to "how do I win" questions.
pub const HOW_TO_WIN: &str = "Để thắng Quoridor, bạn cần đưa quân cờ về hàng đối diện trước đối thủ. Cân bằng giữa tiến thẳng và dùng tường chặn!";

/// Answer given to "how do I start" questions.
pub const HOW_TO_START: &str = "Để bắt đầu chơi Quoridor hiệu quả, hãy tiến thẳng về phía trước và quan sát nước đi của đối thủ. Đừng dùng tường quá sớm!";

/// Clarification replies for input nothing else understood.
pub const FALLBACK_REPLIES: &[&str] = &[
    "Tôi chưa hiểu câu hỏi này. Bạn có thể hỏi về luật chơi Quoridor, chiến thuật, hoặc cách di chuyển không?",
    "Hãy hỏi tôi về Quoridor: luật chơi, chiến thuật, tường, hoặc cách di chuyển nhé!",
    "Tôi đang học thêm! Bạn có thể hỏi về game Quoridor cụ thể hơn không?",
    "Quoridor có nhiều điều thú vị! Bạn muốn biết về luật chơi hay chiến thuật?",
];

/// Spoken when the answer itself could not be rendered to audio.
pub const RENDER_APOLOGY: &str = "Xin lỗi, có lỗi xảy ra.";
