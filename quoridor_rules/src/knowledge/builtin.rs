//! The knowledge base shipped with the tutor.

use super::Category;

pub(crate) const QUORIDOR_RULES: &[&str] = &[
    "Quoridor là game cờ chiến thuật cho 2-4 người chơi trên bàn cờ 9x9",
    "Mục tiêu là đưa quân cờ của bạn về đích ở phía đối diện",
    "Mỗi người chơi có 10 bức tường để chặn đối thủ",
    "Tường phải đảm bảo còn ít nhất 1 đường đi cho tất cả người chơi",
    "Mỗi lượt có thể di chuyển quân cờ hoặc đặt 1 bức tường",
];

pub(crate) const STRATEGIES: &[&str] = &[
    "Ưu tiên tiến thẳng về phía trước khi có thể",
    "Sử dụng tường để chặn khi đối thủ gần đích",
    "Không lãng phí tường quá sớm trong game",
    "Luôn giữ đường thoát cho chính mình",
    "Quan sát vị trí đối thủ để đặt tường hiệu quả",
    "Dùng tường tạo mê cung để làm chậm đối thủ",
];

pub(crate) const MOVEMENT_RULES: &[&str] = &[
    "Quân cờ có thể di chuyển 1 ô theo 4 hướng: lên, xuống, trái, phải",
    "Không thể đi qua tường hoặc ra ngoài bàn cờ",
    "Nếu có quân đối thủ ở ô kế bên, có thể nhảy qua",
    "Khi nhảy qua đối thủ bị chặn bởi tường, có thể đi chéo",
];

pub(crate) const WALL_RULES: &[&str] = &[
    "Tường có thể đặt ngang hoặc dọc giữa các ô",
    "Mỗi tường chiếm 2 khoảng trống liên tiếp",
    "Không thể đặt tường chồng lên tường khác",
    "Phải đảm bảo tất cả người chơi vẫn có đường đi về đích",
];

/// Question substring -> canonical answer, matched in this order.
pub(crate) const COMMON_QUESTIONS: &[(&str, &str)] = &[
    (
        "quoridor là gì",
        "Quoridor là game board strategy nổi tiếng cho 2-4 người chơi. Bạn cần đưa quân cờ qua bên kia bàn cờ trong khi sử dụng tường để chặn đối thủ.",
    ),
    (
        "luật chơi",
        "Mỗi lượt bạn có thể di chuyển quân cờ 1 ô hoặc đặt 1 bức tường. Mục tiêu là về đích trước đối thủ.",
    ),
    (
        "chiến thuật",
        "Cân bằng giữa tiến về phía trước và sử dụng tường để chặn đối thủ. Đừng dùng hết tường quá sớm!",
    ),
    (
        "tường",
        "Bạn có 10 bức tường để chặn đối thủ, nhưng phải đảm bảo họ vẫn có đường đi về đích.",
    ),
    (
        "di chuyển",
        "Quân cờ di chuyển 1 ô mỗi lượt. Có thể nhảy qua đối thủ nếu không bị tường chặn.",
    ),
    ("thắng", "Người đầu tiên đưa quân cờ về hàng đối diện sẽ thắng."),
    (
        "thua",
        "Bạn thua nếu đối thủ về đích trước hoặc bạn không còn nước đi hợp lệ.",
    ),
];

/// Built-in sentences for a category.
pub(crate) fn facts(category: Category) -> &'static [&'static str] {
    match category {
        Category::QuoridorRules => QUORIDOR_RULES,
        Category::Strategies => STRATEGIES,
        Category::MovementRules => MOVEMENT_RULES,
        Category::WallRules => WALL_RULES,
    }
}
