//! 遊戲常量定義

// ============================================================================
// 牌組常量
// ============================================================================

pub const DECK_COUNT: usize = 4;            // 合併的牌副數
pub const STANDARD_CARDS_PER_DECK: usize = 52;  // 每副常規牌（4 花色 × 13 點數）
pub const JOKERS_PER_DECK: usize = 2;       // 每副大小王各一
pub const CARDS_PER_DECK: usize = STANDARD_CARDS_PER_DECK + JOKERS_PER_DECK;  // 54
pub const TOTAL_CARDS: usize = DECK_COUNT * CARDS_PER_DECK;  // 216

// ============================================================================
// 玩家常量
// ============================================================================

pub const PLAYER_COUNT: usize = 6;          // 固定六人
pub const CARDS_PER_PLAYER: usize = TOTAL_CARDS / PLAYER_COUNT;  // 36

/// 全 AI 對局的回合上限（防止外部錯誤導致無限循環）
pub const MAX_TURNS: usize = 10_000;

// ============================================================================
// 計分常量
// ============================================================================

/// 名次 → 分數變化（0 為頭名）
pub const RANK_SCORES: [i32; PLAYER_COUNT] = [2, 1, 0, 0, -1, -2];
