//! 搜索引擎
//!
//! 固定深度 Minimax + Alpha-Beta 剪枝。剪枝不改变选出的走法，
//! 只减少访问的节点数。
//!
//! 搜索对调用方的 [`GameState`] 只读：模拟在内部克隆的棋盘上进行，
//! 克隆只存在于搜索调用栈内，搜索结束即丢弃。

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use chess_core::{Board, Color, GameState, Move, MoveGenerator};

use crate::evaluate::Evaluator;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：不搜索，均匀随机选一个走法
    Easy,
    /// 中等：depth=2
    Medium,
    /// 困难：depth=3
    Hard,
}

impl Difficulty {
    /// 对应的搜索深度
    pub fn depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub depth: u8,
    /// AI 执的一方，评估以这一方为正
    pub side: Color,
}

impl AiConfig {
    /// 从难度创建，AI 默认执黑
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::with_side(difficulty, Color::Black)
    }

    /// 从难度和执子方创建
    pub fn with_side(difficulty: Difficulty, side: Color) -> Self {
        Self {
            difficulty,
            depth: difficulty.depth(),
            side,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎（随机数种子取自系统熵）
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_entropy(),
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 创建带固定种子的引擎，对局可复现
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            nodes_searched: 0,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 搜索最佳走法
    ///
    /// 按行优先顺序枚举己方所有几何合法走法。无子可动返回 None。
    /// Easy 难度均匀随机选择；其余难度做固定深度 Minimax，分数
    /// 并列时保留先枚举到的走法，因此对固定局面结果是确定的。
    pub fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        self.nodes_searched = 0;

        let moves = MoveGenerator::generate_pseudo_legal(&state.board, self.config.side);
        if moves.is_empty() {
            return None;
        }

        // Easy：不搜索
        if self.config.difficulty == Difficulty::Easy {
            return moves.choose(&mut self.rng).copied();
        }

        let mut best_move = moves[0];
        let mut best_score = i32::MIN;

        for &mv in &moves {
            // 模拟走法：只克隆棋盘做简化执行，换边由 maximizing 标志表达
            let mut next = state.board.clone();
            next.move_piece(mv.from, mv.to);

            // 每个候选都用全窗口搜索，根节点的值与不剪枝完全一致
            let score = self.minimax(&next, self.config.depth - 1, false, i32::MIN, i32::MAX);

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        debug!(
            nodes = self.nodes_searched,
            score = best_score,
            candidates = moves.len(),
            "minimax search finished"
        );

        Some(best_move)
    }

    /// Minimax 递归
    ///
    /// `maximizing` 为 true 时轮到 AI 一方。深度耗尽返回静态子力
    /// 评估；无子可动时同样退化为静态评估，避免 ±∞ 初始值污染
    /// 上层的比较。
    fn minimax(&mut self, board: &Board, depth: u8, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return Evaluator::material_balance(board, self.config.side);
        }

        let to_move = if maximizing {
            self.config.side
        } else {
            self.config.side.opponent()
        };
        let moves = MoveGenerator::generate_pseudo_legal(board, to_move);
        if moves.is_empty() {
            return Evaluator::material_balance(board, self.config.side);
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let mut next = board.clone();
                next.move_piece(mv.from, mv.to);
                let score = self.minimax(&next, depth - 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // Beta 剪枝
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let mut next = board.clone();
                next.move_piece(mv.from, mv.to);
                let score = self.minimax(&next, depth - 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // Alpha 剪枝
                }
            }
            best
        }
    }

    /// 获取上次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Fen, Position};

    #[test]
    fn test_difficulty_depth() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 2);
        assert_eq!(Difficulty::Hard.depth(), 3);
    }

    #[test]
    fn test_config_defaults_to_black() {
        let config = AiConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(config.side, Color::Black);
        assert_eq!(config.depth, 3);

        let config = AiConfig::with_side(Difficulty::Medium, Color::White);
        assert_eq!(config.side, Color::White);
    }

    #[test]
    fn test_no_moves_returns_none() {
        // 黑方没有任何棋子，AI 返回空结果而不是报错
        let state = Fen::parse("8/8/8/8/8/8/8/4K3 w").unwrap();

        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);
        assert!(engine.choose_move(&state).is_none());

        let mut engine = AiEngine::from_difficulty(Difficulty::Easy);
        assert!(engine.choose_move(&state).is_none());
    }

    #[test]
    fn test_easy_single_move_is_forced() {
        // 黑方只有一个兵、恰好一个走法，Easy 的随机选择必须每次都选它
        let state = Fen::parse("8/8/8/8/8/8/p7/4K3 b").unwrap();

        let mut engine = AiEngine::from_difficulty(Difficulty::Easy);
        for _ in 0..20 {
            let mv = engine.choose_move(&state).unwrap();
            assert_eq!(mv.from, Position::new_unchecked(6, 0));
            assert_eq!(mv.to, Position::new_unchecked(7, 0));
        }
    }

    #[test]
    fn test_medium_takes_hanging_queen() {
        // 白后无保护地暴露在黑车的火力下
        let state = Fen::parse("r3k3/8/8/8/Q7/8/8/4K3 b").unwrap();

        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);
        let mv = engine.choose_move(&state).unwrap();

        assert_eq!(mv.from, Position::new_unchecked(0, 0));
        assert_eq!(mv.to, Position::new_unchecked(4, 0));
        assert!(mv.is_capture());
        assert!(engine.nodes_searched() > 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let state = GameState::initial();

        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);
        let first = engine.choose_move(&state).unwrap();
        for _ in 0..3 {
            assert_eq!(engine.choose_move(&state).unwrap(), first);
        }

        // Hard 同样确定
        let mut engine = AiEngine::from_difficulty(Difficulty::Hard);
        let first = engine.choose_move(&state).unwrap();
        assert_eq!(engine.choose_move(&state).unwrap(), first);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let state = GameState::initial();
        let config = AiConfig::from_difficulty(Difficulty::Easy);

        let mut a = AiEngine::with_seed(config, 42);
        let mut b = AiEngine::with_seed(config, 42);

        for _ in 0..5 {
            assert_eq!(a.choose_move(&state), b.choose_move(&state));
        }
    }

    #[test]
    fn test_choose_move_does_not_mutate_state() {
        let state = GameState::initial();
        let snapshot = state.clone();

        let mut engine = AiEngine::from_difficulty(Difficulty::Hard);
        engine.choose_move(&state).unwrap();

        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_white_side_prefers_capture() {
        // 参数化执子方：AI 执白时同样会吃掉送到嘴边的黑后
        let state = Fen::parse("4k3/8/8/8/q7/8/8/R3K3 w").unwrap();

        let mut engine = AiEngine::new(AiConfig::with_side(Difficulty::Medium, Color::White));
        let mv = engine.choose_move(&state).unwrap();

        assert_eq!(mv.from, Position::new_unchecked(7, 0));
        assert_eq!(mv.to, Position::new_unchecked(4, 0));
        assert!(mv.is_capture());
    }
}
