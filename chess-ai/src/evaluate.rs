//! 棋局评估函数

use chess_core::{Board, Color};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 子力差评估
    ///
    /// 对棋盘上所有棋子的子力价值求和，`perspective` 一方为正、
    /// 对方为负。王的子力价值为 0，不参与评估。
    pub fn material_balance(board: &Board, perspective: Color) -> i32 {
        let mut score = 0;

        for (_, piece) in board.all_pieces() {
            let value = piece.value();
            if piece.color == perspective {
                score += value;
            } else {
                score -= value;
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Fen;

    #[test]
    fn test_initial_material_is_balanced() {
        let board = Board::initial();
        assert_eq!(Evaluator::material_balance(&board, Color::White), 0);
        assert_eq!(Evaluator::material_balance(&board, Color::Black), 0);
    }

    #[test]
    fn test_missing_rook() {
        // 白方缺一个车
        let state = Fen::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/1NBQKBNR w").unwrap();

        assert_eq!(Evaluator::material_balance(&state.board, Color::White), -5);
        assert_eq!(Evaluator::material_balance(&state.board, Color::Black), 5);
    }

    #[test]
    fn test_kings_do_not_count() {
        // 只剩双王，子力差为 0
        let state = Fen::parse("4k3/8/8/8/8/8/8/4K3 w").unwrap();
        assert_eq!(Evaluator::material_balance(&state.board, Color::White), 0);
        assert_eq!(Evaluator::material_balance(&state.board, Color::Black), 0);
    }

    #[test]
    fn test_perspective_is_symmetric() {
        // 任意局面下双方视角互为相反数
        let state = Fen::parse("r3k3/8/8/8/Q7/8/8/4K3 w").unwrap();
        let white = Evaluator::material_balance(&state.board, Color::White);
        let black = Evaluator::material_balance(&state.board, Color::Black);
        assert_eq!(white, -black);
        assert_eq!(white, 4); // 后 9 对车 5
    }
}
