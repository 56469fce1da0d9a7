//! FEN 格式解析和生成
//!
//! 格式：`<棋盘> <走子方> [其余字段]`
//!
//! 棋盘部分从黑方底线（第 8 横排）开始逐行描述。引擎不建模王车易位、
//! 吃过路兵和回合计数，标准 FEN 的后四个字段在解析时接受并忽略，
//! 生成时以占位符补齐。
//!
//! 示例：
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::ChessError;
use crate::game::GameState;
use crate::piece::{Color, Piece, Position};

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为对局状态
    ///
    /// 从 FEN 加载的棋子 `has_moved` 一律为 false，吃子记录和走法
    /// 历史为空。
    pub fn parse(fen: &str) -> Result<GameState, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ChessError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        // 走子方（默认白方）
        let current_player = if parts.len() > 1 {
            Color::from_fen_char(parts[1].chars().next().unwrap_or('w')).unwrap_or(Color::White)
        } else {
            Color::White
        };

        Ok(GameState::from_board(board, current_player))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, ChessError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(ChessError::InvalidFen {
                reason: format!("Expected 8 rows, got {}", rows.len()),
            });
        }

        // FEN 第一行就是 row 0（黑方底线）
        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0u8;

            for c in row.chars() {
                if col as usize >= BOARD_SIZE {
                    return Err(ChessError::InvalidFen {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }

                if let Some(empty_count) = c.to_digit(10) {
                    col += empty_count as u8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    board.set(Position::new_unchecked(row_idx as u8, col), Some(piece));
                    col += 1;
                } else {
                    return Err(ChessError::InvalidFen {
                        reason: format!("Invalid piece character: {}", c),
                    });
                }
            }

            if col as usize != BOARD_SIZE {
                return Err(ChessError::InvalidFen {
                    reason: format!("Row {} has {} columns, expected 8", row_idx, col),
                });
            }
        }

        Ok(board)
    }

    /// 将对局状态转换为 FEN 字符串
    pub fn to_string(state: &GameState) -> String {
        format!(
            "{} {} - - 0 1",
            Self::board_to_string(&state.board),
            state.current_player.to_fen_char()
        )
    }

    /// 将棋盘转换为 FEN 棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row in 0..BOARD_SIZE {
            let mut row_str = String::new();
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE {
                if let Some(piece) = board.get(Position::new_unchecked(row as u8, col as u8)) {
                    if empty_count > 0 {
                        row_str.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row_str.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row_str.push_str(&empty_count.to_string());
            }

            rows.push(row_str);
        }

        rows.join("/")
    }

    /// 初始局面
    pub fn initial() -> GameState {
        Self::parse(INITIAL_FEN).expect("Initial FEN should be valid")
    }
}
