//! 错误类型定义

use thiserror::Error;

/// 规则引擎错误
///
/// 所有错误都是可恢复的：引擎返回类型化的失败结果，由调用方决定
/// 如何展示，引擎本身不记录日志也不中止进程。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// 坐标越界
    #[error("Invalid square: ({row}, {col})")]
    InvalidSquare { row: u8, col: u8 },

    /// 起点没有棋子
    #[error("No piece at square ({row}, {col})")]
    NoPiece { row: u8, col: u8 },

    /// 目标不在起点棋子的合法走法集内
    #[error("Invalid move: from ({from_row}, {from_col}) to ({to_row}, {to_col})")]
    InvalidMove {
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    },

    /// 没有可悔的棋
    #[error("No move to undo")]
    NoHistory,

    /// 对局已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的 FEN 字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },
}

/// 规则引擎操作结果类型
pub type Result<T> = std::result::Result<T, ChessError>;
