//! 国际象棋核心规则引擎
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 按棋子类型的走法生成（几何合法）
//! - 走子执行、悔棋与吃子/得分记录
//! - 将军/将死/逼和判定
//! - FEN 解析与坐标记法
//!
//! 引擎不做任何渲染、持久化和网络传输，这些由上层调用方负责。

mod board;
mod constants;
mod error;
mod fen;
mod game;
mod moves;
mod notation;
mod piece;

pub use board::Board;
pub use constants::*;
pub use error::{ChessError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use game::{CapturedPieces, GameResult, GameState, MoveRecord, Scores};
pub use moves::{Move, MoveGenerator};
pub use notation::Notation;
pub use piece::{Color, Piece, PieceType, Position};
