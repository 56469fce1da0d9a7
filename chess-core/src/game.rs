//! 对局状态与走子执行
//!
//! 对局状态只通过 [`GameState::apply_move`] 和 [`GameState::undo_move`]
//! 变更。搜索方在自己的克隆上模拟，从不改动调用方持有的实例。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ChessError;
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Color, Piece, PieceType, Position};

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 将死
    Checkmate { winner: Color },
    /// 逼和（轮走方无子可动但未被将军）
    Stalemate,
}

/// 走法记录
///
/// 记录悔棋所需的全部信息：被吃的棋子原样保存（含 `has_moved`），
/// 走子方自己走之前的 `has_moved` 也一并记录，悔棋可以精确还原。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 走动的棋子类型
    pub piece_type: PieceType,
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
    /// 被吃的棋子（如果有）
    pub captured: Option<Piece>,
    /// 走子方
    pub player: Color,
    /// 走子前该棋子是否已经动过
    pub had_moved: bool,
}

/// 双方吃子记录（按吃子方分组，保持吃子顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedPieces {
    /// 获取某一方吃掉的所有棋子
    pub fn by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn push(&mut self, color: Color, piece: Piece) {
        match color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    fn pop(&mut self, color: Color) -> Option<Piece> {
        match color {
            Color::White => self.white.pop(),
            Color::Black => self.black.pop(),
        }
    }
}

/// 双方得分
///
/// 不变量：每一方的得分始终等于该方吃子记录里棋子的子力价值之和。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    white: i32,
    black: i32,
}

impl Scores {
    /// 获取某一方的得分
    pub fn of(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn add(&mut self, color: Color, value: i32) {
        match color {
            Color::White => self.white += value,
            Color::Black => self.black += value,
        }
    }
}

/// 完整的对局状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_player: Color,
    /// 走法历史（只追加，悔棋弹出末尾）
    pub move_history: Vec<MoveRecord>,
    /// 吃子记录
    pub captured: CapturedPieces,
    /// 得分
    pub scores: Scores,
    /// 对局结果（进行中为 None）
    pub result: Option<GameResult>,
}

impl GameState {
    /// 创建标准初始局面的新对局，白方先行
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// 从棋盘创建对局状态
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            move_history: Vec::new(),
            captured: CapturedPieces::default(),
            scores: Scores::default(),
            result: None,
        }
    }

    /// 对局是否已结束
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// 查询指定位置棋子的几何合法走法（只读）
    ///
    /// 空格返回空列表。注意这里不过滤送王的走法，
    /// 完全合法的走法由 [`MoveGenerator::generate_legal`] 提供。
    pub fn legal_moves(&self, pos: Position) -> Result<Vec<Move>, ChessError> {
        if !pos.is_valid() {
            return Err(ChessError::InvalidSquare {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(MoveGenerator::generate_from(&self.board, pos))
    }

    /// 执行一步走法
    ///
    /// 起点必须有棋子，目标必须在该棋子的几何合法走法集内。
    /// 引擎不校验起点棋子是否属于当前走子方，归属检查在调用方的
    /// 选子流程里完成。
    ///
    /// 吃子会记入吃子方的吃子列表并累加得分；走完后判定对方是否被
    /// 将死或逼和，未终局才交换走子方。
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<MoveRecord, ChessError> {
        if self.result.is_some() {
            return Err(ChessError::GameOver);
        }
        if !from.is_valid() {
            return Err(ChessError::InvalidSquare {
                row: from.row,
                col: from.col,
            });
        }
        if !to.is_valid() {
            return Err(ChessError::InvalidSquare {
                row: to.row,
                col: to.col,
            });
        }

        let piece = self.board.get(from).ok_or(ChessError::NoPiece {
            row: from.row,
            col: from.col,
        })?;

        let candidates = MoveGenerator::generate_from(&self.board, from);
        if !candidates.iter().any(|m| m.to == to) {
            return Err(ChessError::InvalidMove {
                from_row: from.row,
                from_col: from.col,
                to_row: to.row,
                to_col: to.col,
            });
        }

        // 吃子结算
        let captured = self.board.get(to);
        if let Some(target) = captured {
            self.captured.push(self.current_player, target);
            self.scores.add(self.current_player, target.value());
        }

        // 移动棋子并标记已动
        let had_moved = piece.has_moved;
        let mut moved = piece;
        moved.has_moved = true;
        self.board.set(from, None);
        self.board.set(to, Some(moved));

        let record = MoveRecord {
            piece_type: piece.piece_type,
            from,
            to,
            captured,
            player: self.current_player,
            had_moved,
        };
        self.move_history.push(record);

        // 终局判定，未终局才换边
        let opponent = self.current_player.opponent();
        if MoveGenerator::is_checkmate(&self.board, opponent) {
            self.result = Some(GameResult::Checkmate {
                winner: self.current_player,
            });
        } else if MoveGenerator::is_stalemate(&self.board, opponent) {
            self.result = Some(GameResult::Stalemate);
        } else {
            self.current_player = opponent;
        }

        Ok(record)
    }

    /// 悔一步棋
    ///
    /// 弹出最后一条走法记录并精确还原：棋子移回原位并恢复走前的
    /// `has_moved`，被吃的棋子原样放回，吃子记录和得分同步回退，
    /// 走子方恢复为记录里的一方，终局状态清除。
    pub fn undo_move(&mut self) -> Result<MoveRecord, ChessError> {
        let record = self.move_history.pop().ok_or(ChessError::NoHistory)?;

        if let Some(mut piece) = self.board.get(record.to) {
            piece.has_moved = record.had_moved;
            self.board.set(record.from, Some(piece));
        }
        // 恢复被吃的棋子（安静走法时清空目标格）
        self.board.set(record.to, record.captured);

        if let Some(captured) = record.captured {
            self.captured.pop(record.player);
            self.scores.add(record.player, -captured.value());
        }

        self.current_player = record.player;
        self.result = None;

        Ok(record)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
