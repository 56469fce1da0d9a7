//! 走法生成和将军判定
//!
//! 这里生成的是“几何合法”的走法：满足棋子的移动模式和占位规则，
//! 但不会过滤掉那些会让己方王暴露在攻击下的走法。需要完全合法的
//! 走法时使用 [`MoveGenerator::generate_legal`]。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{BLACK_PAWN_RANK, WHITE_PAWN_RANK};
use crate::piece::{Color, Piece, PieceType, Position};

/// 直线方向（车）
const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 斜线方向（象）
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 马的 8 个跳跃偏移
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// 王的 8 个相邻偏移
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
    /// 被吃的棋子（如果有）
    pub captured: Option<Piece>,
}

impl Move {
    /// 创建安静走法（目标为空格）
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// 创建吃子走法
    pub fn with_capture(from: Position, to: Position, captured: Piece) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// 是否是吃子走法
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定位置棋子的所有几何合法走法
    ///
    /// 空格返回空列表。这是呈现层“点击选子”所用的查询接口。
    pub fn generate_from(board: &Board, pos: Position) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some(piece) = board.get(pos) {
            Self::generate_piece_moves(board, pos, piece, &mut moves);
        }
        moves
    }

    /// 生成指定阵营的所有几何合法走法
    ///
    /// 枚举顺序固定：按格子行优先，再按每种棋子自身的方向顺序。
    /// 搜索依赖这个顺序做稳定的并列裁决。
    pub fn generate_pseudo_legal(board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for (pos, piece) in board.pieces(color) {
            Self::generate_piece_moves(board, pos, piece, &mut moves);
        }

        moves
    }

    /// 生成指定阵营的所有完全合法走法（过滤掉会让己方王被攻击的走法）
    pub fn generate_legal(board: &Board, color: Color) -> Vec<Move> {
        Self::generate_pseudo_legal(board, color)
            .into_iter()
            .filter(|mv| {
                // 模拟走法
                let mut test_board = board.clone();
                test_board.move_piece(mv.from, mv.to);
                !Self::is_in_check(&test_board, color)
            })
            .collect()
    }

    /// 生成指定棋子的所有几何合法走法
    fn generate_piece_moves(board: &Board, pos: Position, piece: Piece, moves: &mut Vec<Move>) {
        match piece.piece_type {
            PieceType::Pawn => Self::generate_pawn_moves(board, pos, piece.color, moves),
            PieceType::Knight => Self::generate_knight_moves(board, pos, piece.color, moves),
            PieceType::Bishop => Self::generate_bishop_moves(board, pos, piece.color, moves),
            PieceType::Rook => Self::generate_rook_moves(board, pos, piece.color, moves),
            PieceType::Queen => Self::generate_queen_moves(board, pos, piece.color, moves),
            PieceType::King => Self::generate_king_moves(board, pos, piece.color, moves),
        }
    }

    /// 生成兵的走法
    ///
    /// 前进一格要求目标为空；从初始行可以前进两格，要求途经的两格都
    /// 为空；只能斜前方吃子。不含吃过路兵和升变。
    fn generate_pawn_moves(board: &Board, pos: Position, color: Color, moves: &mut Vec<Move>) {
        let forward = match color {
            Color::White => -1i8,
            Color::Black => 1i8,
        };
        let start_row = match color {
            Color::White => WHITE_PAWN_RANK,
            Color::Black => BLACK_PAWN_RANK,
        };

        // 直进
        if let Some(to) = pos.offset(forward, 0) {
            if board.get(to).is_none() {
                moves.push(Move::new(pos, to));

                // 初始行可以进两格
                if pos.row == start_row {
                    if let Some(two) = to.offset(forward, 0) {
                        if board.get(two).is_none() {
                            moves.push(Move::new(pos, two));
                        }
                    }
                }
            }
        }

        // 斜吃
        for dc in [-1i8, 1i8] {
            if let Some(to) = pos.offset(forward, dc) {
                if let Some(target) = board.get(to) {
                    if target.color != color {
                        moves.push(Move::with_capture(pos, to, target));
                    }
                }
            }
        }
    }

    /// 生成马的走法
    fn generate_knight_moves(board: &Board, pos: Position, color: Color, moves: &mut Vec<Move>) {
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to) = pos.offset(dr, dc) {
                Self::try_add_move(board, pos, to, color, moves);
            }
        }
    }

    /// 生成象的走法
    fn generate_bishop_moves(board: &Board, pos: Position, color: Color, moves: &mut Vec<Move>) {
        Self::generate_sliding_moves(board, pos, color, &DIAGONAL_DIRECTIONS, moves);
    }

    /// 生成车的走法
    fn generate_rook_moves(board: &Board, pos: Position, color: Color, moves: &mut Vec<Move>) {
        Self::generate_sliding_moves(board, pos, color, &ORTHOGONAL_DIRECTIONS, moves);
    }

    /// 生成后的走法（车与象走法的并集，没有独立算法）
    fn generate_queen_moves(board: &Board, pos: Position, color: Color, moves: &mut Vec<Move>) {
        Self::generate_rook_moves(board, pos, color, moves);
        Self::generate_bishop_moves(board, pos, color, moves);
    }

    /// 生成王的走法（不含王车易位）
    fn generate_king_moves(board: &Board, pos: Position, color: Color, moves: &mut Vec<Move>) {
        for (dr, dc) in KING_OFFSETS {
            if let Some(to) = pos.offset(dr, dc) {
                Self::try_add_move(board, pos, to, color, moves);
            }
        }
    }

    /// 沿给定方向滑行：每个空格都是安静走法，遇到第一个棋子时停止
    /// 扫描，只有对方棋子才作为吃子走法加入
    fn generate_sliding_moves(
        board: &Board,
        pos: Position,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut current = pos;
            while let Some(to) = current.offset(dr, dc) {
                if let Some(target) = board.get(to) {
                    // 遇到棋子，无论颜色都终止这条射线
                    if target.color != color {
                        moves.push(Move::with_capture(pos, to, target));
                    }
                    break;
                } else {
                    moves.push(Move::new(pos, to));
                }
                current = to;
            }
        }
    }

    /// 尝试添加单步走法（检查目标位置的占位规则）
    fn try_add_move(board: &Board, from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
        if let Some(target) = board.get(to) {
            if target.color != color {
                moves.push(Move::with_capture(from, to, target));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }

    /// 检查指定位置是否被某一方攻击
    pub fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
        for (pos, piece) in board.pieces(by) {
            if Self::can_attack(board, pos, piece, target) {
                return true;
            }
        }
        false
    }

    /// 检查指定阵营是否被将军
    pub fn is_in_check(board: &Board, color: Color) -> bool {
        let king_pos = match board.find_king(color) {
            Some(pos) => pos,
            None => return false, // 没有王，视为不被将军
        };
        Self::is_square_attacked(board, king_pos, color.opponent())
    }

    /// 检查指定阵营是否被将死（被将军且无完全合法走法）
    pub fn is_checkmate(board: &Board, color: Color) -> bool {
        if !Self::is_in_check(board, color) {
            return false;
        }
        Self::generate_legal(board, color).is_empty()
    }

    /// 检查指定阵营是否被逼和（未被将军但无完全合法走法）
    pub fn is_stalemate(board: &Board, color: Color) -> bool {
        if Self::is_in_check(board, color) {
            return false;
        }
        Self::generate_legal(board, color).is_empty()
    }

    /// 检查棋子是否能攻击到目标位置
    fn can_attack(board: &Board, from: Position, piece: Piece, target: Position) -> bool {
        let dr = target.row as i8 - from.row as i8;
        let dc = target.col as i8 - from.col as i8;

        // 自身所在的格子不算被自己攻击
        if dr == 0 && dc == 0 {
            return false;
        }

        match piece.piece_type {
            PieceType::Pawn => {
                let forward = match piece.color {
                    Color::White => -1,
                    Color::Black => 1,
                };
                dr == forward && dc.abs() == 1
            }
            PieceType::Knight => {
                (dr.abs() == 1 && dc.abs() == 2) || (dr.abs() == 2 && dc.abs() == 1)
            }
            PieceType::King => dr.abs().max(dc.abs()) == 1,
            PieceType::Rook => dr * dc == 0 && Self::ray_is_clear(board, from, target),
            PieceType::Bishop => dr.abs() == dc.abs() && Self::ray_is_clear(board, from, target),
            PieceType::Queen => {
                (dr * dc == 0 || dr.abs() == dc.abs()) && Self::ray_is_clear(board, from, target)
            }
        }
    }

    /// 检查 from 到 target 的直线/斜线射线上没有其它棋子
    ///
    /// 调用方保证两点同行、同列或同斜线且不重合。
    fn ray_is_clear(board: &Board, from: Position, target: Position) -> bool {
        let dr = (target.row as i8 - from.row as i8).signum();
        let dc = (target.col as i8 - from.col as i8).signum();

        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if next == target {
                return true;
            }
            if board.get(next).is_some() {
                return false;
            }
            current = next;
        }
        false
    }
}
