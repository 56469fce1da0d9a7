//! 坐标记法
//!
//! 格子用 `a1`-`h8` 表示：列为 a-h，横排 1-8 从白方一侧数起
//! （行号 0 对应第 8 横排）。走法用起止格连写，如 `e2e4`；
//! 带棋子字母和吃子标记的长代数形式如 `Ng1f3`、`Qh5xf7`。

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::moves::Move;
use crate::piece::{PieceType, Position};

/// 坐标记法处理
pub struct Notation;

impl Notation {
    /// 获取格子名称，如 `e4`
    pub fn square_name(pos: Position) -> String {
        let file = (b'a' + pos.col) as char;
        let rank = BOARD_SIZE as u8 - pos.row;
        format!("{}{}", file, rank)
    }

    /// 解析格子名称
    pub fn parse_square(s: &str) -> Option<Position> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if !('a'..='h').contains(&file) {
            return None;
        }
        let rank = rank.to_digit(10)?;
        if !(1..=8).contains(&rank) {
            return None;
        }

        let col = file as u8 - b'a';
        let row = BOARD_SIZE as u8 - rank as u8;
        Some(Position::new_unchecked(row, col))
    }

    /// 解析起止格连写的走法，如 `e2e4`
    pub fn parse_move(s: &str) -> Option<(Position, Position)> {
        if s.len() != 4 {
            return None;
        }
        let from = Self::parse_square(&s[0..2])?;
        let to = Self::parse_square(&s[2..4])?;
        Some((from, to))
    }

    /// 将走法转换为长代数记法
    ///
    /// 兵不写棋子字母，吃子加 `x`。起点必须有棋子。
    pub fn format_move(board: &Board, mv: &Move) -> Option<String> {
        let piece = board.get(mv.from)?;

        let mut out = String::new();
        if piece.piece_type != PieceType::Pawn {
            out.push(Self::piece_letter(piece.piece_type));
        }
        out.push_str(&Self::square_name(mv.from));
        if mv.is_capture() {
            out.push('x');
        }
        out.push_str(&Self::square_name(mv.to));
        Some(out)
    }

    /// 棋子的英文字母（兵除外）
    fn piece_letter(piece_type: PieceType) -> char {
        match piece_type {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, Piece};

    #[test]
    fn test_square_name() {
        assert_eq!(Notation::square_name(Position::new_unchecked(7, 0)), "a1");
        assert_eq!(Notation::square_name(Position::new_unchecked(0, 7)), "h8");
        assert_eq!(Notation::square_name(Position::new_unchecked(4, 4)), "e4");
    }

    #[test]
    fn test_parse_square() {
        assert_eq!(
            Notation::parse_square("a1"),
            Some(Position::new_unchecked(7, 0))
        );
        assert_eq!(
            Notation::parse_square("h8"),
            Some(Position::new_unchecked(0, 7))
        );
        assert_eq!(Notation::parse_square("i1"), None);
        assert_eq!(Notation::parse_square("a9"), None);
        assert_eq!(Notation::parse_square("a"), None);
        assert_eq!(Notation::parse_square("a12"), None);
    }

    #[test]
    fn test_square_roundtrip() {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let pos = Position::new_unchecked(row, col);
                let name = Notation::square_name(pos);
                assert_eq!(Notation::parse_square(&name), Some(pos));
            }
        }
    }

    #[test]
    fn test_parse_move() {
        let (from, to) = Notation::parse_move("e2e4").unwrap();
        assert_eq!(from, Position::new_unchecked(6, 4));
        assert_eq!(to, Position::new_unchecked(4, 4));

        assert!(Notation::parse_move("e2").is_none());
        assert!(Notation::parse_move("e2e9").is_none());
    }

    #[test]
    fn test_format_move() {
        let board = Board::initial();

        // 兵的走法不带棋子字母
        let mv = Move::new(Position::new_unchecked(6, 4), Position::new_unchecked(4, 4));
        assert_eq!(Notation::format_move(&board, &mv), Some("e2e4".to_string()));

        // 马的走法带字母
        let mv = Move::new(Position::new_unchecked(7, 6), Position::new_unchecked(5, 5));
        assert_eq!(
            Notation::format_move(&board, &mv),
            Some("Ng1f3".to_string())
        );

        // 吃子加 x
        let mut board = Board::empty();
        board.set(
            Position::new_unchecked(3, 7),
            Some(Piece::new(PieceType::Queen, Color::White)),
        );
        let target = Piece::new(PieceType::Pawn, Color::Black);
        board.set(Position::new_unchecked(1, 5), Some(target));
        let mv = Move::with_capture(
            Position::new_unchecked(3, 7),
            Position::new_unchecked(1, 5),
            target,
        );
        assert_eq!(
            Notation::format_move(&board, &mv),
            Some("Qh5xf7".to_string())
        );

        // 起点为空返回 None
        let empty = Board::empty();
        let mv = Move::new(Position::new_unchecked(4, 4), Position::new_unchecked(3, 4));
        assert_eq!(Notation::format_move(&empty, &mv), None);
    }
}
