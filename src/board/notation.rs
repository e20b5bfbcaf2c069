//! Move notation.
//!
//! A move is written as the piece letter (none for pawns), the source
//! square, `x` for a capture, and the destination square: `Sa3b5`,
//! `b1d1`, `Da5xe5`. The last move of a board gets a trailing `+` while any
//! color is in check.

use std::fmt;

use super::{Board, Move, Piece};

impl Piece {
    /// Notation letter (König, Dame, Läufer, Springer, Turm); pawns have
    /// none.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Piece::King => Some('K'),
            Piece::Queen => Some('D'),
            Piece::Bishop => Some('L'),
            Piece::Knight => Some('S'),
            Piece::Rook => Some('T'),
            Piece::Pawn => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(letter) = self.figure().piece().and_then(Piece::letter) {
            write!(f, "{letter}")?;
        }
        write!(f, "{}", self.from())?;
        if self.is_capture() {
            write!(f, "x")?;
        }
        write!(f, "{}", self.to())
    }
}

impl Board {
    /// Notation of the last move played, or an empty string.
    #[must_use]
    pub fn last_move_notation(&self) -> String {
        let Some(mv) = self.last_move() else {
            return String::new();
        };
        let mut notation = mv.to_string();
        if !self.check().is_empty() {
            notation.push('+');
        }
        notation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, ColorSet, Coord, Figure};

    fn mv(figure: Figure, from: &str, to: &str, captured: Figure) -> Move {
        Move::new(Coord::parse(from), figure, Coord::parse(to), captured)
    }

    #[test]
    fn test_piece_letters() {
        let letters: Vec<Option<char>> = Piece::ALL.iter().map(|p| p.letter()).collect();
        assert_eq!(
            letters,
            vec![Some('K'), Some('D'), Some('L'), Some('S'), Some('T'), None]
        );
    }

    #[test]
    fn test_bishop_move() {
        let bishop = Figure::new(Color::White, Piece::Bishop);
        assert_eq!(mv(bishop, "a2", "c3", Figure::Empty).to_string(), "La2c3");
    }

    #[test]
    fn test_pawn_move_has_no_letter() {
        let pawn = Figure::new(Color::White, Piece::Pawn);
        assert_eq!(mv(pawn, "b1", "d1", Figure::Empty).to_string(), "b1d1");
    }

    #[test]
    fn test_capture_marker() {
        let queen = Figure::new(Color::Brown, Piece::Queen);
        let pawn = Figure::new(Color::White, Piece::Pawn);
        assert_eq!(mv(queen, "i4", "e4", pawn).to_string(), "Di4xe4");
    }

    #[test]
    fn test_last_move_notation() {
        let mut board = Board::new();
        assert_eq!(board.last_move_notation(), "");

        let knight = Figure::new(Color::White, Piece::Knight);
        board.set(knight, Coord::parse("a3"));
        let knight_move = board.create_move(Coord::parse("a3"), Coord::parse("c2"));
        board.do_move(knight_move);
        assert_eq!(board.last_move_notation(), "Sa3c2");

        board.set_check([Color::Black].into_iter().collect::<ColorSet>());
        assert_eq!(board.last_move_notation(), "Sa3c2+");
    }
}
