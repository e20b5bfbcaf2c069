//! Piece, color and square-content types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl Piece {
    /// All piece types
    pub const ALL: [Piece; 6] = [
        Piece::King,
        Piece::Queen,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
        Piece::Pawn,
    ];

    /// Returns true if moving this piece costs its owner the castling rights
    #[inline]
    #[must_use]
    pub const fn affects_castling(self) -> bool {
        matches!(self, Piece::King | Piece::Rook)
    }
}

/// The three players, in turn order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Brown,
    Black,
}

impl Color {
    /// All colors in turn order (White=0, Brown=1, Black=2)
    pub const ALL: [Color; 3] = [Color::White, Color::Brown, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Brown => 1,
            Color::Black => 2,
        }
    }

    /// The player moving after this one
    #[inline]
    #[must_use]
    pub const fn next(self) -> Color {
        match self {
            Color::White => Color::Brown,
            Color::Brown => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Brown => write!(f, "Brown"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Content of a board square: empty, or a piece of some color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Figure {
    #[default]
    Empty,
    Occupied { color: Color, piece: Piece },
}

impl Figure {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Figure::Occupied { color, piece }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Figure::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Figure::Empty => None,
            Figure::Occupied { color, .. } => Some(color),
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Figure::Empty => None,
            Figure::Occupied { piece, .. } => Some(piece),
        }
    }

    /// Returns true if the square holds `piece` of `color`
    #[inline]
    #[must_use]
    pub fn is(self, color: Color, piece: Piece) -> bool {
        self == Figure::new(color, piece)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Empty => write!(f, "empty"),
            Figure::Occupied { color, piece } => write!(f, "{color} {piece:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_order_cycles() {
        assert_eq!(Color::White.next(), Color::Brown);
        assert_eq!(Color::Brown.next(), Color::Black);
        assert_eq!(Color::Black.next(), Color::White);
    }

    #[test]
    fn test_color_index_matches_all() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_empty_figure_has_no_color_or_piece() {
        assert!(Figure::Empty.is_empty());
        assert_eq!(Figure::Empty.color(), None);
        assert_eq!(Figure::Empty.piece(), None);
        assert_eq!(Figure::default(), Figure::Empty);
    }

    #[test]
    fn test_occupied_figure() {
        let f = Figure::new(Color::Brown, Piece::Knight);
        assert!(!f.is_empty());
        assert_eq!(f.color(), Some(Color::Brown));
        assert_eq!(f.piece(), Some(Piece::Knight));
        assert!(f.is(Color::Brown, Piece::Knight));
        assert!(!f.is(Color::Black, Piece::Knight));
    }
}
