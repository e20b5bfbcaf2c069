//! Move record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::Castling;
use super::coord::Coord;
use super::piece::Figure;

/// An immutable move: what stood on the source and destination squares,
/// the derived castling category, and whether this move was the one that
/// cost its mover the castling rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Coord,
    figure: Figure,
    to: Coord,
    captured: Figure,
    castling: Castling,
    disables_castling: bool,
}

impl Move {
    /// Create a move; the castling category is derived from the inputs.
    #[must_use]
    pub fn new(from: Coord, figure: Figure, to: Coord, captured: Figure) -> Self {
        let castling = match figure {
            Figure::Occupied { color, piece } => Castling::classify(color, piece, from, to),
            Figure::Empty => Castling::None,
        };
        Move {
            from,
            figure,
            to,
            captured,
            castling,
            disables_castling: false,
        }
    }

    /// The same move, stamped as the one that disabled castling.
    #[must_use]
    pub const fn with_disables_castling(self) -> Self {
        Move {
            disables_castling: true,
            ..self
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Coord {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Coord {
        self.to
    }

    /// The figure on the source square
    #[inline]
    #[must_use]
    pub const fn figure(&self) -> Figure {
        self.figure
    }

    /// The figure on the destination square before the move
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Figure {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn castling(&self) -> Castling {
        self.castling
    }

    #[inline]
    #[must_use]
    pub const fn disables_castling(&self) -> bool {
        self.disables_castling
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}
