//! Fluent builder for constructing board positions.
//!
//! Allows creating positions figure by figure instead of playing moves from
//! the standard setup. Building emits no notifications.
//!
//! # Example
//! ```
//! use tri_chess::board::{BoardBuilder, Color, Coord, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece(Coord::parse("a4"), Color::White, Piece::King)
//!     .piece(Coord::parse("j5"), Color::Brown, Piece::King)
//!     .piece(Coord::parse("i13"), Color::Black, Piece::King)
//!     .player(Color::Brown)
//!     .build();
//! assert_eq!(board.kings_position(Color::Brown), Coord::parse("j5"));
//! ```

use super::{Board, Color, ColorSet, Coord, Figure, Piece};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    figures: Vec<(Coord, Figure)>,
    player: Color,
    castling_forbidden: ColorSet,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder; castling is allowed for everyone.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            figures: Vec::new(),
            player: Color::White,
            castling_forbidden: ColorSet::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.figures.extend(Board::standard_position());
        builder
    }

    /// Place a piece on a square; off-board squares are ignored on build.
    #[must_use]
    pub fn piece(self, coord: Coord, color: Color, piece: Piece) -> Self {
        self.figure(coord, Figure::new(color, piece))
    }

    /// Place a figure (or an explicit empty square).
    #[must_use]
    pub fn figure(mut self, coord: Coord, figure: Figure) -> Self {
        self.figures.retain(|(c, _)| *c != coord);
        self.figures.push((coord, figure));
        self
    }

    /// Remove whatever stands on a square.
    #[must_use]
    pub fn clear(mut self, coord: Coord) -> Self {
        self.figures.retain(|(c, _)| *c != coord);
        self
    }

    /// Set the player to move.
    #[must_use]
    pub const fn player(mut self, color: Color) -> Self {
        self.player = color;
        self
    }

    /// Forbid castling for a color.
    #[must_use]
    pub fn forbid_castling(mut self, color: Color) -> Self {
        self.castling_forbidden.insert(color);
        self
    }

    /// Forbid castling for every color.
    #[must_use]
    pub const fn no_castling(mut self) -> Self {
        self.castling_forbidden = ColorSet::all();
        self
    }

    /// Build the board.
    ///
    /// The check set starts empty; an [`Engine`](crate::engine::Engine)
    /// created from the board recomputes it.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::new();
        for (coord, figure) in self.figures {
            board.set(figure, coord);
        }
        board.player = self.player;
        board.castling_forbidden = self.castling_forbidden;
        board
    }
}
