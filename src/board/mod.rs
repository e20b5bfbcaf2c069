//! Three-player board representation.
//!
//! The board is a hexagonal field of 126 squares stored in a 13x13 grid.
//! Three colors play in turn: White, Brown and Black. The board holds the
//! figures, the player to move, the check set, castling rights, a king cache
//! and the move history, and notifies registered listeners of every change.
//! Legality lives in [`crate::engine`].
//!
//! # Example
//! ```
//! use tri_chess::board::{Board, Color, Coord, Piece};
//!
//! let mut board = Board::new();
//! board.clear().setup();
//! assert_eq!(board.player(), Color::White);
//! assert!(board.get(Coord::parse("a4")).is(Color::White, Piece::King));
//! ```

mod builder;
mod error;
mod events;
mod notation;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{CoordError, SnapshotError};
pub use events::{CheckChange, FieldChange, MoveEvent, PlayerChange};
pub use snapshot::{BoardSnapshot, PlacedPiece};
pub use state::Board;
pub use types::{
    Castling, CastlingGeometry, CastlingLane, Color, ColorSet, Coord, Direction, Family, Figure,
    Move, Piece, DIAGONAL, GRID_SIZE, JUMP, STRAIGHT,
};
