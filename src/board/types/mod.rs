//! Core board types.
//!
//! This module contains the fundamental value types of the rules engine:
//! - `Coord` - a square of the hexagonal board (or the off-board sentinel)
//! - `Direction` and `Family` - the straight, diagonal and jump catalogues
//! - `Piece`, `Color` and `Figure` - square contents
//! - `ColorSet` - check set and castling-forbidden set
//! - `Move` and `Castling` - move records and castling geometry

mod castling;
mod color_set;
mod coord;
mod direction;
mod moves;
mod piece;

pub use castling::{Castling, CastlingGeometry, CastlingLane};
pub use color_set::ColorSet;
pub use coord::{Coord, GRID_SIZE};
pub use direction::{Direction, Family, DIAGONAL, JUMP, STRAIGHT};
pub use moves::Move;
pub use piece::{Color, Figure, Piece};
