//! Plain-data view of a board for serialization.
//!
//! A [`BoardSnapshot`] carries everything needed to rebuild a board: the
//! occupied squares, the player to move, the check set, the
//! castling-forbidden set and the move history. With the `serde` feature it
//! derives `Serialize`/`Deserialize`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use super::{Board, Color, ColorSet, Coord, Figure, Move, Piece};

/// A piece standing on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    pub coord: Coord,
    pub color: Color,
    pub piece: Piece,
}

/// Serializable board state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub player: Color,
    pub pieces: Vec<PlacedPiece>,
    pub check: ColorSet,
    pub castling_forbidden: ColorSet,
    pub moves: Vec<Move>,
}

impl Board {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let pieces = Coord::all_valid()
            .iter()
            .filter_map(|&coord| match self.get(coord) {
                Figure::Occupied { color, piece } => Some(PlacedPiece {
                    coord,
                    color,
                    piece,
                }),
                Figure::Empty => None,
            })
            .collect();

        BoardSnapshot {
            player: self.player,
            pieces,
            check: self.check,
            castling_forbidden: self.castling_forbidden,
            moves: self.moves.clone(),
        }
    }

    /// Rebuild a board (without listeners) from a snapshot.
    ///
    /// # Errors
    ///
    /// Fails if a piece stands off the board, two pieces share a square, or a
    /// color has more than one king.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Board, SnapshotError> {
        let mut board = Board::new();

        for placed in &snapshot.pieces {
            let coord = placed.coord;
            if !coord.is_valid() {
                return Err(SnapshotError::InvalidCoord { coord });
            }
            if !board.get(coord).is_empty() {
                return Err(SnapshotError::DuplicateCoord { coord });
            }
            if placed.piece == Piece::King && board.kings_position(placed.color).is_valid() {
                return Err(SnapshotError::DuplicateKing { coord });
            }
            board.set(Figure::new(placed.color, placed.piece), coord);
        }

        board.player = snapshot.player;
        board.check = snapshot.check;
        board.castling_forbidden = snapshot.castling_forbidden;
        board.moves = snapshot.moves.clone();
        Ok(board)
    }
}
