//! Error types for board conversions.
//!
//! Rules decisions (illegal moves, off-board squares) are never errors; they
//! are reported as `false` or as the invalid coordinate. These errors cover
//! the strict conversions a caller may opt into.

use std::fmt;

use super::Coord;

/// Error type for strict coordinate parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Text is malformed or names a square off the board
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for restoring a board from a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A figure is placed off the board
    InvalidCoord { coord: Coord },
    /// Two figures are placed on the same square
    DuplicateCoord { coord: Coord },
    /// More than one king of a color
    DuplicateKing { coord: Coord },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::InvalidCoord { coord } => {
                write!(
                    f,
                    "Figure placed off the board at ({}, {})",
                    coord.file(),
                    coord.rank()
                )
            }
            SnapshotError::DuplicateCoord { coord } => {
                write!(f, "Square {coord} is occupied twice")
            }
            SnapshotError::DuplicateKing { coord } => {
                write!(f, "Second king of the same color on {coord}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
