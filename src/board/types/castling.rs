//! Castling categories and the fixed castling geometry of each color.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::direction::{Direction, STRAIGHT};
use super::piece::{Color, Piece};

/// Castling category of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Castling {
    #[default]
    None,
    KingSide,
    QueenSide,
}

impl Castling {
    /// Classify a move of `piece` of `color` from `from` to `to`.
    ///
    /// Only a king leaving its home square for one of the two castling
    /// targets of its color is a castling move.
    #[must_use]
    pub fn classify(color: Color, piece: Piece, from: Coord, to: Coord) -> Castling {
        if piece != Piece::King {
            return Castling::None;
        }
        let geometry = CastlingGeometry::of(color);
        if from != geometry.king_home {
            return Castling::None;
        }
        if to == geometry.king_side.king_to {
            Castling::KingSide
        } else if to == geometry.queen_side.king_to {
            Castling::QueenSide
        } else {
            Castling::None
        }
    }
}

/// One castling option: where king and rook go, and the path the king walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingLane {
    pub king_to: Coord,
    pub rook_from: Coord,
    pub rook_to: Coord,
    pub path: Direction,
    pub length: i32,
}

/// Castling squares of one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub king_home: Coord,
    pub king_side: CastlingLane,
    pub queen_side: CastlingLane,
}

// Indexed by `Color::index()`: a4 / j5 / i13 home squares.
static GEOMETRY: [CastlingGeometry; 3] = [
    CastlingGeometry {
        king_home: Coord::new(3, 0),
        king_side: CastlingLane {
            king_to: Coord::new(1, 0),
            rook_from: Coord::new(0, 0),
            rook_to: Coord::new(2, 0),
            path: STRAIGHT[0],
            length: 2,
        },
        queen_side: CastlingLane {
            king_to: Coord::new(6, 0),
            rook_from: Coord::new(7, 0),
            rook_to: Coord::new(5, 0),
            path: STRAIGHT[3],
            length: 3,
        },
    },
    CastlingGeometry {
        king_home: Coord::new(4, 9),
        king_side: CastlingLane {
            king_to: Coord::new(6, 11),
            rook_from: Coord::new(7, 12),
            rook_to: Coord::new(5, 10),
            path: STRAIGHT[2],
            length: 2,
        },
        queen_side: CastlingLane {
            king_to: Coord::new(1, 6),
            rook_from: Coord::new(0, 5),
            rook_to: Coord::new(2, 7),
            path: STRAIGHT[5],
            length: 3,
        },
    },
    CastlingGeometry {
        king_home: Coord::new(12, 8),
        king_side: CastlingLane {
            king_to: Coord::new(12, 6),
            rook_from: Coord::new(12, 5),
            rook_to: Coord::new(12, 7),
            path: STRAIGHT[4],
            length: 2,
        },
        queen_side: CastlingLane {
            king_to: Coord::new(12, 11),
            rook_from: Coord::new(12, 12),
            rook_to: Coord::new(12, 10),
            path: STRAIGHT[1],
            length: 3,
        },
    },
];

impl CastlingGeometry {
    #[inline]
    #[must_use]
    pub fn of(color: Color) -> &'static CastlingGeometry {
        &GEOMETRY[color.index()]
    }

    /// The lane for a castling category; `None` for [`Castling::None`].
    #[must_use]
    pub const fn lane(&self, castling: Castling) -> Option<&CastlingLane> {
        match castling {
            Castling::None => None,
            Castling::KingSide => Some(&self.king_side),
            Castling::QueenSide => Some(&self.queen_side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(from: &str, color: Color, piece: Piece, to: &str) -> Castling {
        Castling::classify(color, piece, Coord::parse(from), Coord::parse(to))
    }

    #[test]
    fn test_classify() {
        use Color::{Black, Brown, White};
        use Piece::{King, Knight, Queen};

        let cases = [
            ("a4", White, King, "a2", Castling::KingSide),
            ("a4", White, King, "a7", Castling::QueenSide),
            ("a4", Black, King, "a2", Castling::None),
            ("a4", White, King, "a5", Castling::None),
            ("a3", White, King, "a2", Castling::None),
            ("j5", Brown, King, "g2", Castling::QueenSide),
            ("j5", Brown, King, "l7", Castling::KingSide),
            ("j5", Brown, Queen, "l7", Castling::None),
            ("j5", Brown, King, "m8", Castling::None),
            ("i4", Brown, King, "l7", Castling::None),
            ("i13", Black, King, "g13", Castling::KingSide),
            ("i13", Black, King, "l13", Castling::QueenSide),
            ("i13", Black, Knight, "l13", Castling::None),
            ("j13", Black, King, "l13", Castling::None),
            ("i13", Black, King, "k13", Castling::None),
        ];
        for (from, color, piece, to, expected) in cases {
            assert_eq!(classify(from, color, piece, to), expected, "{from}-{to}");
        }
    }

    #[test]
    fn test_lane_paths_reach_king_targets() {
        for color in Color::ALL {
            let geometry = CastlingGeometry::of(color);
            for lane in [geometry.king_side, geometry.queen_side] {
                assert_eq!(geometry.king_home + lane.path * lane.length, lane.king_to);
                assert!(lane.rook_from.is_home_row());
                assert!(lane.rook_to.is_valid());
            }
        }
    }
}
