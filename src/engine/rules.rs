//! Piece movement rules.
//!
//! Every predicate here is total: invalid coordinates, empty source squares
//! and unknown geometry simply yield `false`. None of them mutate the board.

use crate::board::{Board, CastlingGeometry, Color, Coord, Direction, Family, Figure, Move, Piece};

use super::attacks::attacks;

/// Inclusive window of direction indices; wraps past the end of the family
/// when `first > last`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cone {
    first: usize,
    last: usize,
}

impl Cone {
    const fn contains(self, index: usize) -> bool {
        if self.first <= self.last {
            index >= self.first && index <= self.last
        } else {
            index >= self.first || index <= self.last
        }
    }
}

const fn cone(first: usize, last: usize) -> Cone {
    Cone { first, last }
}

/// Forward cones, indexed `[family][color]`.
#[rustfmt::skip]
const FORWARD: [[Cone; 3]; 3] = [
    //  White        Brown        Black
    [cone(1, 2), cone(3, 4), cone(5, 0)], // straight
    [cone(0, 2), cone(2, 4), cone(4, 0)], // diagonal
    [cone(0, 5), cone(4, 9), cone(8, 2)], // jump
];

/// Whether `dir` points toward the opponents of `color`.
#[must_use]
pub fn is_forward(dir: Direction, color: Color) -> bool {
    FORWARD[dir.family().index()][color.index()].contains(dir.index())
}

/// Whether `coord` is on the line the pawns of `color` start from.
#[must_use]
pub fn is_pawn_baseline(coord: Coord, color: Color) -> bool {
    match color {
        Color::White => coord.rank() == 1,
        Color::Brown => coord.rank().checked_sub(coord.file()) == Some(4),
        Color::Black => coord.file() == 11,
    }
}

/// Whether a diagonal step from `at` along `dir` can pass between its two
/// straight neighbours: at least one of them must be empty.
///
/// Off-board neighbours count as empty.
#[must_use]
pub fn is_diagonal_free_to_move(board: &Board, at: Coord, dir: Direction) -> bool {
    let straight = Direction::get(Family::Straight, dir.index());
    board.get(at + straight).is_empty() || board.get(at + straight.rotate_right()).is_empty()
}

/// Whether the `length` squares after `from` along `dir` are on the board and
/// empty. Diagonal steps must also pass the adjacency rule. With `length`
/// zero only the adjacency of the first diagonal step is checked.
#[must_use]
pub fn is_free(board: &Board, from: Coord, dir: Direction, length: i32) -> bool {
    let diagonal = dir.family() == Family::Diagonal;
    if length == 0 {
        return !diagonal || is_diagonal_free_to_move(board, from, dir);
    }

    let mut at = from;
    for _ in 0..length {
        if diagonal && !is_diagonal_free_to_move(board, at, dir) {
            return false;
        }
        at = at + dir;
        if !at.is_valid() || !board.get(at).is_empty() {
            return false;
        }
    }
    true
}

/// Like [`is_free`], and additionally no square on the way may be attacked
/// by an opponent of `color`.
#[must_use]
pub fn is_safe(board: &Board, color: Color, from: Coord, dir: Direction, length: i32) -> bool {
    let diagonal = dir.family() == Family::Diagonal;
    let mut at = from;
    for _ in 0..length {
        if diagonal && !is_diagonal_free_to_move(board, at, dir) {
            return false;
        }
        at = at + dir;
        if !at.is_valid() || !board.get(at).is_empty() {
            return false;
        }
        if !attacks(board, color, at).is_empty() {
            return false;
        }
    }
    true
}

/// Slide of `distance` steps: every square before the destination is empty
/// and every diagonal step, the last included, passes the adjacency rule.
fn is_slide_clear(board: &Board, from: Coord, dir: Direction, distance: i32) -> bool {
    let last = from + dir * (distance - 1);
    is_free(board, from, dir, distance - 1)
        && (dir.family() != Family::Diagonal || is_diagonal_free_to_move(board, last, dir))
}

fn slide(board: &Board, mv: Move, families: &[Family]) -> bool {
    match Direction::find(mv.from(), mv.to()) {
        Some((dir, distance)) if families.contains(&dir.family()) => {
            is_slide_clear(board, mv.from(), dir, distance)
        }
        _ => false,
    }
}

fn knight(mv: Move) -> bool {
    matches!(
        Direction::find(mv.from(), mv.to()),
        Some((dir, 1)) if dir.family() == Family::Jump
    )
}

fn king_step(board: &Board, mv: Move) -> bool {
    match Direction::find(mv.from(), mv.to()) {
        Some((dir, 1)) => match dir.family() {
            Family::Straight => true,
            Family::Diagonal => is_diagonal_free_to_move(board, mv.from(), dir),
            Family::Jump => false,
        },
        _ => false,
    }
}

/// Castling: rights intact, not in check, own rook in place, and the king's
/// path empty and unattacked.
fn king_castling(board: &Board, color: Color, mv: Move) -> bool {
    if board.is_castling_forbidden(color) || board.is_check(color) {
        return false;
    }
    let Some(lane) = CastlingGeometry::of(color).lane(mv.castling()) else {
        return false;
    };
    board.get(lane.rook_from).is(color, Piece::Rook)
        && is_safe(board, color, mv.from(), lane.path, lane.length)
}

fn pawn_step(board: &Board, color: Color, mv: Move) -> bool {
    let Some((dir, distance)) = Direction::find(mv.from(), mv.to()) else {
        return false;
    };
    if !is_forward(dir, color) || dir.family() != Family::Straight {
        return false;
    }
    match distance {
        1 => board.get(mv.from() + dir).is_empty(),
        2 => is_pawn_baseline(mv.from(), color) && is_free(board, mv.from(), dir, 2),
        _ => false,
    }
}

fn pawn_capture(board: &Board, color: Color, mv: Move) -> bool {
    match Direction::find(mv.from(), mv.to()) {
        Some((dir, 1)) => {
            is_forward(dir, color)
                && dir.family() == Family::Diagonal
                && is_diagonal_free_to_move(board, mv.from(), dir)
        }
        _ => false,
    }
}

/// Whether the moving figure may go to an empty destination.
///
/// Castling is tried before the plain king step.
#[must_use]
pub fn is_valid_move(board: &Board, mv: Move) -> bool {
    let Figure::Occupied { color, piece } = mv.figure() else {
        return false;
    };
    match piece {
        Piece::Knight => knight(mv),
        Piece::Rook => slide(board, mv, &[Family::Straight]),
        Piece::Bishop => slide(board, mv, &[Family::Diagonal]),
        Piece::Queen => slide(board, mv, &[Family::Straight, Family::Diagonal]),
        Piece::King => king_castling(board, color, mv) || king_step(board, mv),
        Piece::Pawn => pawn_step(board, color, mv),
    }
}

/// Whether the moving figure may attack the destination. The destination's
/// content is not inspected.
#[must_use]
pub fn is_valid_attack(board: &Board, mv: Move) -> bool {
    let Figure::Occupied { color, piece } = mv.figure() else {
        return false;
    };
    match piece {
        Piece::Knight => knight(mv),
        Piece::Rook => slide(board, mv, &[Family::Straight]),
        Piece::Bishop => slide(board, mv, &[Family::Diagonal]),
        Piece::Queen => slide(board, mv, &[Family::Straight, Family::Diagonal]),
        Piece::King => king_step(board, mv),
        Piece::Pawn => pawn_capture(board, color, mv),
    }
}
