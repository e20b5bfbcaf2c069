//! Attack enumeration and check detection.

use crate::board::{Board, Color, ColorSet, Coord, Direction, Family, Figure, Move, Piece};

use super::rules::{is_diagonal_free_to_move, is_valid_attack};

/// The first occupied square reached from `at` along every direction of
/// `family`.
///
/// Straight rays stop at the first occupied square. Diagonal rays also stop
/// where the adjacency rule blocks the next step. Jumps look one hop away.
#[must_use]
pub fn scan(board: &Board, at: Coord, family: Family) -> Vec<Coord> {
    let mut found = Vec::new();
    for &dir in family.directions() {
        let hit = match family {
            Family::Straight => ray(board, at, dir, false),
            Family::Diagonal if is_diagonal_free_to_move(board, at, dir) => {
                ray(board, at, dir, true)
            }
            Family::Diagonal => None,
            Family::Jump => Some(at + dir),
        };
        if let Some(square) = hit {
            if square.is_valid() && !board.get(square).is_empty() {
                found.push(square);
            }
        }
    }
    found
}

fn ray(board: &Board, from: Coord, dir: Direction, diagonal: bool) -> Option<Coord> {
    let mut at = from + dir;
    while at.is_valid() && board.get(at).is_empty() {
        if diagonal && !is_diagonal_free_to_move(board, at, dir) {
            return None;
        }
        at = at + dir;
    }
    Some(at)
}

/// Squares in `family` holding an opponent of `color` of one of `pieces`
/// that can legally attack `at`.
fn attackers(
    board: &Board,
    color: Color,
    at: Coord,
    family: Family,
    pieces: &[Piece],
) -> Vec<Coord> {
    scan(board, at, family)
        .into_iter()
        .filter(|&square| match board.get(square) {
            Figure::Occupied { color: owner, piece } => {
                owner != color
                    && pieces.contains(&piece)
                    && is_valid_attack(
                        board,
                        Move::new(square, board.get(square), at, Figure::Empty),
                    )
            }
            Figure::Empty => false,
        })
        .collect()
}

/// Opponent rooks, kings and queens attacking `at` along straight lines.
#[must_use]
pub fn attacks_straight(board: &Board, color: Color, at: Coord) -> Vec<Coord> {
    attackers(
        board,
        color,
        at,
        Family::Straight,
        &[Piece::Rook, Piece::King, Piece::Queen],
    )
}

/// Opponent bishops, kings, queens and pawns attacking `at` diagonally.
#[must_use]
pub fn attacks_diagonal(board: &Board, color: Color, at: Coord) -> Vec<Coord> {
    attackers(
        board,
        color,
        at,
        Family::Diagonal,
        &[Piece::Bishop, Piece::King, Piece::Queen, Piece::Pawn],
    )
}

/// Opponent knights attacking `at`.
#[must_use]
pub fn attacks_jump(board: &Board, color: Color, at: Coord) -> Vec<Coord> {
    attackers(board, color, at, Family::Jump, &[Piece::Knight])
}

/// Every square from which an opponent of `color` attacks `at`. Empty for an
/// off-board square.
#[must_use]
pub fn attacks(board: &Board, color: Color, at: Coord) -> Vec<Coord> {
    if !at.is_valid() {
        return Vec::new();
    }
    let mut found = attacks_straight(board, color, at);
    found.extend(attacks_diagonal(board, color, at));
    found.extend(attacks_jump(board, color, at));
    found
}

/// Colors whose king is attacked by any opponent. A color without a king on
/// the board is never in check.
#[must_use]
pub fn checked_colors(board: &Board) -> ColorSet {
    Color::ALL
        .into_iter()
        .filter(|&color| !attacks(board, color, board.kings_position(color)).is_empty())
        .collect()
}

/// Recompute the check set of `board` and publish it.
pub fn recompute_checks(board: &mut Board) {
    let check = checked_colors(board);
    board.set_check(check);
}
