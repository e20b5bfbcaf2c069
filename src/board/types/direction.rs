//! Direction catalogues for the triangular tiling.
//!
//! Straight and diagonal directions are enumerated in the same rotational
//! order, so index `i` of both families points at the same bearing. Diagonal
//! `i` is the sum of straight `i` and straight `i + 1`.

use std::fmt;
use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A family of directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Family {
    Straight,
    Diagonal,
    Jump,
}

impl Family {
    /// Families in the order [`Direction::find`] tries them.
    pub const ALL: [Family; 3] = [Family::Straight, Family::Diagonal, Family::Jump];

    #[inline]
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Family::Straight | Family::Diagonal => 6,
            Family::Jump => 12,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Family::Straight => 0,
            Family::Diagonal => 1,
            Family::Jump => 2,
        }
    }

    /// The catalogue of this family, in index order.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Family::Straight => &STRAIGHT,
            Family::Diagonal => &DIAGONAL,
            Family::Jump => &JUMP,
        }
    }
}

/// A catalogued unit displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    delta: Coord,
    family: Family,
    index: usize,
}

const fn dir(file: i32, rank: i32, family: Family, index: usize) -> Direction {
    Direction {
        delta: Coord::new(file, rank),
        family,
        index,
    }
}

#[rustfmt::skip]
pub const STRAIGHT: [Direction; 6] = [
    dir(-1,  0, Family::Straight, 0),
    dir( 0,  1, Family::Straight, 1),
    dir( 1,  1, Family::Straight, 2),
    dir( 1,  0, Family::Straight, 3),
    dir( 0, -1, Family::Straight, 4),
    dir(-1, -1, Family::Straight, 5),
];

#[rustfmt::skip]
pub const DIAGONAL: [Direction; 6] = [
    dir(-1,  1, Family::Diagonal, 0),
    dir( 1,  2, Family::Diagonal, 1),
    dir( 2,  1, Family::Diagonal, 2),
    dir( 1, -1, Family::Diagonal, 3),
    dir(-1, -2, Family::Diagonal, 4),
    dir(-2, -1, Family::Diagonal, 5),
];

#[rustfmt::skip]
pub const JUMP: [Direction; 12] = [
    dir(-2,  1, Family::Jump, 0),
    dir(-1,  2, Family::Jump, 1),
    dir( 1,  3, Family::Jump, 2),
    dir( 2,  3, Family::Jump, 3),
    dir( 3,  2, Family::Jump, 4),
    dir( 3,  1, Family::Jump, 5),
    dir( 2, -1, Family::Jump, 6),
    dir( 1, -2, Family::Jump, 7),
    dir(-1, -3, Family::Jump, 8),
    dir(-2, -3, Family::Jump, 9),
    dir(-3, -1, Family::Jump, 10),
    dir(-3, -2, Family::Jump, 11),
];

impl Direction {
    /// Look up a direction; `index` wraps around the family size.
    #[inline]
    #[must_use]
    pub const fn get(family: Family, index: usize) -> Direction {
        family.directions()[index % family.size()]
    }

    #[inline]
    #[must_use]
    pub const fn delta(self) -> Coord {
        self.delta
    }

    #[inline]
    #[must_use]
    pub const fn family(self) -> Family {
        self.family
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn rotate_left(self) -> Direction {
        Direction::get(self.family, self.index + self.family.size() - 1)
    }

    #[must_use]
    pub const fn rotate_right(self) -> Direction {
        Direction::get(self.family, self.index + 1)
    }

    /// Find the catalogued direction and distance leading from `source` to
    /// `destination`.
    ///
    /// Families are tried straight, diagonal, jump; the first direction the
    /// displacement is a positive whole multiple of wins. The sentinel
    /// coordinate matches nothing, and neither does a displacement too large
    /// for an `i32`.
    #[must_use]
    pub fn find(source: Coord, destination: Coord) -> Option<(Direction, i32)> {
        if source == Coord::INVALID || destination == Coord::INVALID {
            return None;
        }
        let diff = destination.checked_sub(source)?;
        Family::ALL
            .iter()
            .flat_map(|family| family.directions())
            .find_map(|&dir| match diff.divide(dir.delta) {
                Some(distance) if distance > 0 => Some((dir, distance)),
                _ => None,
            })
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Direction) -> Coord {
        self + rhs.delta
    }
}

impl Mul<i32> for Direction {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        self.delta * rhs
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}[{}]({}, {})",
            self.family,
            self.index,
            self.delta.file(),
            self.delta.rank()
        )
    }
}
