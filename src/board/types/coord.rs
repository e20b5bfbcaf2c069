//! Board coordinates.
//!
//! A coordinate is a `(file, rank)` pair over a virtual 13x13 grid. Only a
//! hexagonal subset of the grid belongs to the board; everything else,
//! including the [`Coord::INVALID`] sentinel, is off-board and matches
//! nothing.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordError;

/// Side length of the backing grid.
pub const GRID_SIZE: usize = 13;

static VALID_COORDS: Lazy<Vec<Coord>> = Lazy::new(|| {
    let mut coords = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for rank in 0..GRID_SIZE as i32 {
        for file in 0..GRID_SIZE as i32 {
            let coord = Coord::new(file, rank);
            if coord.is_valid() {
                coords.push(coord);
            }
        }
    }
    coords
});

/// A square of the hexagonal board, or an off-board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    file: i32,
    rank: i32,
}

impl Coord {
    /// The distinguished off-board coordinate.
    pub const INVALID: Coord = Coord::new(-1, -1);

    #[inline]
    #[must_use]
    pub const fn new(file: i32, rank: i32) -> Self {
        Coord { file, rank }
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> i32 {
        self.file
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.rank
    }

    /// Returns true if the coordinate lies on the hexagonal board.
    ///
    /// Ranks 0-5 hold files `0..8 + rank`; ranks 6-12 hold files
    /// `rank - 5..13`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        if self.file < 0 || self.rank < 0 {
            return false;
        }
        if self.rank <= 5 {
            return self.file < 8 + self.rank;
        }
        self.rank < 13 && self.file < 13 && self.file >= self.rank - 5
    }

    /// Returns true for squares on one of the three back rows.
    #[must_use]
    pub const fn is_home_row(self) -> bool {
        self.is_valid() && (self.rank == 0 || self.rank - self.file == 5 || self.file == 12)
    }

    /// All on-board coordinates, rank by rank, files ascending.
    #[must_use]
    pub fn all_valid() -> &'static [Coord] {
        &VALID_COORDS
    }

    /// Exact integer ratio `self / by`, if `self` is a whole multiple of `by`.
    ///
    /// Axis-aligned divisors are handled with integer arithmetic; a quotient
    /// that overflows is no match. The oblique
    /// case compares the two per-axis quotients as `f64` for exact equality
    /// and truncates the shared quotient.
    #[must_use]
    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    pub fn divide(self, by: Coord) -> Option<i32> {
        if by.file == 0 {
            if self.file != 0 {
                return None;
            }
            if by.rank == 0 {
                return (self.rank == 0).then_some(1);
            }
            return self.rank.checked_div(by.rank);
        }

        if by.rank == 0 {
            if self.rank != 0 {
                return None;
            }
            return self.file.checked_div(by.file);
        }

        let file_ratio = f64::from(self.file) / f64::from(by.file);
        let rank_ratio = f64::from(self.rank) / f64::from(by.rank);

        if file_ratio != rank_ratio
            || file_ratio < f64::from(i32::MIN)
            || file_ratio > f64::from(i32::MAX)
        {
            return None;
        }
        Some(file_ratio as i32)
    }

    /// Displacement `self - rhs`, or `None` if it does not fit an `i32`.
    #[must_use]
    pub fn checked_sub(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.file.checked_sub(rhs.file)?,
            self.rank.checked_sub(rhs.rank)?,
        ))
    }

    /// Parse `"<rank letter><file number>"`, e.g. `"a1"` or `"m13"`.
    ///
    /// Malformed text yields [`Coord::INVALID`]. Well-formed text naming an
    /// off-board square yields that (invalid) coordinate; callers test the
    /// result with [`Coord::is_valid`].
    #[must_use]
    pub fn parse(text: &str) -> Coord {
        let len = text.chars().count();
        if !(2..=3).contains(&len) {
            return Coord::INVALID;
        }
        let mut chars = text.chars();
        let Some(letter) = chars.next() else {
            return Coord::INVALID;
        };
        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Coord::INVALID;
        }
        let Ok(number) = digits.parse::<i32>() else {
            return Coord::INVALID;
        };
        Coord::new(number - 1, letter as i32 - 'a' as i32)
    }
}

impl Default for Coord {
    fn default() -> Self {
        Coord::INVALID
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(
            self.file.saturating_add(rhs.file),
            self.rank.saturating_add(rhs.rank),
        )
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(
            self.file.saturating_sub(rhs.file),
            self.rank.saturating_sub(rhs.rank),
        )
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.file.saturating_mul(rhs), self.rank.saturating_mul(rhs))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !(0..26).contains(&self.rank) || self.file < 0 {
            return write!(f, "-");
        }
        write!(f, "{}{}", (b'a' + self.rank as u8) as char, i64::from(self.file) + 1)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coord = Coord::parse(s);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(CoordError::InvalidNotation {
                notation: s.to_string(),
            })
        }
    }
}
