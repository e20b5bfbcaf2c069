//! A set of player colors stored as a bitmask.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Set of colors, used for the check set and the castling-forbidden set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Color>", into = "Vec<Color>"))]
pub struct ColorSet(u8);

impl ColorSet {
    #[must_use]
    pub const fn empty() -> Self {
        ColorSet(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        ColorSet(0b111)
    }

    #[inline]
    const fn bit(color: Color) -> u8 {
        1 << color.index()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & Self::bit(color) != 0
    }

    /// Add a color, returning true if it was not present
    #[inline]
    pub fn insert(&mut self, color: Color) -> bool {
        let added = !self.contains(color);
        self.0 |= Self::bit(color);
        added
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in turn order
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::empty();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl From<Vec<Color>> for ColorSet {
    fn from(colors: Vec<Color>) -> Self {
        colors.into_iter().collect()
    }
}

impl From<ColorSet> for Vec<Color> {
    fn from(set: ColorSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
