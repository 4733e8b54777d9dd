//! Board coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 64 board squares, identified by file (a-h) and rank (1-8).
///
/// Stored as a single index `rank * 8 + file` with a1 = 0 and h8 = 63.
/// The index gives a total enumeration order; it carries no arithmetic
/// meaning beyond coordinate identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Square(u8);

impl Square {
    /// Build a square from zero-based file (0 = a) and rank (0 = rank 1).
    ///
    /// Returns `None` if either coordinate is out of range.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then(|| Self(rank * 8 + file))
    }

    /// Build a square from its enumeration index (`0..64`).
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 64).then_some(Self(index))
    }

    /// Enumeration index, `0..64`.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Zero-based file, 0 = a.
    #[inline]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank, 0 = rank 1.
    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// All 64 squares in enumeration order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file()), self.rank() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_round_trip() {
        let e4 = Square::new(4, 3).expect("in range");
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(Square::from_index(e4.index() as u8), Some(e4));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn enumeration_covers_the_board_in_order() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_string(), "a1");
        assert_eq!(all[7].to_string(), "h1");
        assert_eq!(all[63].to_string(), "h8");
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
