//! The [`Key`] coordinate codec.
//!
//! Search state (visited sets, frontier sets, parent maps, cost maps) is
//! keyed by [`Key`] rather than by raw coordinates: a key is a single
//! packed integer, cheap to hash and totally ordered, and the encoding is
//! reversible so a key can always be turned back into the coordinate it
//! came from.

use std::fmt;

use crate::geom::Coord;

/// A stable, reversible encoding of a [`Coord`].
///
/// The row occupies the high 32 bits and the column the low 32 bits, so
/// `decode(encode(c)) == c` for every coordinate, and the derived ordering
/// is row-major for in-bounds (non-negative) coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(pub u64);

impl Key {
    /// Encode a coordinate.
    #[inline]
    pub const fn encode(c: Coord) -> Self {
        Self(((c.row as u32 as u64) << 32) | (c.col as u32 as u64))
    }

    /// Decode back to the coordinate this key was encoded from.
    #[inline]
    pub const fn decode(self) -> Coord {
        Coord {
            row: (self.0 >> 32) as u32 as i32,
            col: self.0 as u32 as i32,
        }
    }
}

impl From<Coord> for Key {
    #[inline]
    fn from(c: Coord) -> Self {
        Self::encode(c)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.decode();
        write!(f, "{},{}", c.row, c.col)
    }
}

impl Coord {
    /// The key encoding of this coordinate. Shorthand for [`Key::encode`].
    #[inline]
    pub fn key(self) -> Key {
        Key::encode(self)
    }
}
