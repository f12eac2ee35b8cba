//! Grid coordinates.

use core::fmt;

/// A position on (or off) the board. Signed so that halo offsets and
/// out-of-range targets stay representable; bounds are the board's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// The coordinate shifted by `(dr, dc)`.
    pub const fn offset(&self, dr: i32, dc: i32) -> Self {
        Coord {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based, the way the console talks about cells
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Offsets covering a cell and its 8-neighborhood, used for contour marking.
pub const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
