//! Vessel geometry and hit points.

use crate::coord::Coord;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Decode the interactive placement flag: 0 → horizontal, 1 → vertical.
    pub fn from_flag(flag: u32) -> Option<Orientation> {
        match flag {
            0 => Some(Orientation::Horizontal),
            1 => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// A straight-line vessel anchored at its bow. Created once at placement
/// time; only `remaining_hits` changes afterwards, decremented on confirmed
/// hits. Never resized or moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Construct a vessel at `bow` extending `length` cells along
    /// `orientation`. No bounds checking happens here; the board validates
    /// every cell at placement time.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length >= 1);
        Vessel {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// The cells the vessel occupies, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dr, dc) = match self.orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };
        (0..self.length as i32).map(move |i| self.bow.offset(dr * i, dc * i))
    }

    /// Whether the vessel occupies `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register one confirmed hit, consuming a hit point.
    pub fn register_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    /// A vessel is destroyed once every cell has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}
