//! Common types: shot outcomes, sides, and the error taxonomy.
//!
//! Every error here is recoverable. Placement and shot failures are handled
//! with a retry at the point of occurrence and never unwind past the current
//! placement or turn step.

use core::fmt;

use crate::bitgrid::BitGridError;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No vessel at the target cell. The turn passes.
    Miss,
    /// A vessel was damaged but still afloat. The attacker shoots again.
    Hit,
    /// The hit removed the vessel's last hit point. The attacker shoots again.
    Destroyed,
}

impl ShotOutcome {
    /// Whether this outcome grants the attacker another turn.
    pub fn grants_another_turn(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Destroyed)
    }
}

/// The two combatants of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

/// Errors returned by `Board::place_vessel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// A vessel cell is outside the board or violates the overlap/halo
    /// exclusion of an already placed vessel.
    OutOfBoundsOrOverlap,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBoundsOrOverlap => {
                write!(f, "vessel is out of bounds or overlaps an exclusion zone")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

impl From<BitGridError> for PlacementError {
    fn from(_: BitGridError) -> Self {
        PlacementError::OutOfBoundsOrOverlap
    }
}

/// Errors returned by `Board::apply_shot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotError {
    /// Target cell lies outside the board.
    OutOfBounds,
    /// Target cell was already fired upon.
    AlreadyTaken,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "shot is outside the board"),
            ShotError::AlreadyTaken => write!(f, "this cell was already fired upon"),
        }
    }
}

impl std::error::Error for ShotError {}

impl From<BitGridError> for ShotError {
    fn from(_: BitGridError) -> Self {
        ShotError::OutOfBounds
    }
}

/// Internal signal that a placement run must be abandoned: the randomized
/// strategy exceeded its attempt ceiling, or the interactive strategy filled
/// the board before completing the fleet manifest. Callers respond by
/// discarding the board and restarting the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementExhausted;

impl fmt::Display for PlacementExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to place the full fleet, the board must be rebuilt")
    }
}

impl std::error::Error for PlacementExhausted {}

/// Malformed interactive input: wrong token count, non-numeric tokens, or a
/// value outside the expected range. Consumed by console re-prompt loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    WrongTokenCount { expected: usize },
    NotANumber,
    OutOfRange(&'static str),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount { expected } => {
                write!(f, "enter exactly {} number(s)", expected)
            }
            InputError::NotANumber => write!(f, "enter numbers only"),
            InputError::OutOfRange(what) => write!(f, "{}", what),
        }
    }
}

impl std::error::Error for InputError {}
