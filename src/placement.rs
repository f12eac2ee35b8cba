//! Fleet placement strategies.
//!
//! Both strategies fill a fresh board with the manifest for its size and
//! clear the placement exclusions before handing the board over, so that the
//! exclusion machinery can start recording shots instead. Random placement
//! can self-block (halos eat free area faster than the manifest shrinks),
//! and there is no backtracking: a failed run is discarded whole and retried.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::PlacementExhausted;
use crate::config::{BoardSize, MAX_RANDOM_ATTEMPTS};
use crate::coord::Coord;
use crate::vessel::{Orientation, Vessel};

/// Input collaborator for the interactive strategy. Implementations must
/// hand back a syntactically valid request (re-prompting internally on
/// malformed input); geometric validity is the board's call.
pub trait PlacementSource {
    /// Ask for a bow coordinate and orientation for a vessel of `length`.
    fn request_placement(&mut self, board: &Board, length: usize) -> (Coord, Orientation);

    /// The last request was rejected by the board; the same length will be
    /// requested again.
    fn placement_rejected(&mut self, length: usize);

    /// The board filled up before the manifest was exhausted and the whole
    /// placement sequence is being restarted.
    fn board_abandoned(&mut self);
}

/// One randomized placement run. Samples uniform bows and orientations per
/// manifest entry, sharing a single attempt budget across the whole fleet;
/// exceeding it abandons the board.
pub fn try_random_fleet(rng: &mut SmallRng, size: BoardSize) -> Result<Board, PlacementExhausted> {
    let dim = size.dim() as i32;
    let mut board = Board::new(size);
    let mut attempts: u32 = 0;
    for &length in size.manifest() {
        loop {
            attempts += 1;
            if attempts > MAX_RANDOM_ATTEMPTS {
                return Err(PlacementExhausted);
            }
            let bow = Coord::new(rng.random_range(0..dim), rng.random_range(0..dim));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board.place_vessel(Vessel::new(bow, length, orientation)).is_ok() {
                break;
            }
        }
    }
    board.finish_placement();
    Ok(board)
}

/// Randomized placement with whole-board retry. Loops fresh boards until a
/// run completes the manifest.
pub fn random_board(rng: &mut SmallRng, size: BoardSize) -> Board {
    loop {
        match try_random_fleet(rng, size) {
            Ok(board) => return board,
            Err(PlacementExhausted) => {
                debug!("random placement exhausted its attempt budget, rebuilding the board");
            }
        }
    }
}

/// One interactive placement run. Requests each manifest entry from the
/// collaborator, re-requesting the same length on rejection without any
/// attempt ceiling; only a full board abandons the run.
pub fn try_interactive_fleet(
    source: &mut dyn PlacementSource,
    size: BoardSize,
) -> Result<Board, PlacementExhausted> {
    let mut board = Board::new(size);
    for &length in size.manifest() {
        loop {
            if board.is_full() {
                source.board_abandoned();
                return Err(PlacementExhausted);
            }
            let (bow, orientation) = source.request_placement(&board, length);
            match board.place_vessel(Vessel::new(bow, length, orientation)) {
                Ok(()) => break,
                Err(_) => source.placement_rejected(length),
            }
        }
    }
    board.finish_placement();
    Ok(board)
}

/// Interactive placement with whole-board retry.
pub fn interactive_board(source: &mut dyn PlacementSource, size: BoardSize) -> Board {
    loop {
        match try_interactive_fleet(source, size) {
            Ok(board) => return board,
            Err(PlacementExhausted) => {
                debug!("interactive placement ran out of room, restarting the sequence");
            }
        }
    }
}
