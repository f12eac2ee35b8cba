//! Display collaborator interface.

use crate::board::Board;
use crate::common::{ShotError, ShotOutcome, Side};
use crate::coord::Coord;

/// Everything the match controller and combatants tell the outside world.
/// The console implementation renders boards and banners; tests and the
/// simulation binary use [`SilentView`].
pub trait GameView {
    /// Render both boards. The automated board carries its own `hidden`
    /// flag, so implementations just map cell states to symbols.
    fn show_boards(&mut self, human: &Board, machine: &Board);

    /// A combatant is about to move.
    fn announce_turn(&mut self, side: Side);

    /// A shot landed and was resolved.
    fn shot_resolved(&mut self, target: Coord, outcome: ShotOutcome);

    /// A shot was rejected and will be re-chosen.
    fn shot_rejected(&mut self, target: Coord, error: &ShotError);

    /// The match reached a terminal state.
    fn announce_winner(&mut self, side: Side);
}

/// A view that discards everything.
pub struct SilentView;

impl GameView for SilentView {
    fn show_boards(&mut self, _human: &Board, _machine: &Board) {}
    fn announce_turn(&mut self, _side: Side) {}
    fn shot_resolved(&mut self, _target: Coord, _outcome: ShotOutcome) {}
    fn shot_rejected(&mut self, _target: Coord, _error: &ShotError) {}
    fn announce_winner(&mut self, _side: Side) {}
}
