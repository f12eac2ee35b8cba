//! Combatants and target selection.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::config::BoardSize;
use crate::coord::Coord;
use crate::view::GameView;

/// Target selection capability. The automated variant samples uniformly;
/// the console variant asks the human. Either may return a coordinate that
/// the enemy board rejects — `Combatant::take_turn` retries at the move
/// level, so choosers need no shot memory.
pub trait TargetChooser {
    fn choose_target(&mut self, rng: &mut SmallRng, size: BoardSize) -> Coord;
}

/// Uniform-random targeting over the full board range, with no memory of
/// past shots.
pub struct RandomChooser;

impl RandomChooser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetChooser for RandomChooser {
    fn choose_target(&mut self, rng: &mut SmallRng, size: BoardSize) -> Coord {
        let dim = size.dim() as i32;
        Coord::new(rng.random_range(0..dim), rng.random_range(0..dim))
    }
}

/// One side of the match: a target chooser firing at the opponent's board.
/// The combatant never touches the opponent's board except through
/// `apply_shot`.
pub struct Combatant {
    chooser: Box<dyn TargetChooser>,
}

impl Combatant {
    pub fn new(chooser: Box<dyn TargetChooser>) -> Self {
        Combatant { chooser }
    }

    /// Play one turn against `enemy`. Rejected shots (out of bounds or
    /// already taken) are reported to the view and re-chosen without ending
    /// the turn. Returns true iff the outcome grants another turn.
    pub fn take_turn(
        &mut self,
        rng: &mut SmallRng,
        enemy: &mut Board,
        view: &mut dyn GameView,
    ) -> bool {
        loop {
            let target = self.chooser.choose_target(rng, enemy.size());
            match enemy.apply_shot(target) {
                Ok(outcome) => {
                    view.shot_resolved(target, outcome);
                    return outcome.grants_another_turn();
                }
                Err(err) => view.shot_rejected(target, &err),
            }
        }
    }
}
