//! Match controller: the turn-alternation state machine.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::Side;
use crate::player::Combatant;
use crate::view::GameView;

/// Match state. The human always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingHumanTurn,
    AwaitingAutomatedTurn,
    HumanWon,
    AutomatedWon,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::HumanWon | TurnState::AutomatedWon)
    }

    /// The side about to move, if the match is still running.
    pub fn active_side(&self) -> Option<Side> {
        match self {
            TurnState::AwaitingHumanTurn => Some(Side::Human),
            TurnState::AwaitingAutomatedTurn => Some(Side::Automated),
            _ => None,
        }
    }

    /// The winner, if the match is over.
    pub fn winner(&self) -> Option<Side> {
        match self {
            TurnState::HumanWon => Some(Side::Human),
            TurnState::AutomatedWon => Some(Side::Automated),
            _ => None,
        }
    }

    fn awaiting(side: Side) -> TurnState {
        match side {
            Side::Human => TurnState::AwaitingHumanTurn,
            Side::Automated => TurnState::AwaitingAutomatedTurn,
        }
    }
}

/// Owns both boards and both combatants for the lifetime of one match and
/// drives turns until a fleet is destroyed.
pub struct Game {
    human_board: Board,
    machine_board: Board,
    human: Combatant,
    machine: Combatant,
    state: TurnState,
    turns: usize,
}

impl Game {
    pub fn new(
        human_board: Board,
        machine_board: Board,
        human: Combatant,
        machine: Combatant,
    ) -> Self {
        Game {
            human_board,
            machine_board,
            human,
            machine,
            state: TurnState::AwaitingHumanTurn,
            turns: 0,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Turns played so far (each repeat shot counts as a turn).
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    pub fn machine_board(&self) -> &Board {
        &self.machine_board
    }

    /// Play a single turn: render, let the active combatant shoot, then
    /// settle the next state. A hit or destroyed outcome keeps the turn with
    /// the same side; only a miss passes it. Defeat is checked after every
    /// turn, the automated board first so a simultaneous read favors the
    /// human.
    pub fn step(&mut self, rng: &mut SmallRng, view: &mut dyn GameView) -> TurnState {
        let side = match self.state.active_side() {
            Some(side) => side,
            None => return self.state,
        };
        view.show_boards(&self.human_board, &self.machine_board);
        view.announce_turn(side);

        let again = match side {
            Side::Human => self.human.take_turn(rng, &mut self.machine_board, view),
            Side::Automated => self.machine.take_turn(rng, &mut self.human_board, view),
        };
        self.turns += 1;

        self.state = if self.machine_board.defeat() {
            TurnState::HumanWon
        } else if self.human_board.defeat() {
            TurnState::AutomatedWon
        } else if again {
            TurnState::awaiting(side)
        } else {
            TurnState::awaiting(side.opponent())
        };
        if self.state.is_terminal() {
            debug!("match over after {} turns: {:?}", self.turns, self.state);
        }
        self.state
    }

    /// Drive the match to a terminal state and announce the winner.
    pub fn run(&mut self, rng: &mut SmallRng, view: &mut dyn GameView) -> TurnState {
        while !self.state.is_terminal() {
            self.step(rng, view);
        }
        view.show_boards(&self.human_board, &self.machine_board);
        if let Some(winner) = self.state.winner() {
            view.announce_winner(winner);
        }
        self.state
    }
}
