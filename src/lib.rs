mod bitgrid;
mod board;
mod common;
mod config;
pub mod console;
mod coord;
mod game;
mod logging;
mod placement;
mod player;
mod vessel;
mod view;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::{Board, CellState};
pub use common::{
    InputError, PlacementError, PlacementExhausted, ShotError, ShotOutcome, Side,
};
pub use config::{
    BoardSize, PlacementMode, LARGE_MANIFEST, MAX_RANDOM_ATTEMPTS, SMALL_MANIFEST,
};
pub use coord::{Coord, NEIGHBORHOOD};
pub use game::{Game, TurnState};
pub use logging::init_logging;
pub use placement::{
    interactive_board, random_board, try_interactive_fleet, try_random_fleet, PlacementSource,
};
pub use player::{Combatant, RandomChooser, TargetChooser};
pub use vessel::{Orientation, Vessel};
pub use view::{GameView, SilentView};
