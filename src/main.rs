use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::console::{
    greet, prompt_board_size, prompt_placement_mode, ConsoleChooser, ConsolePlacer, ConsoleView,
};
use sea_battle::{
    init_logging, interactive_board, random_board, Combatant, Game, PlacementMode, RandomChooser,
};

fn main() -> anyhow::Result<()> {
    init_logging();

    greet();
    let size = prompt_board_size();
    let mode = prompt_placement_mode();

    let mut seed_rng = rand::rng();
    let mut rng = SmallRng::from_rng(&mut seed_rng);

    let human_board = match mode {
        PlacementMode::Randomized => random_board(&mut rng, size),
        PlacementMode::Interactive => {
            let mut placer = ConsolePlacer::new();
            interactive_board(&mut placer, size)
        }
    };

    let mut machine_board = random_board(&mut rng, size);
    machine_board.set_hidden(true);

    let human = Combatant::new(Box::new(ConsoleChooser::new()));
    let machine = Combatant::new(Box::new(RandomChooser::new()));

    let mut game = Game::new(human_board, machine_board, human, machine);
    let mut view = ConsoleView::new();
    game.run(&mut rng, &mut view);

    Ok(())
}
