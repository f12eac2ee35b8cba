//! Seeded automated-vs-automated simulation, useful for exercising placement
//! and the turn machine end to end without a console.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use sea_battle::{
    init_logging, random_board, BoardSize, Combatant, Game, RandomChooser, Side, SilentView,
};

#[derive(Parser)]
#[command(about = "Run one random-vs-random sea battle and print a JSON result")]
struct Cli {
    /// RNG seed for the first (nominally human) side.
    #[arg(long, default_value_t = 1)]
    seed_a: u64,
    /// RNG seed for the second side's board.
    #[arg(long, default_value_t = 2)]
    seed_b: u64,
    /// Board dimension, 6 or 10.
    #[arg(long, default_value_t = 6)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let size = BoardSize::from_dim(cli.size)
        .ok_or_else(|| anyhow::anyhow!("unsupported board size {}, use 6 or 10", cli.size))?;

    let mut rng_a = SmallRng::seed_from_u64(cli.seed_a);
    let mut rng_b = SmallRng::seed_from_u64(cli.seed_b);

    let board_a = random_board(&mut rng_a, size);
    let mut board_b = random_board(&mut rng_b, size);
    board_b.set_hidden(true);

    let mut game = Game::new(
        board_a,
        board_b,
        Combatant::new(Box::new(RandomChooser::new())),
        Combatant::new(Box::new(RandomChooser::new())),
    );
    let state = game.run(&mut rng_a, &mut SilentView);

    let winner = match state.winner() {
        Some(Side::Human) => "a",
        Some(Side::Automated) => "b",
        None => "none",
    };
    println!(
        "{}",
        json!({
            "size": size.dim(),
            "winner": winner,
            "turns": game.turns(),
        })
    );
    Ok(())
}
