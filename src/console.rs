//! Console implementations of the input and display collaborators.
//!
//! All parsing failures are `InputError` values consumed by local re-prompt
//! loops; nothing malformed ever reaches the core. Coordinates are 1-based
//! on the console and converted to 0-based at the boundary.

use std::io::{self, BufRead, Write};

use crate::board::{Board, CellState};
use crate::common::{InputError, ShotError, ShotOutcome, Side};
use crate::config::{BoardSize, PlacementMode};
use crate::coord::Coord;
use crate::placement::PlacementSource;
use crate::player::TargetChooser;
use crate::vessel::Orientation;
use crate::view::GameView;
use rand::rngs::SmallRng;

fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Halo => '+',
        CellState::DestroyedHalo => '*',
    }
}

/// Render a board with 1-based row and column headers.
pub fn render_board(board: &Board) -> String {
    let dim = board.dim();
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..dim {
        out.push_str(&format!("{:2} ", c + 1));
    }
    out.push('\n');
    for (r, row) in board.grid().iter().enumerate() {
        out.push_str(&format!("{:2} |", r + 1));
        for &state in row {
            out.push_str(&format!(" {} |", symbol(state)));
        }
        out.push('\n');
    }
    out
}

/// Read one trimmed line from stdin. EOF ends the process: the game keeps
/// no state worth saving.
fn read_line() -> String {
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!("\nGoodbye!");
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}

/// Parse exactly `expected` whitespace-separated unsigned integers.
fn parse_numbers(line: &str, expected: usize) -> Result<Vec<u32>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(InputError::WrongTokenCount { expected });
    }
    tokens
        .iter()
        .map(|t| t.parse::<u32>().map_err(|_| InputError::NotANumber))
        .collect()
}

/// A 1-based console coordinate pair, converted to 0-based. Zero is not a
/// valid 1-based coordinate, so it is rejected here rather than underflowing.
fn parse_coord(line: &str) -> Result<Coord, InputError> {
    let nums = parse_numbers(line, 2)?;
    if nums[0] == 0 || nums[1] == 0 {
        return Err(InputError::OutOfRange("coordinates start at 1"));
    }
    Ok(Coord::new(nums[0] as i32 - 1, nums[1] as i32 - 1))
}

/// Print the greeting and the two game variants.
pub fn greet() {
    println!("------------------------");
    println!("  Welcome to Sea Battle ");
    println!("------------------------");
    println!("Two game variants are available:");
    println!("1 - 6x6 board with 7 vessels");
    println!("2 - 10x10 board with 10 vessels");
}

/// Ask for the board size until the answer is exactly 1 or 2.
pub fn prompt_board_size() -> BoardSize {
    loop {
        print!("Which variant do you choose, 1 or 2? ");
        match parse_numbers(&read_line(), 1)
            .and_then(|nums| BoardSize::from_choice(nums[0]).ok_or(InputError::OutOfRange("enter 1 or 2")))
        {
            Ok(size) => return size,
            Err(e) => println!("{}", e),
        }
    }
}

/// Ask how the fleet should be placed: 0 randomized, 1 manual.
pub fn prompt_placement_mode() -> PlacementMode {
    loop {
        print!("Place your vessels randomly or yourself (0 - randomly, 1 - yourself)? ");
        match parse_numbers(&read_line(), 1)
            .and_then(|nums| PlacementMode::from_choice(nums[0]).ok_or(InputError::OutOfRange("enter 0 or 1")))
        {
            Ok(mode) => return mode,
            Err(e) => println!("{}", e),
        }
    }
}

/// Interactive target selection: two 1-based coordinates per shot.
pub struct ConsoleChooser;

impl ConsoleChooser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetChooser for ConsoleChooser {
    fn choose_target(&mut self, _rng: &mut SmallRng, _size: BoardSize) -> Coord {
        loop {
            print!("Your shot (row column): ");
            match parse_coord(&read_line()) {
                Ok(coord) => return coord,
                Err(e) => println!("{}", e),
            }
        }
    }
}

/// Interactive fleet placement: bow coordinates plus an orientation flag.
pub struct ConsolePlacer;

impl ConsolePlacer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementSource for ConsolePlacer {
    fn request_placement(&mut self, board: &Board, length: usize) -> (Coord, Orientation) {
        println!("{}", render_board(board));
        loop {
            print!(
                "Place a {}-cell vessel (bow row, bow column, 0 - horizontal / 1 - vertical): ",
                length
            );
            let line = read_line();
            let parsed = parse_numbers(&line, 3).and_then(|nums| {
                if nums[0] == 0 || nums[1] == 0 {
                    return Err(InputError::OutOfRange("coordinates start at 1"));
                }
                let orientation = Orientation::from_flag(nums[2])
                    .ok_or(InputError::OutOfRange("orientation is 0 or 1"))?;
                Ok((Coord::new(nums[0] as i32 - 1, nums[1] as i32 - 1), orientation))
            });
            match parsed {
                Ok(request) => return request,
                Err(e) => println!("{}", e),
            }
        }
    }

    fn placement_rejected(&mut self, length: usize) {
        println!(
            "Could not place the {}-cell vessel there. Enter different parameters.",
            length
        );
    }

    fn board_abandoned(&mut self) {
        println!("No room left for the next vessel, the board will be restarted!");
    }
}

/// Console renderer for the match.
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView for ConsoleView {
    fn show_boards(&mut self, human: &Board, machine: &Board) {
        println!("{}", "-".repeat(20));
        println!("Your board:");
        println!("{}", render_board(human));
        println!("Opponent board:");
        println!("{}", render_board(machine));
        println!("{}", "-".repeat(20));
    }

    fn announce_turn(&mut self, side: Side) {
        match side {
            Side::Human => {
                println!("Your move! Format: row column (both starting at 1).");
            }
            Side::Automated => println!("Opponent moves!"),
        }
    }

    fn shot_resolved(&mut self, target: Coord, outcome: ShotOutcome) {
        let verdict = match outcome {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "vessel damaged, shoot again",
            ShotOutcome::Destroyed => "vessel destroyed, shoot again",
        };
        println!("Shot at {}: {}", target, verdict);
    }

    fn shot_rejected(&mut self, target: Coord, error: &ShotError) {
        println!("Shot at {} rejected: {}", target, error);
    }

    fn announce_winner(&mut self, side: Side) {
        println!("{}", "-".repeat(20));
        match side {
            Side::Human => println!("You won!"),
            Side::Automated => println!("The computer won!"),
        }
    }
}
