//! Game configuration: board sizes, fleet manifests, placement settings.

/// The two supported board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSize {
    /// 6×6 board, 7 vessels.
    Small,
    /// 10×10 board, 10 vessels.
    Large,
}

/// Fleet manifest for the small board. Sums to 13 cells.
pub const SMALL_MANIFEST: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Fleet manifest for the large board. Sums to 19 cells.
pub const LARGE_MANIFEST: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Attempt ceiling for the randomized strategy, accumulated across the whole
/// manifest. Past it the board is abandoned and rebuilt from scratch.
pub const MAX_RANDOM_ATTEMPTS: u32 = 1000;

impl BoardSize {
    /// Board dimension in cells.
    pub fn dim(&self) -> usize {
        match self {
            BoardSize::Small => 6,
            BoardSize::Large => 10,
        }
    }

    /// Ordered vessel lengths required on a board of this size.
    pub fn manifest(&self) -> &'static [usize] {
        match self {
            BoardSize::Small => &SMALL_MANIFEST,
            BoardSize::Large => &LARGE_MANIFEST,
        }
    }

    /// Map the interactive menu choice to a size: 1 → 6×6, 2 → 10×10.
    /// Anything else is rejected.
    pub fn from_choice(choice: u32) -> Option<BoardSize> {
        match choice {
            1 => Some(BoardSize::Small),
            2 => Some(BoardSize::Large),
            _ => None,
        }
    }

    /// Map a raw dimension to a size. Only 6 and 10 are supported.
    pub fn from_dim(dim: usize) -> Option<BoardSize> {
        match dim {
            6 => Some(BoardSize::Small),
            10 => Some(BoardSize::Large),
            _ => None,
        }
    }
}

/// How the human's fleet gets onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    Randomized,
    Interactive,
}

impl PlacementMode {
    /// Map the interactive menu choice to a mode: 0 → randomized, 1 → manual.
    pub fn from_choice(choice: u32) -> Option<PlacementMode> {
        match choice {
            0 => Some(PlacementMode::Randomized),
            1 => Some(PlacementMode::Interactive),
            _ => None,
        }
    }
}
