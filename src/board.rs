//! Game board state: vessel placement, contour exclusion, shot resolution.

use log::debug;

use crate::bitgrid::BitGrid;
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::BoardSize;
use crate::coord::{Coord, NEIGHBORHOOD};
use crate::vessel::Vessel;

/// Bit mask type used for board cell sets. `u128` fits both supported sizes.
type Grid = BitGrid<u128>;

/// Display-agnostic cell state. Collaborators map these to symbols; the
/// board itself never deals in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Adjacency exclusion zone of a placed vessel, visible during placement.
    Halo,
    /// Exclusion zone of a destroyed vessel, marked during combat.
    DestroyedHalo,
}

/// One combatant's board.
///
/// The exclusion masks are phase-specific. `placement_exclusions` holds ship
/// cells plus their halo while the fleet is being placed and is cleared by
/// [`Board::finish_placement`]; `shot_history` starts empty at combat start
/// and accumulates every shot plus the halo of each destroyed vessel.
pub struct Board {
    size: BoardSize,
    vessels: Vec<Vessel>,
    destroyed_count: usize,
    hidden: bool,
    ship_cells: Grid,
    hit_cells: Grid,
    miss_cells: Grid,
    halo_cells: Grid,
    destroyed_halo_cells: Grid,
    placement_exclusions: Grid,
    shot_history: Grid,
}

impl Board {
    /// Create an empty board (no vessels placed, nothing shot).
    pub fn new(size: BoardSize) -> Self {
        let empty = Grid::new(size.dim());
        Board {
            size,
            vessels: Vec::new(),
            destroyed_count: 0,
            hidden: false,
            ship_cells: empty,
            hit_cells: empty,
            miss_cells: empty,
            halo_cells: empty,
            destroyed_halo_cells: empty,
            placement_exclusions: empty,
            shot_history: empty,
        }
    }

    /// Board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Board dimension in cells.
    pub fn dim(&self) -> usize {
        self.size.dim()
    }

    /// Vessels placed so far, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels destroyed so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed_count
    }

    /// Number of cells occupied by vessels.
    pub fn ship_cell_count(&self) -> usize {
        self.ship_cells.count_ones()
    }

    /// Whether ship cells are suppressed when rendering.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Hide or reveal ship cells. The automated combatant's board is hidden.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Pure bounds predicate: true iff `coord` lies outside `[0, dim)²`.
    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        let dim = self.dim() as i32;
        !(0 <= coord.row && coord.row < dim && 0 <= coord.col && coord.col < dim)
    }

    /// True iff every cell of the board is in the placement exclusion set,
    /// leaving nowhere to put another vessel. Only meaningful during the
    /// placement phase.
    pub fn is_full(&self) -> bool {
        self.placement_exclusions.is_full()
    }

    /// Place a vessel. Every cell must be in bounds and outside the
    /// exclusion set of previously placed vessels; on any violation the call
    /// fails without mutating anything. On success the vessel's cells become
    /// ship cells and its 8-neighborhood joins the exclusion set.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        for cell in vessel.cells() {
            if self.is_out_of_bounds(cell) {
                return Err(PlacementError::OutOfBoundsOrOverlap);
            }
            let (r, c) = (cell.row as usize, cell.col as usize);
            if self.placement_exclusions.get(r, c)? {
                return Err(PlacementError::OutOfBoundsOrOverlap);
            }
        }
        for cell in vessel.cells() {
            let (r, c) = (cell.row as usize, cell.col as usize);
            self.ship_cells.set(r, c)?;
            self.placement_exclusions.set(r, c)?;
        }
        self.mark_placement_contour(&vessel)?;
        self.vessels.push(vessel);
        Ok(())
    }

    /// Add the 8-neighborhood of a freshly placed vessel to the placement
    /// exclusion set. The vessel's own cells are already excluded, so only
    /// true halo cells land in `halo_cells`.
    fn mark_placement_contour(&mut self, vessel: &Vessel) -> Result<(), PlacementError> {
        for cell in vessel.cells() {
            for (dr, dc) in NEIGHBORHOOD {
                let cur = cell.offset(dr, dc);
                if self.is_out_of_bounds(cur) {
                    continue;
                }
                let (r, c) = (cur.row as usize, cur.col as usize);
                if !self.placement_exclusions.get(r, c)? {
                    self.placement_exclusions.set(r, c)?;
                    self.halo_cells.set(r, c)?;
                }
            }
        }
        Ok(())
    }

    /// End the placement phase: discard the placement exclusions (and their
    /// halo rendering) so the board can start recording shots. Vessels are
    /// retained untouched.
    pub fn finish_placement(&mut self) {
        self.placement_exclusions.clear_all();
        self.halo_cells.clear_all();
    }

    /// Resolve a shot at `coord`.
    pub fn apply_shot(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(coord) {
            return Err(ShotError::OutOfBounds);
        }
        let (r, c) = (coord.row as usize, coord.col as usize);
        if self.shot_history.get(r, c)? {
            return Err(ShotError::AlreadyTaken);
        }
        self.shot_history.set(r, c)?;

        if let Some(idx) = self.vessels.iter().position(|v| v.contains(coord)) {
            self.vessels[idx].register_hit();
            self.hit_cells.set(r, c)?;
            if self.vessels[idx].is_destroyed() {
                self.destroyed_count += 1;
                let vessel = self.vessels[idx].clone();
                self.mark_destroyed_contour(&vessel)?;
                debug!(
                    "vessel of length {} destroyed ({}/{})",
                    vessel.length(),
                    self.destroyed_count,
                    self.vessels.len()
                );
                return Ok(ShotOutcome::Destroyed);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.miss_cells.set(r, c)?;
        Ok(ShotOutcome::Miss)
    }

    /// Add the exclusion zone of a destroyed vessel to the shot history:
    /// nothing can live adjacent to it, so those cells need no further
    /// shots and are marked as a destroyed halo. Cells already shot (the
    /// vessel's own hits included) keep their state.
    fn mark_destroyed_contour(&mut self, vessel: &Vessel) -> Result<(), ShotError> {
        for cell in vessel.cells() {
            for (dr, dc) in NEIGHBORHOOD {
                let cur = cell.offset(dr, dc);
                if self.is_out_of_bounds(cur) {
                    continue;
                }
                let (r, c) = (cur.row as usize, cur.col as usize);
                if !self.shot_history.get(r, c)? {
                    self.shot_history.set(r, c)?;
                    self.destroyed_halo_cells.set(r, c)?;
                }
            }
        }
        Ok(())
    }

    /// Total fleet destruction.
    pub fn defeat(&self) -> bool {
        self.destroyed_count == self.vessels.len()
    }

    /// State of one cell as it should be displayed. Honors `hidden`: a ship
    /// cell on a hidden board renders as empty until it is hit.
    pub fn cell_state(&self, row: usize, col: usize) -> CellState {
        let get = |grid: &Grid| grid.get(row, col).unwrap_or(false);
        if get(&self.hit_cells) {
            CellState::Hit
        } else if get(&self.ship_cells) {
            if self.hidden {
                CellState::Empty
            } else {
                CellState::Ship
            }
        } else if get(&self.destroyed_halo_cells) {
            CellState::DestroyedHalo
        } else if get(&self.miss_cells) {
            CellState::Miss
        } else if get(&self.halo_cells) {
            CellState::Halo
        } else {
            CellState::Empty
        }
    }

    /// The whole board as a grid of cell states, row-major.
    pub fn grid(&self) -> Vec<Vec<CellState>> {
        let dim = self.dim();
        (0..dim)
            .map(|r| (0..dim).map(|c| self.cell_state(r, c)).collect())
            .collect()
    }
}
