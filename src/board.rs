//! Bitmap board model: occupancy and attack state for both sides.

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{BoardError, Side};
use crate::config::{GRID_COLS, GRID_ROWS, NUM_SHIPS};
use crate::ship::Ship;

/// One bit per grid cell.
pub type Cells = BitBoard<u128, { GRID_ROWS as usize }, { GRID_COLS as usize }>;

/// Returns true if `ship` stays on the grid and overlaps no set bit of `occupied`.
pub fn can_place(occupied: &Cells, ship: &Ship) -> bool {
    ship.in_bounds()
        && ship
            .cells()
            .all(|(r, c)| !occupied.get(r as usize, c as usize).unwrap_or(true))
}

/// One side of the board model.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    occupied: Cells,
    attacked: Cells,
    remaining: u8,
    fleet: [Option<Ship>; NUM_SHIPS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            occupied: Cells::new(),
            attacked: Cells::new(),
            remaining: 0,
            fleet: [None; NUM_SHIPS],
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Cells holding a ship. On the peer side these are the confirmed hits.
    pub fn occupied(&self) -> Cells {
        self.occupied
    }

    /// Cells that have been attacked at least once.
    pub fn attacked(&self) -> Cells {
        self.attacked
    }

    /// Ship cells not yet hit.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn fleet(&self) -> &[Option<Ship>; NUM_SHIPS] {
        &self.fleet
    }

    /// Number of fleet entries placed so far.
    pub fn placed(&self) -> usize {
        self.fleet.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_occupied(&self, row: u8, col: u8) -> bool {
        self.occupied.get(row as usize, col as usize).unwrap_or(false)
    }

    pub fn is_attacked(&self, row: u8, col: u8) -> bool {
        self.attacked.get(row as usize, col as usize).unwrap_or(false)
    }

    /// Record fleet entry `fleet_index` and mark its cells occupied.
    ///
    /// Fit against existing ships is not re-checked; call [`can_place`] first.
    pub fn place(&mut self, fleet_index: usize, ship: Ship) -> Result<(), BoardError> {
        if fleet_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.fleet[fleet_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let expected = self.placed();
        if fleet_index != expected {
            return Err(BoardError::PlacementOutOfOrder {
                expected,
                got: fleet_index,
            });
        }
        if !ship.in_bounds() {
            return Err(BitBoardError::IndexOutOfBounds {
                row: ship.row as usize,
                col: ship.col as usize,
            }
            .into());
        }
        for (r, c) in ship.cells() {
            self.occupied.set(r as usize, c as usize)?;
        }
        self.remaining = self.remaining.saturating_add(ship.length);
        self.fleet[fleet_index] = Some(ship);
        Ok(())
    }

    /// Set the attacked bit, returning `true` the first time a cell is hit by
    /// an attack.
    pub fn mark_attacked(&mut self, row: u8, col: u8) -> Result<bool, BoardError> {
        Ok(self.attacked.set(row as usize, col as usize)?)
    }

    /// Mark a peer cell as a confirmed ship segment.
    pub fn confirm_ship(&mut self, row: u8, col: u8) -> Result<(), BoardError> {
        self.occupied.set(row as usize, col as usize)?;
        Ok(())
    }

    /// Arm the remaining-count of a fleet we cannot see.
    pub fn set_remaining(&mut self, cells: u8) {
        self.remaining = cells;
    }

    /// Count one newly hit ship segment. Returns `true` when this hit sank the
    /// last segment.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Grid {{\n  occupied: {:?},\n  attacked: {:?},\n  remaining: {},\n  fleet: {:?}\n}}",
            self.occupied, self.attacked, self.remaining, self.fleet
        )
    }
}

/// Both sides of the game: our fleet and what we know of the peer's.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub local: Grid,
    pub peer: Grid,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all bitmaps, fleets and remaining-counts.
    pub fn reset(&mut self) {
        self.local.reset();
        self.peer.reset();
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Grid {
        match side {
            Side::Local => &mut self.local,
            Side::Peer => &mut self.peer,
        }
    }

    /// Place the next ship of our own fleet.
    pub fn place(&mut self, fleet_index: usize, ship: Ship) -> Result<(), BoardError> {
        self.local.place(fleet_index, ship)
    }

    pub fn mark_attacked(&mut self, side: Side, row: u8, col: u8) -> Result<bool, BoardError> {
        self.side_mut(side).mark_attacked(row, col)
    }
}
