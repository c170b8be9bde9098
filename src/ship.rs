//! Ship definitions and the cells they cover.

use core::fmt;

use crate::config::{GRID_COLS, GRID_ROWS};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A run of `length` cells starting at (`row`, `col`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub row: u8,
    pub col: u8,
    pub length: u8,
    pub orientation: Orientation,
}

impl Ship {
    pub const fn new(row: u8, col: u8, length: u8, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            length,
            orientation,
        }
    }

    /// Returns true if every cell of the run lies on the grid.
    pub fn in_bounds(&self) -> bool {
        let (row, col, len) = (self.row as usize, self.col as usize, self.length as usize);
        match self.orientation {
            Orientation::Horizontal => row < GRID_ROWS as usize && col + len <= GRID_COLS as usize,
            Orientation::Vertical => col < GRID_COLS as usize && row + len <= GRID_ROWS as usize,
        }
    }

    /// Cells covered by the ship. Cells past the grid edge are still yielded;
    /// check [`Ship::in_bounds`] first.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> {
        let ship = *self;
        (0..ship.length).map(move |k| match ship.orientation {
            Orientation::Horizontal => (ship.row, ship.col.saturating_add(k)),
            Orientation::Vertical => (ship.row.saturating_add(k), ship.col),
        })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), length: {}, orientation: {:?} }}",
            self.row, self.col, self.length, self.orientation
        )
    }
}
