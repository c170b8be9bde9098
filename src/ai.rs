// Placement and targeting helpers shared by the computer-controlled players.
// Uses no_std and avoids heap allocations.

use crate::{
    board::{can_place, Cells, Grid},
    common::BoardError,
    config::{FLEET_LENGTHS, GRID_CELLS, GRID_COLS, GRID_ROWS},
    ship::{Orientation, Ship},
};
use rand::{seq::SliceRandom, Rng};

/// Upper bound on placements for one ship: every cell in both orientations.
const MAX_CANDIDATES: usize = 2 * GRID_CELLS;

/// Fill `out` with every valid placement of a ship of `length` given the
/// cells already occupied. Returns the number written.
pub fn placement_candidates(
    occupied: &Cells,
    length: u8,
    out: &mut [Ship; MAX_CANDIDATES],
) -> usize {
    let mut n = 0;
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let ship = Ship::new(row, col, length, orientation);
                if can_place(occupied, &ship) {
                    out[n] = ship;
                    n += 1;
                }
            }
        }
    }
    n
}

/// Place the whole fleet in length order, each ship uniformly among its valid
/// placements: enumerate, shuffle, take the first.
pub fn place_fleet<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), BoardError> {
    let mut candidates = [Ship::new(0, 0, 0, Orientation::Horizontal); MAX_CANDIDATES];
    for (index, &length) in FLEET_LENGTHS.iter().enumerate().skip(grid.placed()) {
        let n = placement_candidates(&grid.occupied(), length, &mut candidates);
        if n == 0 {
            return Err(BoardError::UnableToPlaceShip);
        }
        candidates[..n].shuffle(rng);
        grid.place(index, candidates[0])?;
    }
    Ok(())
}

/// The `n`-th set cell of `pool` in row-major order.
pub fn nth_cell(pool: &Cells, n: usize) -> Option<(u8, u8)> {
    pool.iter_set_bits()
        .nth(n)
        .map(|(r, c)| (r as u8, c as u8))
}

/// Unattacked ship cells of `target`.
pub fn ship_pool(target: &Grid) -> Cells {
    target.occupied() & !target.attacked()
}

/// Unattacked ocean cells of `target`.
pub fn ocean_pool(target: &Grid) -> Cells {
    !target.occupied() & !target.attacked()
}

/// Pick uniformly from `pool`, whose size the caller believes to be `size`.
/// A stale size is corrected from the bitmap.
pub fn draw_from<R: Rng + ?Sized>(pool: &Cells, size: usize, rng: &mut R) -> Option<(u8, u8)> {
    if size > 0 {
        if let Some(cell) = nth_cell(pool, rng.random_range(0..size)) {
            return Some(cell);
        }
    }
    let actual = pool.count_ones();
    if actual == 0 {
        return None;
    }
    nth_cell(pool, rng.random_range(0..actual))
}
