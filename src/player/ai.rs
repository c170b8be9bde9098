use crate::{
    ai,
    board::Grid,
    common::BoardError,
    config::{Difficulty, GRID_CELLS},
};
use log::trace;
use rand::Rng;

use super::Player;

/// Opponent that cheats in a controlled way: with the difficulty's hit
/// probability it aims at one of the player's ship cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiPlayer {
    difficulty: Difficulty,
    ship_squares_attacked: u16,
    ocean_squares_attacked: u16,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ship_squares_attacked: 0,
            ocean_squares_attacked: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn ship_squares_attacked(&self) -> u16 {
        self.ship_squares_attacked
    }

    pub fn ocean_squares_attacked(&self) -> u16 {
        self.ocean_squares_attacked
    }

    /// Ocean cells of `target` not yet attacked, derived from the counters.
    pub fn ocean_squares_left(&self, target: &Grid) -> usize {
        let ocean_total = GRID_CELLS - target.occupied().count_ones();
        ocean_total.saturating_sub(self.ocean_squares_attacked as usize)
    }

    /// Ship cells of `target` not yet attacked, derived from the counters.
    pub fn ship_squares_left(&self, target: &Grid) -> usize {
        target
            .occupied()
            .count_ones()
            .saturating_sub(self.ship_squares_attacked as usize)
    }

    pub fn reset(&mut self) {
        self.ship_squares_attacked = 0;
        self.ocean_squares_attacked = 0;
    }
}

impl Player for AiPlayer {
    fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: &mut Grid,
    ) -> Result<(), BoardError> {
        ai::place_fleet(grid, rng)
    }

    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, target: &Grid) -> Option<(u8, u8)> {
        let ocean_left = self.ocean_squares_left(target);
        let ship_left = self.ship_squares_left(target);

        // An exhausted ocean pool forces a ship cell so the AI never stalls.
        let aim_at_ship = ocean_left == 0 || rng.random_bool(self.difficulty.hit_probability());

        let ships = ai::ship_pool(target);
        let ocean = ai::ocean_pool(target);
        let cell = if aim_at_ship {
            ai::draw_from(&ships, ship_left, rng).or_else(|| ai::draw_from(&ocean, ocean_left, rng))
        } else {
            ai::draw_from(&ocean, ocean_left, rng).or_else(|| ai::draw_from(&ships, ship_left, rng))
        }?;

        if target.is_occupied(cell.0, cell.1) {
            self.ship_squares_attacked += 1;
        } else {
            self.ocean_squares_attacked += 1;
        }
        trace!(
            "ai targets {:?} (ships hit {}, ocean hit {})",
            cell,
            self.ship_squares_attacked,
            self.ocean_squares_attacked
        );
        Some(cell)
    }
}
