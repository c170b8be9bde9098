//! Computer-controlled players.
//!
//! - AiPlayer: difficulty-weighted opponent behind the loopback transport
//! - Autopilot: plays the local side of a session, for link testing and sims

use crate::{board::Grid, common::BoardError};
use rand::Rng;

/// Interface implemented by the computer-controlled players.
pub trait Player {
    /// Place the rest of the fleet onto `grid`.
    fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &mut Grid)
        -> Result<(), BoardError>;

    /// Choose the next cell to attack on `target`, or `None` if nothing is left.
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, target: &Grid) -> Option<(u8, u8)>;
}

pub mod ai;
pub use ai::AiPlayer;

pub mod autopilot;
pub use autopilot::Autopilot;
