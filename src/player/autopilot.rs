use crate::{
    ai,
    board::Grid,
    common::BoardError,
    game::{GamePhase, Session},
    transport::LineTransport,
    ui::Frontend,
};
use rand::{Rng, RngCore};

use super::Player;

/// Plays the local side without a joystick: random fleet, random unattacked
/// target. It never looks at the peer's fleet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Act for the local side of `session` before its next tick: place the
    /// fleet once placement opens and fire whenever it is our turn.
    pub fn drive<W, F, R>(&mut self, session: &mut Session<W, F, R>) -> Result<(), BoardError>
    where
        W: LineTransport,
        F: Frontend,
        R: RngCore,
    {
        match session.phase() {
            GamePhase::Placing => session.place_remaining(self),
            GamePhase::MyTurn => {
                session.fire_with(self);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl Player for Autopilot {
    fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: &mut Grid,
    ) -> Result<(), BoardError> {
        ai::place_fleet(grid, rng)
    }

    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, target: &Grid) -> Option<(u8, u8)> {
        let fresh = !target.attacked();
        ai::draw_from(&fresh, fresh.count_ones(), rng)
    }
}
