//! Local AI opponent.
//!
//! The AI answers the session's outgoing messages by queueing the lines a
//! remote peer would have sent. Those lines reach the session through a
//! [`LoopbackQueue`] and take the same parse-and-dispatch path as wire traffic.

use alloc::format;
use log::{debug, trace, warn};
use rand::Rng;

use crate::{
    board::Grid,
    common::Outcome,
    config::{Difficulty, AI_PEER_TOKEN, GRID_COLS, GRID_ROWS},
    player::{AiPlayer, Player},
    protocol::Message,
    transport::LoopbackQueue,
};

/// Last attack answered, kept so a retransmission gets the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Exchange {
    attack: (u8, u8),
    result: Message,
    counter: Option<Message>,
}

#[derive(Debug, Clone)]
pub struct AiOpponent {
    grid: Grid,
    queue: LoopbackQueue,
    player: AiPlayer,
    fleet_placed: bool,
    opened: bool,
    last: Option<Exchange>,
}

impl AiOpponent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            grid: Grid::new(),
            queue: LoopbackQueue::new(),
            player: AiPlayer::new(difficulty),
            fleet_placed: false,
            opened: false,
            last: None,
        }
    }

    /// Forget the previous game and adopt `difficulty` for the next one.
    pub fn reset(&mut self, difficulty: Difficulty) {
        *self = Self::new(difficulty);
    }

    /// The AI's own fleet.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &AiPlayer {
        &self.player
    }

    pub fn queue(&self) -> &LoopbackQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut LoopbackQueue {
        &mut self.queue
    }

    /// React to a message the session sent to its "peer". `target` is the
    /// session's own grid, which the AI aims at.
    pub fn respond<R: Rng + ?Sized>(&mut self, msg: &Message, target: &Grid, rng: &mut R) {
        match *msg {
            Message::Ready { token } => self.on_ready(token, target, rng),
            Message::Attack { row, col } => self.on_attack(row, col, target, rng),
            Message::Result { .. } => {}
        }
    }

    fn on_ready<R: Rng + ?Sized>(&mut self, token: u16, target: &Grid, rng: &mut R) {
        if !self.fleet_placed {
            if let Err(e) = self.player.place_ships(rng, &mut self.grid) {
                warn!("ai fleet placement failed: {}", e);
            }
            self.fleet_placed = true;
            debug!("ai fleet placed, {} cells", self.grid.remaining());
        }
        self.push(Message::Ready {
            token: AI_PEER_TOKEN,
        });

        // A lower token hands the AI the first move, which it has to open itself.
        if token < AI_PEER_TOKEN && !self.opened {
            self.opened = true;
            if let Some((row, col)) = self.player.select_target(rng, target) {
                debug!("ai opens at ({}, {})", row, col);
                self.push(Message::Attack { row, col });
            }
        }
    }

    fn on_attack<R: Rng + ?Sized>(&mut self, row: u8, col: u8, target: &Grid, rng: &mut R) {
        if row >= GRID_ROWS || col >= GRID_COLS {
            trace!("ai ignores attack off the grid at ({}, {})", row, col);
            return;
        }

        if let Some(last) = self.last.filter(|l| l.attack == (row, col)) {
            trace!("ai replays answer for ({}, {})", row, col);
            self.push(last.result);
            if let Some(counter) = last.counter {
                self.push(counter);
            }
            return;
        }

        let first = self.grid.mark_attacked(row, col).unwrap_or(false);
        let hit = self.grid.is_occupied(row, col);
        if first && hit {
            self.grid.register_hit();
        }
        let result = Message::Result {
            row,
            col,
            outcome: Outcome::from_hit(hit),
        };
        self.push(result);

        if !first {
            return;
        }

        let counter = if self.grid.remaining() > 0 {
            self.player
                .select_target(rng, target)
                .map(|(row, col)| Message::Attack { row, col })
        } else {
            None
        };
        if let Some(counter) = counter {
            self.push(counter);
        }
        self.last = Some(Exchange {
            attack: (row, col),
            result,
            counter,
        });
    }

    fn push(&mut self, msg: Message) {
        self.queue.push(format!("{}", msg));
    }
}
