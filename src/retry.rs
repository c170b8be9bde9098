//! Tick-driven retransmission and peer-liveness timers.
//!
//! Each condition keeps its own counter so that two resends falling due in
//! the same interval cannot suppress each other.

use crate::config::Timing;
use crate::link::NetState;

/// What fell due during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Due {
    pub resend_ready: bool,
    pub resend_attack: bool,
    pub peer_timeout: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryTimers {
    ready: u32,
    attack: u32,
    peer_idle: u32,
    post_ready_left: u32,
}

impl RetryTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn restart_ready(&mut self) {
        self.ready = 0;
    }

    pub fn restart_attack(&mut self) {
        self.attack = 0;
    }

    pub fn restart_peer_clock(&mut self) {
        self.peer_idle = 0;
    }

    /// Keep resending `READY` for `ticks` more ticks regardless of state.
    pub fn start_post_ready(&mut self, ticks: u32) {
        self.post_ready_left = ticks;
    }

    pub fn post_ready_left(&self) -> u32 {
        self.post_ready_left
    }

    /// Ticks spent in the peer's turn without an attack.
    pub fn peer_idle(&self) -> u32 {
        self.peer_idle
    }

    /// Advance all counters by one tick for the given state.
    pub fn tick(&mut self, state: NetState, timing: &Timing) -> Due {
        let mut due = Due::default();

        if state == NetState::WaitReady || self.post_ready_left > 0 {
            self.ready += 1;
            if self.ready >= timing.ready_resend {
                self.ready = 0;
                due.resend_ready = true;
            }
        }

        if state == NetState::WaitRes {
            self.attack += 1;
            if self.attack >= timing.attack_resend {
                self.attack = 0;
                due.resend_attack = true;
            }
        }

        if state == NetState::PeerTurn {
            self.peer_idle += 1;
            if self.peer_idle >= timing.peer_timeout {
                due.peer_timeout = true;
            }
        }

        self.post_ready_left = self.post_ready_left.saturating_sub(1);
        due
    }
}
