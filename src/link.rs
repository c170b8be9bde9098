//! Turn/network state machine.
//!
//! [`transition`] is the single source of truth for which protocol event is
//! legal in which state and what it causes. [`Link`] carries the data that
//! goes with the state (tokens, pending shot) and applies transitions.

use log::debug;

/// Network state of the local peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetState {
    Idle,
    WaitReady,
    Decide,
    MyTurn,
    PeerTurn,
    WaitRes,
    GameOver,
}

/// Protocol-level events, already reduced to what the transition needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetEvent {
    /// All local ships placed.
    PlacementComplete,
    /// `READY` received from the peer.
    PeerReady,
    /// Tokens compared.
    TurnDecided(TurnOrder),
    /// Local player fired at a fresh cell.
    ShotFired,
    /// `R` matching the pending shot arrived.
    ResultReceived { fleet_sunk: bool },
    /// First-time `A` absorbed by the local board.
    AttackAbsorbed { fleet_sunk: bool },
    /// No attack arrived in time during the peer's turn.
    PeerTimeout,
    /// Unconditional full reset.
    Reset,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SendReady,
    RestartReadyTimer,
    StartPostReady,
    ArmPeerBoard,
    SendAttack,
    RestartAttackTimer,
    ClearPending,
    RestartPeerClock,
    ForceReset,
}

/// Result of a legal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: NetState,
    pub effects: &'static [Effect],
}

/// Outcome of comparing the two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrder {
    LocalFirst,
    PeerFirst,
    /// Equal tokens: neither side can claim the first move.
    Tie,
}

/// Higher token moves first. Both peers evaluate this with the roles swapped
/// and reach complementary answers.
pub fn turn_order(local: u16, peer: u16) -> TurnOrder {
    use core::cmp::Ordering::*;
    match local.cmp(&peer) {
        Greater => TurnOrder::LocalFirst,
        Less => TurnOrder::PeerFirst,
        Equal => TurnOrder::Tie,
    }
}

/// The transition table. `None` means the event is not valid in `state`.
pub fn transition(state: NetState, event: NetEvent) -> Option<Transition> {
    use Effect::*;
    use NetState::*;

    fn t(next: NetState, effects: &'static [Effect]) -> Option<Transition> {
        Some(Transition { next, effects })
    }

    match (state, event) {
        (_, NetEvent::Reset) => t(Idle, &[ClearPending, ForceReset]),

        (Idle, NetEvent::PlacementComplete) => t(WaitReady, &[SendReady, RestartReadyTimer]),
        (WaitReady, NetEvent::PeerReady) => t(Decide, &[]),

        (Decide, NetEvent::TurnDecided(TurnOrder::LocalFirst)) => {
            t(MyTurn, &[ArmPeerBoard, StartPostReady, RestartReadyTimer])
        }
        (Decide, NetEvent::TurnDecided(TurnOrder::PeerFirst)) => t(
            PeerTurn,
            &[ArmPeerBoard, StartPostReady, RestartReadyTimer, RestartPeerClock],
        ),
        (Decide, NetEvent::TurnDecided(TurnOrder::Tie)) => t(Idle, &[ForceReset]),

        (MyTurn, NetEvent::ShotFired) => t(WaitRes, &[SendAttack, RestartAttackTimer]),

        (WaitRes, NetEvent::ResultReceived { fleet_sunk: true }) => t(GameOver, &[ClearPending]),
        (WaitRes, NetEvent::ResultReceived { fleet_sunk: false }) => {
            t(PeerTurn, &[ClearPending, RestartPeerClock])
        }

        (PeerTurn, NetEvent::AttackAbsorbed { fleet_sunk: true }) => t(GameOver, &[]),
        (PeerTurn, NetEvent::AttackAbsorbed { fleet_sunk: false }) => t(MyTurn, &[]),

        (PeerTurn, NetEvent::PeerTimeout) => t(Idle, &[ClearPending, ForceReset]),

        _ => None,
    }
}

/// Network state plus the data that belongs to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    state: NetState,
    self_token: u16,
    peer_token: Option<u16>,
    pending: Option<(u8, u8)>,
}

impl Link {
    pub fn new() -> Self {
        Self {
            state: NetState::Idle,
            self_token: 0,
            peer_token: None,
            pending: None,
        }
    }

    pub fn state(&self) -> NetState {
        self.state
    }

    pub fn self_token(&self) -> u16 {
        self.self_token
    }

    pub fn peer_token(&self) -> Option<u16> {
        self.peer_token
    }

    /// The in-flight shot, present only while awaiting its result.
    pub fn pending(&self) -> Option<(u8, u8)> {
        self.pending
    }

    /// Set our token and forget any token heard before placement finished.
    pub fn announce(&mut self, token: u16) {
        self.self_token = token;
        self.peer_token = None;
    }

    /// Record a peer token; it is only acted upon in `WaitReady`.
    pub fn record_peer_token(&mut self, token: u16) {
        self.peer_token = Some(token);
    }

    /// Compare tokens once both are known.
    pub fn decide(&self) -> Option<TurnOrder> {
        self.peer_token.map(|peer| turn_order(self.self_token, peer))
    }

    pub fn set_pending(&mut self, row: u8, col: u8) {
        self.pending = Some((row, col));
    }

    /// Apply `event`. Returns the effects to run, or `None` if the event is
    /// not valid in the current state (the state is left untouched).
    pub fn apply(&mut self, event: NetEvent) -> Option<&'static [Effect]> {
        let Transition { next, effects } = transition(self.state, event)?;
        debug!("net {:?} --{:?}--> {:?}", self.state, event, next);
        self.state = next;
        for effect in effects {
            match effect {
                Effect::ClearPending => self.pending = None,
                Effect::ForceReset => {
                    self.self_token = 0;
                    self.peer_token = None;
                    self.pending = None;
                }
                _ => {}
            }
        }
        Some(effects)
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}
