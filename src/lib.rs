#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
pub mod game;
pub mod link;
#[cfg(feature = "std")]
mod logging;
pub mod opponent;
pub mod player;
pub mod protocol;
pub mod retry;
pub mod rng;
mod ship;
pub mod transport;
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::{GamePhase, Ghost, Mode, Session};
pub use link::{Link, NetEvent, NetState, TurnOrder};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use opponent::AiOpponent;
pub use player::{AiPlayer, Autopilot, Player};
pub use protocol::Message;
pub use retry::RetryTimers;
pub use rng::Lfsr16;
pub use ship::*;
pub use transport::{LineAssembler, LineTransport, LinkError, LoopbackQueue, SerialLink, WireTransport};
#[cfg(feature = "std")]
pub use ui::ConsoleFrontend;
pub use ui::{BoardOrigin, CellColor, ControlState, Cue, Frontend, NullFrontend, Screen};
