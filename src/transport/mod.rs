//! Line transports.
//!
//! Every transport hands complete lines to the same decode-and-dispatch path,
//! so the session logic does not know whether it talks to a wire or to the
//! local AI.

use alloc::string::String;
use core::fmt;

use crate::protocol::Message;

pub mod loopback;
pub mod wire;

#[cfg(feature = "std")]
pub mod in_memory;
#[cfg(feature = "std")]
pub mod serial;
#[cfg(feature = "std")]
pub mod tcp;

pub use loopback::LoopbackQueue;
pub use wire::{LineAssembler, WireTransport};

/// Send/receive contract shared by the wire and loopback paths.
pub trait LineTransport {
    /// Transmit one message. Delivery is best-effort.
    fn send(&mut self, msg: &Message);

    /// Next complete line, if one is available.
    fn poll_line(&mut self) -> Option<String>;

    /// Called once at the start of every tick.
    fn begin_tick(&mut self) {}

    /// Drop everything buffered.
    fn clear(&mut self) {}
}

/// Byte-oriented, non-blocking serial peripheral.
pub trait SerialLink {
    /// Next received byte, if any.
    fn read_byte(&mut self) -> Option<u8>;

    /// Queue `bytes` for transmission.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError>;
}

/// Errors reported by a [`SerialLink`] backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The other end went away.
    Closed,
    /// The device could not accept the bytes right now.
    Busy,
    /// Any other device failure.
    Device,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::Closed => write!(f, "Link closed by peer"),
            LinkError::Busy => write!(f, "Link busy"),
            LinkError::Device => write!(f, "Link device error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinkError {}
