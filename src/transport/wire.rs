//! Wire transport: protocol lines over a byte-oriented serial link.

use alloc::format;
use alloc::string::String;
use log::{trace, warn};

use super::{LineTransport, SerialLink};
use crate::config::RX_MAX;
use crate::protocol::Message;

/// Accumulates received bytes into lines.
///
/// The buffer holds `RX_MAX - 1` payload bytes; anything past that is dropped
/// until the next terminator.
#[derive(Debug, Clone)]
pub struct LineAssembler {
    buf: [u8; RX_MAX],
    len: usize,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self {
            buf: [0; RX_MAX],
            len: 0,
        }
    }

    /// Feed one byte. Returns a line when `byte` terminates a non-empty one.
    pub fn push(&mut self, byte: u8) -> Option<String> {
        match byte {
            b'\n' | b'\r' => {
                if self.len == 0 {
                    return None;
                }
                let raw = &self.buf[..self.len];
                let line = core::str::from_utf8(raw).ok().map(String::from);
                if line.is_none() {
                    trace!("discarding non-ASCII line of {} bytes", self.len);
                }
                self.len = 0;
                line
            }
            _ if self.len < RX_MAX - 1 => {
                self.buf[self.len] = byte;
                self.len += 1;
                None
            }
            _ => None,
        }
    }

    /// Bytes currently buffered.
    pub fn pending(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// [`LineTransport`] over a [`SerialLink`].
pub struct WireTransport<S: SerialLink> {
    link: S,
    rx: LineAssembler,
}

impl<S: SerialLink> WireTransport<S> {
    pub fn new(link: S) -> Self {
        Self {
            link,
            rx: LineAssembler::new(),
        }
    }

    pub fn link(&self) -> &S {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut S {
        &mut self.link
    }
}

impl<S: SerialLink> LineTransport for WireTransport<S> {
    fn send(&mut self, msg: &Message) {
        let line = format!("{}\r\n", msg);
        if let Err(e) = self.link.write_all(line.as_bytes()) {
            warn!("dropping outgoing '{}': {}", msg, e);
        }
    }

    fn poll_line(&mut self) -> Option<String> {
        while let Some(byte) = self.link.read_byte() {
            if let Some(line) = self.rx.push(byte) {
                return Some(line);
            }
        }
        None
    }

    fn clear(&mut self) {
        self.rx.clear();
    }
}
