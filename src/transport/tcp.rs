#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::io::ErrorKind;

use log::{debug, warn};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

use super::{LinkError, SerialLink};

/// Read chunk size; lines are at most a few dozen bytes.
const READ_CHUNK: usize = 64;

/// Unsent bytes held back while the socket is not writable. A line that
/// would push the backlog past this is refused whole.
const TX_BACKLOG: usize = 1024;

/// Serial link tunnelled over TCP, used as a null-modem between two hosts.
///
/// Reads and writes never wait: the tick loop polls, and the IO driver
/// refreshes readiness whenever the loop awaits its next tick.
pub struct TcpLink {
    stream: TcpStream,
    rx: VecDeque<u8>,
    tx: VecDeque<u8>,
    closed: bool,
}

impl TcpLink {
    pub fn new(stream: TcpStream) -> Self {
        if let Err(e) = stream.set_nodelay(true) {
            debug!("set_nodelay failed: {}", e);
        }
        Self {
            stream,
            rx: VecDeque::new(),
            tx: VecDeque::new(),
            closed: false,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    /// Bind `addr` and wait for a single peer.
    pub async fn accept<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let (stream, peer) = listener.accept().await?;
        debug!("peer connected from {}", peer);
        Ok(Self::new(stream))
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Bytes accepted by `write_all` but not yet handed to the socket.
    pub fn backlog(&self) -> usize {
        self.tx.len()
    }

    /// Push as much of the backlog into the socket as it takes right now.
    pub fn flush(&mut self) -> Result<(), LinkError> {
        while !self.tx.is_empty() {
            if self.closed {
                return Err(LinkError::Closed);
            }
            let (head, _) = self.tx.as_slices();
            match self.stream.try_write(head) {
                Ok(0) => {
                    self.closed = true;
                    return Err(LinkError::Closed);
                }
                Ok(n) => {
                    self.tx.drain(..n);
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => return Ok(()),
                Err(e)
                    if e.kind() == ErrorKind::BrokenPipe
                        || e.kind() == ErrorKind::ConnectionReset =>
                {
                    self.closed = true;
                    return Err(LinkError::Closed);
                }
                Err(_) => return Err(LinkError::Device),
            }
        }
        Ok(())
    }

    fn fill(&mut self) {
        if self.closed {
            return;
        }
        let mut buf = [0u8; READ_CHUNK];
        loop {
            match self.stream.try_read(&mut buf) {
                Ok(0) => {
                    warn!("TCP peer closed the connection");
                    self.closed = true;
                    return;
                }
                Ok(n) => self.rx.extend(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::WouldBlock => return,
                Err(e) => {
                    warn!("TCP read error: {}", e);
                    self.closed = true;
                    return;
                }
            }
        }
    }
}

impl SerialLink for TcpLink {
    fn read_byte(&mut self) -> Option<u8> {
        if !self.tx.is_empty() {
            if let Err(e) = self.flush() {
                debug!("flushing backlog failed: {}", e);
            }
        }
        if self.rx.is_empty() {
            self.fill();
        }
        self.rx.pop_front()
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        if self.closed {
            return Err(LinkError::Closed);
        }
        if self.tx.len() + bytes.len() > TX_BACKLOG {
            self.flush()?;
            if self.tx.len() + bytes.len() > TX_BACKLOG {
                return Err(LinkError::Busy);
            }
        }
        // Whole lines only: a tail the socket refuses waits for the next flush.
        self.tx.extend(bytes);
        self.flush()
    }
}
