#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{LinkError, SerialLink};

/// Byte pipe standing in for a null-modem cable between two sessions.
pub struct MemorySerial {
    recv_queue: Arc<Mutex<VecDeque<u8>>>,
    send_queue: Arc<Mutex<VecDeque<u8>>>,
    muted: Arc<AtomicBool>,
}

impl MemorySerial {
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: q1.clone(),
                send_queue: q2.clone(),
                muted: Arc::new(AtomicBool::new(false)),
            },
            Self {
                recv_queue: q2,
                send_queue: q1,
                muted: Arc::new(AtomicBool::new(false)),
            },
        )
    }

    /// While muted, everything this end writes is lost on the wire.
    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::SeqCst);
    }

    /// Handle that can mute this end after it has been moved into a transport.
    pub fn mute_handle(&self) -> Arc<AtomicBool> {
        self.muted.clone()
    }

    /// Push raw bytes as if the peer had sent them.
    pub fn inject(&self, bytes: &[u8]) {
        if let Ok(mut queue) = self.recv_queue.lock() {
            queue.extend(bytes.iter().copied());
        }
    }
}

impl SerialLink for MemorySerial {
    fn read_byte(&mut self) -> Option<u8> {
        self.recv_queue.lock().ok()?.pop_front()
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        if self.muted.load(Ordering::SeqCst) {
            return Ok(());
        }
        if Arc::strong_count(&self.send_queue) == 1 {
            return Err(LinkError::Closed);
        }
        let mut queue = self.send_queue.lock().map_err(|_| LinkError::Device)?;
        queue.extend(bytes.iter().copied());
        Ok(())
    }
}
