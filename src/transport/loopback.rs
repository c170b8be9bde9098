//! Loopback transport carrying spoofed lines from the local AI.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use log::trace;

use super::LineTransport;
use crate::config::LOOPBACK_CAPACITY;
use crate::protocol::Message;

/// Bounded queue of pre-formatted lines, drained at most one per tick.
#[derive(Debug, Clone)]
pub struct LoopbackQueue {
    lines: VecDeque<String>,
    budget: bool,
}

impl LoopbackQueue {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(LOOPBACK_CAPACITY),
            budget: false,
        }
    }

    /// Queue a line. A full queue drops the newest line and returns `false`.
    pub fn push(&mut self, line: String) -> bool {
        if self.lines.len() >= LOOPBACK_CAPACITY {
            trace!("loopback full, dropping '{}'", line);
            return false;
        }
        self.lines.push_back(line);
        true
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for LoopbackQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl LineTransport for LoopbackQueue {
    fn send(&mut self, msg: &Message) {
        self.push(format!("{}", msg));
    }

    fn poll_line(&mut self) -> Option<String> {
        if !self.budget {
            return None;
        }
        let line = self.lines.pop_front()?;
        self.budget = false;
        Some(line)
    }

    fn begin_tick(&mut self) {
        self.budget = true;
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.budget = false;
    }
}
