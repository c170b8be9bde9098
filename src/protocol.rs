//! Line protocol spoken between the two peers.
//!
//! ```text
//! READY <u16>
//! A <row> <col>
//! R <row> <col> <H|M>
//! ```
//!
//! Decoding is best-effort: anything that does not parse is dropped and the
//! retransmission discipline recovers.

use core::fmt;

use crate::common::Outcome;

/// Messages exchanged between the peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Sender finished placement and announces its turn-order token.
    Ready { token: u16 },
    /// Sender attacks the given cell of the receiver's board.
    Attack { row: u8, col: u8 },
    /// Sender reports the outcome of an attack it received.
    Result { row: u8, col: u8, outcome: Outcome },
}

impl Message {
    /// Parse one line without its terminator. Returns `None` for anything
    /// malformed.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_ascii_whitespace();
        match fields.next()? {
            "READY" => {
                let token = fields.next()?.parse().ok()?;
                Some(Message::Ready { token })
            }
            "A" => {
                let row = fields.next()?.parse().ok()?;
                let col = fields.next()?.parse().ok()?;
                Some(Message::Attack { row, col })
            }
            "R" => {
                let row = fields.next()?.parse().ok()?;
                let col = fields.next()?.parse().ok()?;
                let outcome = match fields.next()? {
                    "H" => Outcome::Hit,
                    "M" => Outcome::Miss,
                    _ => return None,
                };
                Some(Message::Result { row, col, outcome })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Ready { token } => write!(f, "READY {}", token),
            Message::Attack { row, col } => write!(f, "A {} {}", row, col),
            Message::Result { row, col, outcome } => {
                write!(f, "R {} {} {}", row, col, outcome.symbol())
            }
        }
    }
}
