//! Common types: board errors, attack outcomes and board sides.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Outcome of an attack, as carried by an `R` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    pub fn from_hit(hit: bool) -> Self {
        if hit {
            Outcome::Hit
        } else {
            Outcome::Miss
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, Outcome::Hit)
    }

    /// Wire character for this outcome.
    pub fn symbol(self) -> char {
        match self {
            Outcome::Hit => 'H',
            Outcome::Miss => 'M',
        }
    }
}

/// Which half of the board model an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Our own fleet, attacked by the peer.
    Local,
    /// The peer's fleet as we know it, attacked by us.
    Peer,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid index).
    BitBoardError(BitBoardError),
    /// Fleet index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Fleet indices must be placed in increasing order.
    PlacementOutOfOrder { expected: usize, got: usize },
    /// No valid position is left for the ship.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Fleet index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::PlacementOutOfOrder { expected, got } => write!(
                f,
                "Ships must be placed in order: expected index {}, got {}",
                expected, got
            ),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
