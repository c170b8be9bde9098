//! Game constants, timing parameters and user settings.

use core::fmt;

pub const GRID_ROWS: u8 = 10;
pub const GRID_COLS: u8 = 10;
pub const GRID_CELLS: usize = GRID_ROWS as usize * GRID_COLS as usize;

pub const NUM_SHIPS: usize = 5;
pub const FLEET_LENGTHS: [u8; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: u8 = 5 + 4 + 3 + 3 + 2;

/// Receive buffer size of the wire line assembler, terminator included.
pub const RX_MAX: usize = 32;

/// Capacity of the loopback queue feeding spoofed AI lines.
pub const LOOPBACK_CAPACITY: usize = 4;

/// Token announced by the AI opponent in its `READY` line.
pub const AI_PEER_TOKEN: u16 = 1;

/// Raw ADC reading of a centred joystick axis.
pub const JOY_CENTER_RAW: u16 = 512;
pub const JOY_DEADZONE_RAW: u16 = 40;
pub const JOY_MIN_RAW: u16 = JOY_CENTER_RAW - JOY_DEADZONE_RAW;
pub const JOY_MAX_RAW: u16 = JOY_CENTER_RAW + JOY_DEADZONE_RAW;

/// Tick-based timing parameters. One tick is one millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct Timing {
    /// Interval between `READY` retransmissions.
    pub ready_resend: u32,
    /// Interval between `A` retransmissions while a result is outstanding.
    pub attack_resend: u32,
    /// How long `READY` keeps being resent after turn order is decided.
    pub post_ready: u32,
    /// Silence during the peer's turn after which the session is abandoned.
    pub peer_timeout: u32,
    /// Minimum hold for a press to count as a long press.
    pub long_press: u32,
    /// Hold duration at which a press is resolved even if not yet released.
    pub long_press_max: u32,
    /// Joystick auto-repeat delay for cursor movement.
    pub move_repeat: u32,
    /// How long the "Invalid placement!" message blocks placement input.
    pub invalid_flash: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            ready_resend: 500,
            attack_resend: 100,
            post_ready: 2000,
            peer_timeout: 120_000,
            long_press: 500,
            long_press_max: 1000,
            move_repeat: 150,
            invalid_flash: 500,
        }
    }
}

/// Strength of the AI opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability that a counter-attack is aimed at a ship square.
    pub fn hit_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.10,
            Difficulty::Medium => 0.20,
            Difficulty::Hard => 0.50,
        }
    }

    /// Rank shown on the settings screen.
    pub fn rank(self) -> &'static str {
        match self {
            Difficulty::Easy => "Lieutenant",
            Difficulty::Medium => "Captain",
            Difficulty::Hard => "Admiral",
        }
    }

    /// Next difficulty when cycling through the settings entry.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rank())
    }
}

/// User-adjustable settings, kept across resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub sound: bool,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            difficulty: Difficulty::Easy,
        }
    }
}
