//! Collaborator interfaces for display, sound and input.
//!
//! The session never draws pixels itself; it asks a [`Frontend`] to repaint
//! cells, move the cursor, print a status line or switch screens.

use crate::config::{Settings, JOY_MAX_RAW, JOY_MIN_RAW};

/// Colour class of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Ocean,
    Ship,
    /// Preview of the ship being placed, fits.
    Ghost,
    /// Preview of the ship being placed, does not fit.
    GhostInvalid,
    /// Shot sent, result outstanding.
    Pending,
    Hit,
    Miss,
}

/// Which of the two on-screen grids a draw call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOrigin {
    Player,
    Enemy,
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    Multiplayer,
    VersusAi,
    Settings,
}

/// Settings screen entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsItem {
    #[default]
    Sound,
    Difficulty,
    Back,
}

impl SettingsItem {
    pub fn up(self) -> Self {
        match self {
            SettingsItem::Sound => SettingsItem::Sound,
            SettingsItem::Difficulty => SettingsItem::Sound,
            SettingsItem::Back => SettingsItem::Difficulty,
        }
    }

    pub fn down(self) -> Self {
        match self {
            SettingsItem::Sound => SettingsItem::Difficulty,
            SettingsItem::Difficulty => SettingsItem::Back,
            SettingsItem::Back => SettingsItem::Back,
        }
    }
}

/// Full-screen layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu(MenuItem),
    Settings {
        selected: SettingsItem,
        settings: Settings,
    },
    Placement,
    Play,
}

/// Fire-and-forget sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    AttackHit,
    AttackMiss,
    EnemyHit,
    EnemyMiss,
    Win,
    Lose,
}

/// Snapshot of the joystick axes and button, sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub x: u16,
    pub y: u16,
    pub pressed: bool,
}

impl ControlState {
    /// Stick centred, button released.
    pub const IDLE: ControlState = ControlState {
        x: crate::config::JOY_CENTER_RAW,
        y: crate::config::JOY_CENTER_RAW,
        pressed: false,
    };

    /// Stick centred, button held.
    pub const PRESSED: ControlState = ControlState {
        pressed: true,
        ..ControlState::IDLE
    };

    pub const UP: ControlState = ControlState {
        y: 0,
        ..ControlState::IDLE
    };

    pub const DOWN: ControlState = ControlState {
        y: 1023,
        ..ControlState::IDLE
    };

    pub const LEFT: ControlState = ControlState {
        x: 0,
        ..ControlState::IDLE
    };

    pub const RIGHT: ControlState = ControlState {
        x: 1023,
        ..ControlState::IDLE
    };

    pub fn up(&self) -> bool {
        self.y < JOY_MIN_RAW
    }

    pub fn down(&self) -> bool {
        self.y > JOY_MAX_RAW
    }

    pub fn left(&self) -> bool {
        self.x < JOY_MIN_RAW
    }

    pub fn right(&self) -> bool {
        self.x > JOY_MAX_RAW
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Rendering and audio sink. Every method defaults to a no-op.
pub trait Frontend {
    fn draw_cell(&mut self, _row: u8, _col: u8, _color: CellColor, _origin: BoardOrigin) {}

    fn draw_cursor(&mut self, _row: u8, _col: u8, _origin: BoardOrigin) {}

    fn status(&mut self, _text: &str) {}

    fn show(&mut self, _screen: Screen) {}

    fn sound(&mut self, _cue: Cue) {}
}

/// Frontend that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFrontend;

impl Frontend for NullFrontend {}

#[cfg(feature = "std")]
pub use console::ConsoleFrontend;

#[cfg(feature = "std")]
mod console {
    use super::{BoardOrigin, CellColor, Cue, Frontend, Screen};
    use crate::config::{GRID_COLS, GRID_ROWS};
    use log::{debug, info};
    use std::fmt::Write;
    use std::string::String;

    type Plane = [[CellColor; GRID_COLS as usize]; GRID_ROWS as usize];

    /// Text frontend: keeps a shadow copy of both grids, logs status lines
    /// and can render the boards side by side.
    pub struct ConsoleFrontend {
        player: Plane,
        enemy: Plane,
        cursor: Option<(u8, u8)>,
        status: String,
        screen: Option<Screen>,
        cues: usize,
    }

    impl ConsoleFrontend {
        pub fn new() -> Self {
            Self {
                player: [[CellColor::Ocean; GRID_COLS as usize]; GRID_ROWS as usize],
                enemy: [[CellColor::Ocean; GRID_COLS as usize]; GRID_ROWS as usize],
                cursor: None,
                status: String::new(),
                screen: None,
                cues: 0,
            }
        }

        pub fn last_status(&self) -> &str {
            &self.status
        }

        pub fn screen(&self) -> Option<Screen> {
            self.screen
        }

        /// Number of sound cues played so far.
        pub fn cues_played(&self) -> usize {
            self.cues
        }

        pub fn cell(&self, row: u8, col: u8, origin: BoardOrigin) -> CellColor {
            let plane = match origin {
                BoardOrigin::Player => &self.player,
                BoardOrigin::Enemy => &self.enemy,
            };
            plane[row as usize][col as usize]
        }

        /// Both grids as text, own fleet on the left.
        pub fn render(&self) -> String {
            let mut out = String::new();
            let header: String = (0..GRID_COLS).map(|c| (b'A' + c) as char).collect();
            let _ = writeln!(out, "   {}    {}", header, header);
            for r in 0..GRID_ROWS as usize {
                let _ = write!(out, "{:2} ", r + 1);
                for c in 0..GRID_COLS as usize {
                    out.push(symbol(self.player[r][c]));
                }
                let _ = write!(out, " {:2} ", r + 1);
                for c in 0..GRID_COLS as usize {
                    if self.cursor == Some((r as u8, c as u8)) {
                        out.push('+');
                    } else {
                        out.push(symbol(self.enemy[r][c]));
                    }
                }
                out.push('\n');
            }
            let _ = writeln!(out, "{}", self.status);
            out
        }

        fn clear(&mut self) {
            self.player = [[CellColor::Ocean; GRID_COLS as usize]; GRID_ROWS as usize];
            self.enemy = self.player;
            self.cursor = None;
        }
    }

    impl Default for ConsoleFrontend {
        fn default() -> Self {
            Self::new()
        }
    }

    fn symbol(color: CellColor) -> char {
        match color {
            CellColor::Ocean => '.',
            CellColor::Ship => 'S',
            CellColor::Ghost => 'g',
            CellColor::GhostInvalid => '!',
            CellColor::Pending => '?',
            CellColor::Hit => 'X',
            CellColor::Miss => 'o',
        }
    }

    impl Frontend for ConsoleFrontend {
        fn draw_cell(&mut self, row: u8, col: u8, color: CellColor, origin: BoardOrigin) {
            if row >= GRID_ROWS || col >= GRID_COLS {
                return;
            }
            match origin {
                BoardOrigin::Player => self.player[row as usize][col as usize] = color,
                BoardOrigin::Enemy => {
                    self.enemy[row as usize][col as usize] = color;
                    if self.cursor == Some((row, col)) {
                        self.cursor = None;
                    }
                }
            }
        }

        fn draw_cursor(&mut self, row: u8, col: u8, origin: BoardOrigin) {
            if origin == BoardOrigin::Enemy {
                self.cursor = Some((row, col));
            }
        }

        fn status(&mut self, text: &str) {
            info!("{}", text);
            self.status.clear();
            self.status.push_str(text);
        }

        fn show(&mut self, screen: Screen) {
            debug!("screen {:?}", screen);
            if matches!(screen, Screen::Placement | Screen::MainMenu(_)) {
                self.clear();
            }
            self.screen = Some(screen);
        }

        fn sound(&mut self, cue: Cue) {
            debug!("sound {:?}", cue);
            self.cues += 1;
        }
    }
}
