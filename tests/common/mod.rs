#![allow(dead_code)]

use std::collections::VecDeque;

use armada::{
    BoardOrigin, CellColor, ControlState, Cue, Frontend, Lfsr16, LineTransport, Message, Mode,
    Orientation, Screen, Session, FLEET_LENGTHS,
};

/// Line transport that records what was sent and replays queued lines.
#[derive(Default)]
pub struct RecordingWire {
    pub sent: Vec<String>,
    pub inbox: VecDeque<String>,
}

impl RecordingWire {
    pub fn count(&self, line: &str) -> usize {
        self.sent.iter().filter(|l| l.as_str() == line).count()
    }
}

impl LineTransport for RecordingWire {
    fn send(&mut self, msg: &Message) {
        self.sent.push(msg.to_string());
    }

    fn poll_line(&mut self) -> Option<String> {
        self.inbox.pop_front()
    }

    fn clear(&mut self) {
        self.inbox.clear();
    }
}

/// Frontend that remembers the calls it cares about.
#[derive(Default)]
pub struct RecordingFrontend {
    pub statuses: Vec<String>,
    pub screens: Vec<Screen>,
    pub cues: Vec<Cue>,
    pub cells: Vec<(u8, u8, CellColor, BoardOrigin)>,
}

impl RecordingFrontend {
    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }
}

impl Frontend for RecordingFrontend {
    fn draw_cell(&mut self, row: u8, col: u8, color: CellColor, origin: BoardOrigin) {
        self.cells.push((row, col, color, origin));
    }

    fn status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn show(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    fn sound(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

pub type TestSession = Session<RecordingWire, RecordingFrontend, Lfsr16>;

pub fn session() -> TestSession {
    Session::new(
        RecordingWire::default(),
        RecordingFrontend::default(),
        Lfsr16::new(0x1234),
    )
}

pub fn idle(session: &mut TestSession, ticks: u32) {
    for _ in 0..ticks {
        session.tick(ControlState::IDLE);
    }
}

/// Press and release the button once.
pub fn tap(session: &mut TestSession) {
    session.tick(ControlState::PRESSED);
    session.tick(ControlState::IDLE);
}

/// Ships on the even rows, left-aligned: cells (2k, 0..len).
pub fn place_fleet_left(session: &mut TestSession) {
    for (i, _) in FLEET_LENGTHS.iter().enumerate() {
        session
            .place_ship(i as u8 * 2, 0, Orientation::Horizontal)
            .unwrap();
    }
}

/// Start a multiplayer game, finish placement at `token` and receive the
/// peer's `READY`.
pub fn start_with_tokens(local: u16, peer: u16) -> TestSession {
    let mut s = session();
    s.start_game(Mode::Multiplayer);
    idle(&mut s, u32::from(local));
    place_fleet_left(&mut s);
    assert_eq!(s.link().self_token(), local);
    deliver(&mut s, &format!("READY {}", peer));
    s
}

/// Queue `line` on the wire and run one tick.
pub fn deliver(session: &mut TestSession, line: &str) {
    session.wire_mut().inbox.push_back(line.to_string());
    session.tick(ControlState::IDLE);
}
