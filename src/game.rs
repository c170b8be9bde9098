//! The game session: every piece of per-game state plus the tick loop that
//! drives it.
//!
//! [`Session::tick`] advances one millisecond. Within a tick, incoming lines
//! are dispatched first, then retransmissions and the peer timeout are
//! evaluated, then the current [`GamePhase`] handles input.

use log::{debug, info, trace, warn};
use rand::RngCore;

use crate::{
    board::{can_place, Board},
    common::{BoardError, Outcome, Side},
    config::{
        Settings, Timing, FLEET_LENGTHS, GRID_COLS, GRID_ROWS, NUM_SHIPS, TOTAL_SHIP_CELLS,
    },
    link::{Effect, Link, NetEvent, NetState, TurnOrder},
    opponent::AiOpponent,
    player::Player,
    protocol::Message,
    retry::RetryTimers,
    ship::{Orientation, Ship},
    transport::LineTransport,
    ui::{BoardOrigin, CellColor, ControlState, Cue, Frontend, MenuItem, Screen, SettingsItem},
};

/// Who the session plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Multiplayer,
    VersusAi,
}

/// UI-facing phase. `MyTurn`, `WaitRes`, `EnemyTurn` and `Over` are only ever
/// entered as a consequence of the network state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Reset,
    MainMenu,
    Settings,
    NewGame,
    Placing,
    Wait,
    MyTurn,
    WaitRes,
    EnemyTurn,
    Over,
}

/// Ship preview during placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub index: usize,
    pub orientation: Orientation,
}

impl Ghost {
    fn new() -> Self {
        Self {
            index: 0,
            orientation: Orientation::Horizontal,
        }
    }

    fn length(&self) -> u8 {
        FLEET_LENGTHS[self.index.min(NUM_SHIPS - 1)]
    }
}

pub struct Session<W: LineTransport, F: Frontend, R: RngCore> {
    wire: W,
    opponent: AiOpponent,
    frontend: F,
    rng: R,
    timing: Timing,
    settings: Settings,

    mode: Mode,
    phase: GamePhase,
    link: Link,
    timers: RetryTimers,
    board: Board,
    clock: u32,

    cursor: (u8, u8),
    ghost: Ghost,
    menu: MenuItem,
    settings_item: SettingsItem,
    button_latch: bool,
    /// Tick at which the current placement press started, while unresolved.
    hold_started: Option<u32>,
    /// Tick at which "Invalid placement!" went up, while it still blocks input.
    invalid_since: Option<u32>,
    /// Tick of the last cursor or menu step.
    last_move: Option<u32>,
    over_taps: u8,
}

impl<W: LineTransport, F: Frontend, R: RngCore> Session<W, F, R> {
    pub fn new(wire: W, frontend: F, rng: R) -> Self {
        let settings = Settings::default();
        Self {
            wire,
            opponent: AiOpponent::new(settings.difficulty),
            frontend,
            rng,
            timing: Timing::default(),
            settings,
            mode: Mode::Multiplayer,
            phase: GamePhase::Reset,
            link: Link::new(),
            timers: RetryTimers::new(),
            board: Board::new(),
            clock: 0,
            cursor: centre(),
            ghost: Ghost::new(),
            menu: MenuItem::Multiplayer,
            settings_item: SettingsItem::Sound,
            button_latch: false,
            hold_started: None,
            invalid_since: None,
            last_move: None,
            over_taps: 0,
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Start the tick clock at `clock` instead of zero.
    pub fn with_clock(mut self, clock: u32) -> Self {
        self.clock = clock;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn net_state(&self) -> NetState {
        self.link.state()
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn timers(&self) -> &RetryTimers {
        &self.timers
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn clock(&self) -> u32 {
        self.clock
    }

    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn ghost(&self) -> Ghost {
        self.ghost
    }

    pub fn menu(&self) -> MenuItem {
        self.menu
    }

    pub fn settings_item(&self) -> SettingsItem {
        self.settings_item
    }

    pub fn opponent(&self) -> &AiOpponent {
        &self.opponent
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn wire(&self) -> &W {
        &self.wire
    }

    pub fn wire_mut(&mut self) -> &mut W {
        &mut self.wire
    }

    /// Advance the session by one tick.
    pub fn tick(&mut self, controls: ControlState) {
        self.incoming().begin_tick();
        while let Some(line) = self.incoming().poll_line() {
            self.inject_line(&line);
        }

        self.service_timers();

        let edge = controls.pressed && !self.button_latch;
        match self.phase {
            GamePhase::Reset => self.reset(),
            GamePhase::MainMenu => self.handle_main_menu(controls, edge),
            GamePhase::Settings => self.handle_settings(controls, edge),
            GamePhase::NewGame => self.new_game(),
            GamePhase::Placing => self.handle_placing(controls, edge),
            GamePhase::Wait => self.resolve_turn_order(),
            GamePhase::MyTurn => self.handle_my_turn(controls, edge),
            GamePhase::WaitRes | GamePhase::EnemyTurn => {}
            GamePhase::Over => self.handle_over(edge),
        }
        self.button_latch = controls.pressed;

        self.clock = self.clock.wrapping_add(1);
    }

    /// Full reset: board, link, timers and buffers cleared, main menu shown.
    /// Settings survive.
    pub fn reset(&mut self) {
        self.board.reset();
        self.link.apply(NetEvent::Reset);
        self.timers.clear();
        self.wire.clear();
        self.opponent.reset(self.settings.difficulty);
        self.ghost = Ghost::new();
        self.cursor = centre();
        self.hold_started = None;
        self.invalid_since = None;
        self.last_move = None;
        self.over_taps = 0;
        self.menu = MenuItem::Multiplayer;
        self.phase = GamePhase::MainMenu;
        self.frontend.show(Screen::MainMenu(self.menu));
        info!("session reset");
    }

    /// Skip the menu and start placing a fleet for a game in `mode`.
    pub fn start_game(&mut self, mode: Mode) {
        self.reset();
        self.mode = mode;
        self.new_game();
    }

    /// Place the next fleet ship at (`row`, `col`). Finishing the fleet
    /// announces readiness to the peer.
    pub fn place_ship(
        &mut self,
        row: u8,
        col: u8,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let index = self.board.local.placed();
        let length = *FLEET_LENGTHS.get(index).ok_or(BoardError::InvalidIndex)?;
        let ship = Ship::new(row, col, length, orientation);
        if !can_place(&self.board.local.occupied(), &ship) {
            return Err(BoardError::UnableToPlaceShip);
        }
        self.board.place(index, ship)?;
        for (r, c) in ship.cells() {
            self.frontend.draw_cell(r, c, CellColor::Ship, BoardOrigin::Player);
        }
        self.ghost.index = index + 1;
        if self.board.local.placed() == NUM_SHIPS {
            self.finish_placement();
        }
        Ok(())
    }

    /// Let `player` place whatever is left of the fleet.
    pub fn place_remaining<P: Player>(&mut self, player: &mut P) -> Result<(), BoardError> {
        if self.phase != GamePhase::Placing {
            return Ok(());
        }
        player.place_ships(&mut self.rng, &mut self.board.local)?;
        for ship in self.board.local.fleet().iter().flatten() {
            for (r, c) in ship.cells() {
                self.frontend.draw_cell(r, c, CellColor::Ship, BoardOrigin::Player);
            }
        }
        self.ghost.index = self.board.local.placed();
        if self.board.local.placed() == NUM_SHIPS {
            self.finish_placement();
        }
        Ok(())
    }

    /// Fire at a fresh peer cell. Returns `false` if it is not our turn or
    /// the cell was already attacked.
    pub fn fire(&mut self, row: u8, col: u8) -> bool {
        if self.link.state() != NetState::MyTurn || row >= GRID_ROWS || col >= GRID_COLS {
            return false;
        }
        // The bit goes up before `A` leaves so a retransmit is never counted twice.
        if !self.board.peer.mark_attacked(row, col).unwrap_or(false) {
            return false;
        }
        self.link.set_pending(row, col);
        if let Some(effects) = self.link.apply(NetEvent::ShotFired) {
            self.run_effects(effects);
        }
        self.frontend.draw_cell(row, col, CellColor::Pending, BoardOrigin::Enemy);
        self.frontend.status("Waiting for result...");
        self.sync_phase();
        true
    }

    /// Let `player` pick and fire the next shot.
    pub fn fire_with<P: Player>(&mut self, player: &mut P) -> bool {
        if self.link.state() != NetState::MyTurn {
            return false;
        }
        match player.select_target(&mut self.rng, &self.board.peer) {
            Some((row, col)) => self.fire(row, col),
            None => false,
        }
    }

    pub fn tx_ready(&mut self) {
        self.transmit(Message::Ready {
            token: self.link.self_token(),
        });
    }

    pub fn tx_attack(&mut self, row: u8, col: u8) {
        self.transmit(Message::Attack { row, col });
    }

    pub fn tx_result(&mut self, row: u8, col: u8, outcome: Outcome) {
        self.transmit(Message::Result { row, col, outcome });
    }

    /// Decode one line and dispatch it as if it had arrived from the peer.
    pub fn inject_line(&mut self, line: &str) {
        let Some(msg) = Message::parse(line) else {
            trace!("dropping malformed line '{}'", line);
            return;
        };
        trace!("rx {}", msg);
        match msg {
            Message::Ready { token } => self.on_ready(token),
            Message::Attack { row, col } => self.on_attack(row, col),
            Message::Result { row, col, outcome } => self.on_result(row, col, outcome),
        }
    }

    fn incoming(&mut self) -> &mut dyn LineTransport {
        match self.mode {
            Mode::Multiplayer => &mut self.wire,
            Mode::VersusAi => self.opponent.queue_mut(),
        }
    }

    fn transmit(&mut self, msg: Message) {
        trace!("tx {}", msg);
        match self.mode {
            Mode::Multiplayer => self.wire.send(&msg),
            Mode::VersusAi => self.opponent.respond(&msg, &self.board.local, &mut self.rng),
        }
    }

    fn on_ready(&mut self, token: u16) {
        self.link.record_peer_token(token);
        if self.link.state() == NetState::WaitReady {
            self.link.apply(NetEvent::PeerReady);
        }
    }

    fn on_attack(&mut self, row: u8, col: u8) {
        if row >= GRID_ROWS || col >= GRID_COLS {
            trace!("attack off the grid at ({}, {})", row, col);
            return;
        }
        if self.link.state() == NetState::Decide {
            self.resolve_turn_order();
        }
        let state = self.link.state();
        if state == NetState::Idle {
            debug!("ignoring attack while idle");
            return;
        }

        let hit = self.board.local.is_occupied(row, col);
        if self.board.local.is_attacked(row, col) {
            // Our earlier R was lost; answer again without touching the board.
            self.tx_result(row, col, Outcome::from_hit(hit));
            return;
        }
        if state != NetState::PeerTurn {
            debug!("ignoring attack in {:?}", state);
            return;
        }

        if let Err(e) = self.board.mark_attacked(Side::Local, row, col) {
            debug!("attack at ({}, {}) not recorded: {}", row, col, e);
            return;
        }
        let sunk = hit && self.board.local.register_hit();
        self.frontend.draw_cell(
            row,
            col,
            if hit { CellColor::Hit } else { CellColor::Miss },
            BoardOrigin::Player,
        );
        self.tx_result(row, col, Outcome::from_hit(hit));
        if let Some(effects) = self.link.apply(NetEvent::AttackAbsorbed { fleet_sunk: sunk }) {
            self.run_effects(effects);
        }
        self.sync_phase();

        if sunk {
            info!("fleet sunk, game lost");
            self.frontend.status("You lose - tap twice");
            self.cue(Cue::Lose);
        } else {
            self.frontend.status("Your turn");
            self.last_move = None;
            let (r, c) = self.cursor;
            self.frontend.draw_cursor(r, c, BoardOrigin::Enemy);
            self.cue(if hit { Cue::EnemyHit } else { Cue::EnemyMiss });
        }
    }

    fn on_result(&mut self, row: u8, col: u8, outcome: Outcome) {
        if self.link.state() != NetState::WaitRes || self.link.pending() != Some((row, col)) {
            debug!("ignoring stray result for ({}, {})", row, col);
            return;
        }
        let hit = outcome.is_hit();
        self.cue(if hit { Cue::AttackHit } else { Cue::AttackMiss });

        let sunk = if hit {
            if let Err(e) = self.board.peer.confirm_ship(row, col) {
                debug!("hit at ({}, {}) not recorded: {}", row, col, e);
            }
            self.board.peer.register_hit()
        } else {
            false
        };
        self.frontend.draw_cell(
            row,
            col,
            if hit { CellColor::Hit } else { CellColor::Miss },
            BoardOrigin::Enemy,
        );
        let (r, c) = self.cursor;
        self.frontend.draw_cursor(r, c, BoardOrigin::Enemy);

        if let Some(effects) = self.link.apply(NetEvent::ResultReceived { fleet_sunk: sunk }) {
            self.run_effects(effects);
        }
        self.sync_phase();

        if sunk {
            info!("peer fleet sunk, game won");
            self.frontend.status("You win! - tap twice");
            self.cue(Cue::Win);
        } else {
            self.frontend.status("Enemy turn");
        }
    }

    fn service_timers(&mut self) {
        let due = self.timers.tick(self.link.state(), &self.timing);
        if due.resend_ready {
            self.tx_ready();
        }
        if due.resend_attack {
            if let Some((row, col)) = self.link.pending() {
                trace!("resending attack at ({}, {})", row, col);
                self.tx_attack(row, col);
            }
        }
        if due.peer_timeout {
            warn!("no attack from peer for {} ticks", self.timers.peer_idle());
            self.frontend.status("Peer lost - reset");
            if let Some(effects) = self.link.apply(NetEvent::PeerTimeout) {
                self.run_effects(effects);
            }
        }
    }

    fn run_effects(&mut self, effects: &'static [Effect]) {
        for effect in effects {
            match effect {
                Effect::SendReady => self.tx_ready(),
                Effect::RestartReadyTimer => self.timers.restart_ready(),
                Effect::StartPostReady => self.timers.start_post_ready(self.timing.post_ready),
                Effect::ArmPeerBoard => self.board.peer.set_remaining(TOTAL_SHIP_CELLS),
                Effect::SendAttack => {
                    if let Some((row, col)) = self.link.pending() {
                        self.tx_attack(row, col);
                    }
                }
                Effect::RestartAttackTimer => self.timers.restart_attack(),
                Effect::RestartPeerClock => self.timers.restart_peer_clock(),
                // Applied by the link itself.
                Effect::ClearPending => {}
                Effect::ForceReset => {
                    self.reset();
                    return;
                }
            }
        }
    }

    /// Mirror the network state into the UI phase.
    fn sync_phase(&mut self) {
        self.phase = match self.link.state() {
            NetState::MyTurn => GamePhase::MyTurn,
            NetState::PeerTurn => GamePhase::EnemyTurn,
            NetState::WaitRes => GamePhase::WaitRes,
            NetState::GameOver => GamePhase::Over,
            _ => return,
        };
    }

    fn cue(&mut self, cue: Cue) {
        if self.settings.sound {
            self.frontend.sound(cue);
        }
    }

    fn finish_placement(&mut self) {
        let token = self.clock as u16;
        self.link.announce(token);
        let Some(effects) = self.link.apply(NetEvent::PlacementComplete) else {
            return;
        };
        info!("fleet placed, announcing token {}", token);
        self.run_effects(effects);
        self.phase = GamePhase::Wait;
        self.frontend.status("Searching peer...");
    }

    /// Compare tokens once the peer's `READY` has arrived.
    fn resolve_turn_order(&mut self) {
        if self.link.state() != NetState::Decide {
            return;
        }
        let Some(order) = self.link.decide() else {
            return;
        };
        if order == TurnOrder::Tie {
            warn!("token tie at {}", self.link.self_token());
            self.frontend.status("Token tie - reset");
        }
        let Some(effects) = self.link.apply(NetEvent::TurnDecided(order)) else {
            return;
        };
        self.run_effects(effects);
        if order == TurnOrder::Tie {
            return;
        }

        info!(
            "turn order decided: {:?} ({} vs {})",
            order,
            self.link.self_token(),
            self.link.peer_token().unwrap_or(0)
        );
        self.cursor = centre();
        self.last_move = None;
        self.draw_play_screen();
        self.sync_phase();
        self.frontend.status(if order == TurnOrder::LocalFirst {
            "Your turn"
        } else {
            "Enemy turn"
        });
    }

    fn draw_play_screen(&mut self) {
        self.frontend.show(Screen::Play);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let own = self.local_color(row, col);
                self.frontend.draw_cell(row, col, own, BoardOrigin::Player);
                let theirs = self.enemy_color(row, col);
                self.frontend.draw_cell(row, col, theirs, BoardOrigin::Enemy);
            }
        }
        let (r, c) = self.cursor;
        self.frontend.draw_cursor(r, c, BoardOrigin::Enemy);
    }

    fn local_color(&self, row: u8, col: u8) -> CellColor {
        let grid = &self.board.local;
        match (grid.is_attacked(row, col), grid.is_occupied(row, col)) {
            (true, true) => CellColor::Hit,
            (true, false) => CellColor::Miss,
            (false, true) => CellColor::Ship,
            (false, false) => CellColor::Ocean,
        }
    }

    fn enemy_color(&self, row: u8, col: u8) -> CellColor {
        let grid = &self.board.peer;
        if !grid.is_attacked(row, col) {
            CellColor::Ocean
        } else if grid.is_occupied(row, col) {
            CellColor::Hit
        } else if self.link.pending() == Some((row, col)) {
            CellColor::Pending
        } else {
            CellColor::Miss
        }
    }

    fn new_game(&mut self) {
        if self.mode == Mode::VersusAi {
            self.opponent.reset(self.settings.difficulty);
        }
        self.ghost = Ghost::new();
        self.cursor = centre();
        self.last_move = None;
        self.frontend.show(Screen::Placement);
        self.draw_ghost(true);
        self.frontend.status("Use stick to place");
        self.phase = GamePhase::Placing;
        info!("new game, mode {:?}", self.mode);
    }

    /// Auto-repeat gate for cursor and menu steps; elapsed ticks wrap with the clock.
    fn may_move(&self) -> bool {
        match self.last_move {
            Some(at) => self.clock.wrapping_sub(at) >= self.timing.move_repeat,
            None => true,
        }
    }

    fn handle_main_menu(&mut self, controls: ControlState, edge: bool) {
        if self.may_move() {
            let next = match self.menu {
                MenuItem::Multiplayer if controls.down() => Some(MenuItem::VersusAi),
                MenuItem::VersusAi if controls.up() => Some(MenuItem::Multiplayer),
                MenuItem::VersusAi if controls.right() => Some(MenuItem::Settings),
                MenuItem::Settings if controls.left() => Some(MenuItem::VersusAi),
                _ => None,
            };
            if let Some(item) = next {
                self.menu = item;
                self.frontend.show(Screen::MainMenu(item));
                self.last_move = Some(self.clock);
            }
        }

        if edge {
            match self.menu {
                MenuItem::Multiplayer => {
                    self.mode = Mode::Multiplayer;
                    self.phase = GamePhase::NewGame;
                }
                MenuItem::VersusAi => {
                    self.mode = Mode::VersusAi;
                    self.phase = GamePhase::NewGame;
                }
                MenuItem::Settings => {
                    self.settings_item = SettingsItem::Sound;
                    self.phase = GamePhase::Settings;
                    self.show_settings();
                }
            }
        }
    }

    fn show_settings(&mut self) {
        self.frontend.show(Screen::Settings {
            selected: self.settings_item,
            settings: self.settings,
        });
    }

    fn handle_settings(&mut self, controls: ControlState, edge: bool) {
        if self.may_move() {
            let item = if controls.up() {
                self.settings_item.up()
            } else if controls.down() {
                self.settings_item.down()
            } else {
                self.settings_item
            };
            if item != self.settings_item {
                self.settings_item = item;
                self.last_move = Some(self.clock);
                self.show_settings();
            }
        }

        if !edge {
            return;
        }
        match self.settings_item {
            SettingsItem::Sound => {
                self.settings.sound = !self.settings.sound;
                self.frontend.status(if self.settings.sound {
                    "Sounds: On"
                } else {
                    "Sounds: Off"
                });
            }
            SettingsItem::Difficulty => {
                self.settings.difficulty = self.settings.difficulty.cycle();
                self.frontend.status(self.settings.difficulty.rank());
            }
            SettingsItem::Back => {
                self.phase = GamePhase::MainMenu;
                self.frontend.show(Screen::MainMenu(self.menu));
                return;
            }
        }
        self.show_settings();
    }

    fn handle_placing(&mut self, controls: ControlState, edge: bool) {
        if let Some(since) = self.invalid_since {
            if self.clock.wrapping_sub(since) < self.timing.invalid_flash {
                return;
            }
            self.invalid_since = None;
            self.frontend.status("Use stick to place");
        }

        if self.may_move() {
            if let Some(cursor) = step(self.cursor, controls) {
                self.draw_ghost(false);
                self.cursor = clamp(cursor, self.ghost);
                self.draw_ghost(true);
                self.last_move = Some(self.clock);
            }
        }

        if edge {
            self.hold_started = Some(self.clock);
        }
        let Some(start) = self.hold_started else {
            return;
        };
        let held = self.clock.wrapping_sub(start);
        if controls.pressed && held < self.timing.long_press_max {
            return;
        }
        self.hold_started = None;

        if held >= self.timing.long_press {
            self.draw_ghost(false);
            self.ghost.orientation = self.ghost.orientation.rotated();
            self.cursor = clamp(self.cursor, self.ghost);
            self.draw_ghost(true);
            return;
        }

        let (row, col) = self.cursor;
        self.draw_ghost(false);
        match self.place_ship(row, col, self.ghost.orientation) {
            Ok(()) => {
                if self.phase == GamePhase::Placing {
                    self.cursor = clamp(self.cursor, self.ghost);
                    self.draw_ghost(true);
                }
            }
            Err(e) => {
                debug!("placement rejected: {}", e);
                self.draw_ghost(true);
                self.frontend.status("Invalid placement!");
                self.invalid_since = Some(self.clock);
            }
        }
    }

    /// Paint or erase the placement preview at the cursor.
    fn draw_ghost(&mut self, visible: bool) {
        if self.ghost.index >= NUM_SHIPS {
            return;
        }
        let (row, col) = self.cursor;
        let ship = Ship::new(row, col, self.ghost.length(), self.ghost.orientation);
        let fits = can_place(&self.board.local.occupied(), &ship);
        for (r, c) in ship.cells() {
            if r >= GRID_ROWS || c >= GRID_COLS {
                continue;
            }
            let color = match (visible, fits) {
                (true, true) => CellColor::Ghost,
                (true, false) => CellColor::GhostInvalid,
                (false, _) => self.local_color(r, c),
            };
            self.frontend.draw_cell(r, c, color, BoardOrigin::Player);
        }
    }

    fn handle_my_turn(&mut self, controls: ControlState, edge: bool) {
        if self.may_move() {
            if let Some(cursor) = step(self.cursor, controls) {
                let (r, c) = self.cursor;
                let color = self.enemy_color(r, c);
                self.frontend.draw_cell(r, c, color, BoardOrigin::Enemy);
                self.cursor = cursor;
                self.frontend.draw_cursor(cursor.0, cursor.1, BoardOrigin::Enemy);
                self.last_move = Some(self.clock);
            }
        }
        if edge {
            let (row, col) = self.cursor;
            self.fire(row, col);
        }
    }

    fn handle_over(&mut self, edge: bool) {
        if !edge {
            return;
        }
        self.over_taps += 1;
        if self.over_taps >= 2 {
            self.reset();
        }
    }
}

fn centre() -> (u8, u8) {
    (GRID_ROWS / 2, GRID_COLS / 2)
}

/// One cursor step in the direction the stick points, if any and if it stays
/// on the grid. Vertical wins over horizontal.
fn step((row, col): (u8, u8), controls: ControlState) -> Option<(u8, u8)> {
    if controls.up() && row > 0 {
        Some((row - 1, col))
    } else if controls.down() && row < GRID_ROWS - 1 {
        Some((row + 1, col))
    } else if controls.left() && col > 0 {
        Some((row, col - 1))
    } else if controls.right() && col < GRID_COLS - 1 {
        Some((row, col + 1))
    } else {
        None
    }
}

/// Pull the cursor back so the previewed ship stays on the grid.
fn clamp((row, col): (u8, u8), ghost: Ghost) -> (u8, u8) {
    let len = ghost.length();
    match ghost.orientation {
        Orientation::Horizontal => (row, col.min(GRID_COLS - len)),
        Orientation::Vertical => (row.min(GRID_ROWS - len), col),
    }
}
