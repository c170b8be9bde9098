mod common;

use armada::{
    Autopilot, BoardOrigin, CellColor, ConsoleFrontend, ControlState, Difficulty, GamePhase,
    Lfsr16, Mode, NetState, Screen, Session, Settings,
};
use common::*;

/// Let the autopilot play until the session settles in `Over`.
fn autoplay(s: &mut TestSession, limit: u32) -> u32 {
    let mut pilot = Autopilot::new();
    for tick in 0..limit {
        pilot.drive(s).unwrap();
        s.tick(ControlState::IDLE);
        if s.phase() == GamePhase::Over {
            return tick;
        }
    }
    panic!("game did not finish in {} ticks", limit);
}

#[test]
fn test_ai_answers_ready_with_fleet() {
    let mut s = session();
    s.start_game(Mode::VersusAi);
    idle(&mut s, 500);
    place_fleet_left(&mut s);
    assert_eq!(s.opponent().grid().remaining(), 17);
    assert_eq!(s.opponent().grid().placed(), 5);
    assert!(s.wire().sent.is_empty());

    idle(&mut s, 1);
    assert_eq!(s.phase(), GamePhase::MyTurn);
    assert_eq!(s.link().peer_token(), Some(1));
}

#[test]
fn test_ai_answers_then_counter_attacks() {
    let mut s = session();
    s.start_game(Mode::VersusAi);
    idle(&mut s, 500);
    place_fleet_left(&mut s);
    idle(&mut s, 1);

    assert!(s.fire(3, 3));
    let hit = s.opponent().grid().is_occupied(3, 3);
    idle(&mut s, 1);
    assert_eq!(s.phase(), GamePhase::EnemyTurn);
    assert_eq!(s.board().peer.is_occupied(3, 3), hit);

    idle(&mut s, 1);
    assert_eq!(s.phase(), GamePhase::MyTurn);
    assert_eq!(s.board().local.attacked().count_ones(), 1);
    assert!(s.wire().sent.is_empty());
}

#[test]
fn test_token_tie_with_ai_resets() {
    let mut s = session();
    s.start_game(Mode::VersusAi);
    idle(&mut s, 1);
    place_fleet_left(&mut s);
    assert_eq!(s.link().self_token(), 1);
    idle(&mut s, 1);
    assert_eq!(s.phase(), GamePhase::MainMenu);
    assert_eq!(s.frontend().last_status(), Some("Token tie - reset"));
}

#[test]
fn test_ai_opens_when_it_holds_first_move() {
    let mut s = session();
    s.start_game(Mode::VersusAi);
    place_fleet_left(&mut s);
    assert_eq!(s.link().self_token(), 0);

    idle(&mut s, 1);
    assert_eq!(s.net_state(), NetState::PeerTurn);
    idle(&mut s, 1);
    assert_eq!(s.phase(), GamePhase::MyTurn);
    assert_eq!(s.board().local.attacked().count_ones(), 1);
}

#[test]
fn test_autopilot_beats_or_loses_to_ai() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut s = session().with_settings(Settings {
            difficulty,
            ..Settings::default()
        });
        s.start_game(Mode::VersusAi);
        idle(&mut s, 700);
        autoplay(&mut s, 10_000);

        let lost = s.board().local.remaining() == 0;
        let won = s.board().peer.remaining() == 0;
        assert!(lost ^ won, "exactly one fleet must be sunk");
        assert_eq!(s.opponent().player().difficulty(), difficulty);
        assert_eq!(s.opponent().grid().remaining(), s.board().peer.remaining());
    }
}

#[test]
fn test_autopilot_game_with_ai_opening() {
    let mut s = session();
    s.start_game(Mode::VersusAi);
    autoplay(&mut s, 10_000);
    assert_eq!(s.link().self_token(), 0);
    assert!(s.board().local.remaining() == 0 || s.board().peer.remaining() == 0);
}

#[test]
fn test_over_then_double_tap_returns_to_menu() {
    let mut s = session();
    s.start_game(Mode::VersusAi);
    idle(&mut s, 300);
    autoplay(&mut s, 10_000);
    tap(&mut s);
    assert_eq!(s.phase(), GamePhase::Over);
    tap(&mut s);
    assert_eq!(s.phase(), GamePhase::MainMenu);
    assert_eq!(s.opponent().grid().placed(), 0);
}

#[test]
fn test_console_frontend_tracks_a_full_game() {
    let mut s = Session::new(RecordingWire::default(), ConsoleFrontend::new(), Lfsr16::new(77));
    let mut pilot = Autopilot::new();
    s.start_game(Mode::VersusAi);
    idle_console(&mut s, 400);
    for _ in 0..10_000 {
        pilot.drive(&mut s).unwrap();
        s.tick(ControlState::IDLE);
        if s.phase() == GamePhase::Over {
            break;
        }
    }
    assert_eq!(s.phase(), GamePhase::Over);

    let console = s.frontend();
    assert_eq!(console.screen(), Some(Screen::Play));
    assert!(console.cues_played() >= 2);
    assert!(console.last_status().ends_with("tap twice"));
    let shots = s.board().peer.attacked();
    let (row, col) = shots.iter_set_bits().next().map(|(r, c)| (r as u8, c as u8)).unwrap();
    assert!(matches!(
        console.cell(row, col, BoardOrigin::Enemy),
        CellColor::Hit | CellColor::Miss
    ));
    assert!(console.render().starts_with("   ABCDEFGHIJ    ABCDEFGHIJ"));
}

fn idle_console<W: armada::LineTransport>(s: &mut Session<W, ConsoleFrontend, Lfsr16>, ticks: u32) {
    for _ in 0..ticks {
        s.tick(ControlState::IDLE);
    }
}
