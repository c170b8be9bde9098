use armada::{
    transport::in_memory::MemorySerial, Autopilot, ControlState, GamePhase, Lfsr16, Mode,
    NullFrontend, Session, WireTransport,
};
use std::sync::atomic::Ordering;

type WiredSession = Session<WireTransport<MemorySerial>, NullFrontend, Lfsr16>;

fn pair(seed1: u16, seed2: u16) -> (WiredSession, WiredSession) {
    let (a, b) = MemorySerial::pair();
    (
        Session::new(WireTransport::new(a), NullFrontend, Lfsr16::new(seed1)),
        Session::new(WireTransport::new(b), NullFrontend, Lfsr16::new(seed2)),
    )
}

fn tick_both(s1: &mut WiredSession, s2: &mut WiredSession, ticks: u32) {
    for _ in 0..ticks {
        s1.tick(ControlState::IDLE);
        s2.tick(ControlState::IDLE);
    }
}

#[test]
fn test_two_autopilots_play_to_the_end() {
    let (mut s1, mut s2) = pair(0x0101, 0x0202);
    let mut pilots = [Autopilot::new(), Autopilot::new()];
    tick_both(&mut s1, &mut s2, 1);
    s1.start_game(Mode::Multiplayer);
    pilots[0].drive(&mut s1).unwrap();
    tick_both(&mut s1, &mut s2, 250);
    s2.start_game(Mode::Multiplayer);

    let mut finished = false;
    for _ in 0..200_000 {
        pilots[0].drive(&mut s1).unwrap();
        s1.tick(ControlState::IDLE);
        pilots[1].drive(&mut s2).unwrap();
        s2.tick(ControlState::IDLE);
        if s1.phase() == GamePhase::Over && s2.phase() == GamePhase::Over {
            finished = true;
            break;
        }
    }
    assert!(finished, "{:?} / {:?}", s1.phase(), s2.phase());

    let s1_lost = s1.board().local.remaining() == 0;
    let s2_lost = s2.board().local.remaining() == 0;
    assert!(s1_lost ^ s2_lost);
    assert_eq!(s1.board().peer.remaining(), s2.board().local.remaining());
    assert_eq!(s2.board().peer.remaining(), s1.board().local.remaining());
    assert_eq!(
        s1.board().peer.attacked().count_ones(),
        s2.board().local.attacked().count_ones()
    );
}

#[test]
fn test_lost_result_is_recovered_by_retransmission() {
    let (a, b) = MemorySerial::pair();
    let mute_b = b.mute_handle();
    let mut s1 = Session::new(WireTransport::new(a), NullFrontend, Lfsr16::new(7));
    let mut s2 = Session::new(WireTransport::new(b), NullFrontend, Lfsr16::new(9));

    tick_both(&mut s1, &mut s2, 1);
    s1.start_game(Mode::Multiplayer);
    s2.start_game(Mode::Multiplayer);
    tick_both(&mut s1, &mut s2, 400);
    s2.place_remaining(&mut Autopilot::new()).unwrap();
    tick_both(&mut s1, &mut s2, 100);
    s1.place_remaining(&mut Autopilot::new()).unwrap();
    assert!(s1.link().self_token() > s2.link().self_token());

    tick_both(&mut s1, &mut s2, 1000);
    assert_eq!(s1.phase(), GamePhase::MyTurn);
    assert_eq!(s2.phase(), GamePhase::EnemyTurn);

    mute_b.store(true, Ordering::SeqCst);
    assert!(s1.fire(0, 0));
    tick_both(&mut s1, &mut s2, 250);
    assert_eq!(s1.phase(), GamePhase::WaitRes);
    assert_eq!(s2.phase(), GamePhase::MyTurn);

    mute_b.store(false, Ordering::SeqCst);
    tick_both(&mut s1, &mut s2, 150);
    assert_eq!(s1.phase(), GamePhase::EnemyTurn);
    assert_eq!(s1.board().peer.attacked().count_ones(), 1);
    assert_eq!(s2.board().local.attacked().count_ones(), 1);
    assert_eq!(s2.phase(), GamePhase::MyTurn);
}

#[test]
fn test_silent_peer_times_out() {
    let (mut s1, mut s2) = pair(3, 4);
    tick_both(&mut s1, &mut s2, 1);
    s1.start_game(Mode::Multiplayer);
    s2.start_game(Mode::Multiplayer);
    tick_both(&mut s1, &mut s2, 10);
    s1.place_remaining(&mut Autopilot::new()).unwrap();
    tick_both(&mut s1, &mut s2, 10);
    s2.place_remaining(&mut Autopilot::new()).unwrap();
    tick_both(&mut s1, &mut s2, 1000);
    assert_eq!(s1.phase(), GamePhase::EnemyTurn);

    // s2 never fires.
    for _ in 0..120_000 {
        s1.tick(ControlState::IDLE);
    }
    assert_eq!(s1.phase(), GamePhase::MainMenu);
}
