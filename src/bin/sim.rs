use armada::{
    transport::in_memory::MemorySerial, Autopilot, ControlState, GamePhase, Lfsr16, Mode,
    NullFrontend, Session, WireTransport,
};
use serde_json::json;

/// Upper bound on simulated ticks before giving up.
const MAX_TICKS: u32 = 5_000_000;

/// Delay between a session landing on the main menu and joining a new game.
const REJOIN_DELAY: u32 = 37;

type SimSession = Session<WireTransport<MemorySerial>, NullFrontend, Lfsr16>;

fn status(session: &SimSession) -> &'static str {
    match session.phase() {
        GamePhase::Over if session.board().local.remaining() == 0 => "Lost",
        GamePhase::Over => "Won",
        _ => "InProgress",
    }
}

fn main() -> anyhow::Result<()> {
    armada::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u16 = args[1].parse()?;
    let seed2: u16 = args[2].parse()?;

    let (wire1, wire2) = MemorySerial::pair();
    let mut sessions = [
        Session::new(WireTransport::new(wire1), NullFrontend, Lfsr16::new(seed1)),
        Session::new(WireTransport::new(wire2), NullFrontend, Lfsr16::new(seed2)),
    ];
    let mut pilots = [Autopilot::new(), Autopilot::new()];
    // Staggered starts keep the two tokens apart.
    let mut start_at = [0u32, REJOIN_DELAY + u32::from(seed2 % 997)];

    let mut ticks = 0;
    while ticks < MAX_TICKS {
        for (i, (session, pilot)) in sessions.iter_mut().zip(pilots.iter_mut()).enumerate() {
            if session.phase() == GamePhase::MainMenu && session.clock() >= start_at[i] {
                session.start_game(Mode::Multiplayer);
            }
            let before = session.phase();
            pilot.drive(session).map_err(|e| anyhow::anyhow!(e))?;
            session.tick(ControlState::IDLE);
            let dropped = !matches!(before, GamePhase::MainMenu | GamePhase::Reset);
            if dropped && session.phase() == GamePhase::MainMenu {
                start_at[i] = session.clock() + REJOIN_DELAY * (i as u32 + 1);
            }
        }
        ticks += 1;
        if sessions.iter().all(|s| s.phase() == GamePhase::Over) {
            break;
        }
    }

    let [p1, p2] = &sessions;
    let winner = match (status(p1), status(p2)) {
        ("Won", "Lost") => Some("player1"),
        ("Lost", "Won") => Some("player2"),
        _ => None,
    };

    let result = json!({
        "player1": {"status": status(p1), "shots": p1.board().peer.attacked().count_ones()},
        "player2": {"status": status(p2), "shots": p2.board().peer.attacked().count_ones()},
        "winner": winner,
        "ticks": ticks,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
