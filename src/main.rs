#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{
    init_logging,
    transport::{serial::UartLink, serial::DEFAULT_BAUD, tcp::TcpLink},
    Autopilot, ConsoleFrontend, ControlState, Difficulty, GamePhase, Lfsr16, LineTransport,
    Mode, Session, Settings, Timing, WireTransport,
};
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::{info, warn};
#[cfg(feature = "std")]
use rand::Rng;
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use tokio::time::{Duration, MissedTickBehavior};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Fix the LFSR seed for reproducible games (e.g., --seed 4242)")]
    seed: Option<u16>,

    #[arg(long, global = true, help = "JSON file overriding tick timings")]
    timing: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable sound cues")]
    mute: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Level {
    Lieutenant,
    Captain,
    Admiral,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Lieutenant => Difficulty::Easy,
            Level::Captain => Difficulty::Medium,
            Level::Admiral => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play over a serial port against another board or host.
    Serial {
        #[arg(long)]
        port: String,
        #[arg(long, default_value_t = DEFAULT_BAUD)]
        baud: u32,
    },
    /// Listen for a peer and play over TCP.
    TcpHost {
        #[arg(long, default_value = "0.0.0.0:7878")]
        bind: String,
    },
    /// Connect to a listening peer and play over TCP.
    TcpJoin {
        #[arg(long, default_value = "127.0.0.1:7878")]
        connect: String,
    },
    /// Play against the built-in AI.
    Solo {
        #[arg(long, value_enum, default_value_t = Level::Lieutenant)]
        level: Level,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let timing = load_timing(cli.timing.as_ref())?;
    let rng = match cli.seed {
        Some(seed) => {
            println!("Using fixed seed: {} (game will be reproducible)", seed);
            Lfsr16::new(seed)
        }
        None => {
            let mut noise = rand::rng();
            Lfsr16::from_noise((0..8).map(|_| noise.random::<u16>()))
        }
    };
    let mut settings = Settings {
        sound: !cli.mute,
        ..Settings::default()
    };

    match cli.command {
        Commands::Serial { port, baud } => {
            println!("Opening {} at {} baud...", port, baud);
            let link = UartLink::open(&port, baud)?;
            play(WireTransport::new(link), Mode::Multiplayer, settings, timing, rng).await
        }
        Commands::TcpHost { bind } => {
            println!("Waiting for a peer on {}...", bind);
            let link = TcpLink::accept(&bind).await?;
            println!("Peer connected");
            play(WireTransport::new(link), Mode::Multiplayer, settings, timing, rng).await
        }
        Commands::TcpJoin { connect } => {
            println!("Connecting to {}...", connect);
            let link = TcpLink::connect(&connect).await?;
            println!("Connected successfully!");
            play(WireTransport::new(link), Mode::Multiplayer, settings, timing, rng).await
        }
        Commands::Solo { level } => {
            settings.difficulty = level.into();
            println!("Playing against the {}", settings.difficulty);
            play(NoWire, Mode::VersusAi, settings, timing, rng).await
        }
    }
}

#[cfg(feature = "std")]
fn load_timing(path: Option<&PathBuf>) -> anyhow::Result<Timing> {
    let Some(path) = path else {
        return Ok(Timing::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let timing: Timing = serde_json::from_str(&text)?;
    info!("timing overrides loaded from {}", path.display());
    Ok(timing)
}

/// Wire stand-in for solo games, where every line comes from the AI.
#[cfg(feature = "std")]
struct NoWire;

#[cfg(feature = "std")]
impl LineTransport for NoWire {
    fn send(&mut self, _msg: &armada::Message) {}

    fn poll_line(&mut self) -> Option<String> {
        None
    }
}

/// Run one game at a 1 ms tick with the autopilot at the controls.
#[cfg(feature = "std")]
async fn play<W: LineTransport>(
    wire: W,
    mode: Mode,
    settings: Settings,
    timing: Timing,
    rng: Lfsr16,
) -> anyhow::Result<()> {
    let mut session = Session::new(wire, ConsoleFrontend::new(), rng)
        .with_settings(settings)
        .with_timing(timing);
    let mut pilot = Autopilot::new();
    session.start_game(mode);

    let mut interval = tokio::time::interval(Duration::from_millis(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                println!("Interrupted");
                return Ok(());
            }
            _ = interval.tick() => {
                pilot.drive(&mut session).map_err(|e| anyhow::anyhow!(e))?;
                session.tick(ControlState::IDLE);

                match session.phase() {
                    GamePhase::Over => {
                        println!("{}", session.frontend().render());
                        return Ok(());
                    }
                    GamePhase::MainMenu => {
                        let status = session.frontend().last_status().to_string();
                        if status.starts_with("Token tie") {
                            warn!("token tie, starting over");
                            session.start_game(mode);
                        } else {
                            return Err(anyhow::anyhow!("Game abandoned: {}", status));
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
