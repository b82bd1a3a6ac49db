//! Fixit Breakit entry point
//!
//! Headless runner: plays the selected level on autopilot for a fixed number
//! of ticks and logs how the session went. Rendering and real input belong to
//! the host and are not part of this binary.

use fixit_breakit::Settings;
use fixit_breakit::sim::{GamePhase, GameState, TickInput, tick};

const DEFAULT_TICKS: u64 = 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path).unwrap_or_else(|err| {
            log::warn!("{err} ({path}), using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };
    let ticks = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    log::info!("Fixit Breakit (headless) starting, {ticks} ticks");

    let mut state = GameState::new(&settings);
    let start = TickInput {
        start: true,
        autopilot: true,
        ..Default::default()
    };
    let play = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut rounds = 0u32;
    for _ in 0..ticks {
        let input = if state.phase == GamePhase::Title {
            rounds += 1;
            &start
        } else {
            &play
        };
        let report = tick(&mut state, input);
        if !report.bricks.is_empty() {
            log::debug!("Tick {}: {:?}", state.time_ticks, report.bricks);
        }
    }

    log::info!(
        "Finished after {} rounds: phase {:?}, {}/{} bricks active, ball at {:?}",
        rounds,
        state.phase,
        state.active_bricks(),
        state.bricks.len(),
        state.ball.center
    );
    if state.anomalies > 0 {
        log::warn!("{} brick hits could not be resolved", state.anomalies);
    }
}
