//! Burger Bash headless runner
//!
//! Usage: `burger-bash [config.json|-] [frames] [seed]`
//!
//! Plays the game on autopilot for a fixed number of frames and prints a JSON
//! session summary. `RUST_LOG` controls log output (default `info`).

use std::time::{SystemTime, UNIX_EPOCH};

use burger_bash::GameConfig;
use burger_bash::audio::LogAudio;
use burger_bash::consts::SIM_DT;
use burger_bash::content::SpriteCatalog;
use burger_bash::platform::{Autopilot, InputSource};
use burger_bash::render::{CommandBuffer, draw};
use burger_bash::sim::{SessionPhase, World, tick};

const DEFAULT_FRAMES: u64 = 3600;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Burger Bash (headless) starting...");

    let mut args = std::env::args().skip(1);

    let config = match args.next().filter(|path| path != "-") {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };
    let frames = parse_arg(args.next(), "frame count").unwrap_or(DEFAULT_FRAMES);
    let seed = parse_arg(args.next(), "seed").unwrap_or_else(time_seed);

    let mut world = World::new(config, &SpriteCatalog::default(), seed);
    let mut input = Autopilot::new(frames);
    let mut audio = LogAudio::new();
    let mut buffer = CommandBuffer::new();

    while world.phase != SessionPhase::Exiting {
        let frame_input = input.poll();
        tick(&mut world, &frame_input, SIM_DT, &mut audio);

        buffer.clear();
        draw(&world, &mut buffer);
    }

    log::info!(
        "Played {} frames, {} cues, {} draw calls in the last frame",
        world.stats.frames,
        audio.played(),
        buffer.commands.len()
    );

    match serde_json::to_string_pretty(&world.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize session summary: {}", e),
    }
}

/// Parse an optional numeric argument, warning on garbage
fn parse_arg(arg: Option<String>, what: &str) -> Option<u64> {
    let arg = arg?;
    match arg.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring invalid {} '{}': {}", what, arg, e);
            None
        }
    }
}

/// Seed from the wall clock
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
