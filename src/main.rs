//! Drift Rocks entry point - headless demo run
//!
//! Drives the simulation with a few seconds of scripted input and prints
//! a session summary. A real host wires keyboard events and a
//! display-rate timer into `TickInput` and draws from `GameState`.

use drift_rocks::SimConfig;
use drift_rocks::consts::TICK_HZ;
use drift_rocks::sim::{GameState, InputState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xD81F7);
    let mut state = GameState::new(seed, SimConfig::default());
    log::info!("demo run starting (seed {seed})");

    // Fly a widening arc, firing twice a second
    let mut input = TickInput {
        held: InputState {
            thrust: true,
            turn_right: true,
            ..Default::default()
        },
        ..Default::default()
    };

    for t in 0..(10 * u64::from(TICK_HZ)) {
        input.fire = t % 30 == 0;
        tick(&mut state, &input);
    }

    println!(
        "after {} ticks: score {}, {} asteroids, {} projectiles, phase {:?}",
        state.time_ticks,
        state.score,
        state.asteroids.len(),
        state.projectiles.len(),
        state.phase
    );
}
