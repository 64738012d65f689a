//! Asteroid spawning
//!
//! Asteroids enter from a random playfield edge, offset outward by their
//! own radius, with a unit velocity aimed at the playfield center. A
//! periodic interval drives steady pressure; each new session also gets
//! a small staggered burst to seed initial difficulty.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, GameState};
use super::timer::{OneShot, TimerEvent};

/// Spawn one asteroid at a playfield edge, aimed roughly at the center
pub fn spawn_edge_asteroid(state: &mut GameState) {
    let bounds = state.bounds();
    let center = state.center();
    let min_r = state.config.asteroid_min_radius;
    let max_r = state.config.asteroid_max_radius;

    let radius = state.rng.random_range(min_r..max_r);
    // Coin flip for a vertical vs horizontal edge, then which side
    let pos = if state.rng.random_bool(0.5) {
        let x = if state.rng.random_bool(0.5) {
            -radius
        } else {
            bounds.x + radius
        };
        Vec2::new(x, state.rng.random_range(0.0..bounds.y))
    } else {
        let y = if state.rng.random_bool(0.5) {
            -radius
        } else {
            bounds.y + radius
        };
        Vec2::new(state.rng.random_range(0.0..bounds.x), y)
    };

    // Unit speed toward the center
    let angle = (center.y - pos.y).atan2(center.x - pos.x);
    let vel = Vec2::from_angle(angle);

    log::debug!(
        "asteroid spawned at ({:.0}, {:.0}), radius {:.0}",
        pos.x,
        pos.y,
        radius
    );
    state.asteroids.push(Asteroid::new(pos, vel, radius));
}

/// Seed a fresh session: one asteroid now, the rest staggered
pub fn seed_initial_asteroids(state: &mut GameState) {
    spawn_edge_asteroid(state);
    for &delay in &state.config.seed_burst_delays {
        state
            .one_shots
            .push(OneShot::new(delay, TimerEvent::SpawnAsteroid));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;

    fn fresh_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, SimConfig::default());
        state.asteroids.clear();
        state.one_shots.clear();
        state
    }

    #[test]
    fn spawns_on_an_edge_aimed_inward() {
        for seed in 0..20 {
            let mut state = fresh_state(seed);
            spawn_edge_asteroid(&mut state);
            let a = &state.asteroids[0];
            let bounds = state.bounds();

            let off_x = a.pos.x == -a.radius || a.pos.x == bounds.x + a.radius;
            let off_y = a.pos.y == -a.radius || a.pos.y == bounds.y + a.radius;
            assert!(off_x || off_y, "asteroid not on an edge: {:?}", a.pos);

            assert!(a.radius >= 30.0 && a.radius < 70.0);
            assert!((a.vel.length() - 1.0).abs() < 1e-4);

            // Velocity points toward the center
            let to_center = (state.center() - a.pos).normalize();
            assert!(a.vel.dot(to_center) > 0.99);
        }
    }

    #[test]
    fn seed_burst_spawns_one_and_schedules_rest() {
        let mut state = fresh_state(1);
        seed_initial_asteroids(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.one_shots.len(), 2);
        assert!(
            state
                .one_shots
                .iter()
                .all(|os| os.event() == TimerEvent::SpawnAsteroid)
        );
    }
}
