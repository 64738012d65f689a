//! Simulation tuning parameters
//!
//! Everything the original game held as scattered literals lives in one
//! typed struct, so hosts can tune a session without recompiling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable parameters for one game session
///
/// `Default` matches the classic constants; construct-and-override for
/// anything else. All speeds are per tick (the host drives a fixed-rate
/// tick, see [`crate::consts::TICK_HZ`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,

    /// Ship speed while thrusting (overwrites velocity, does not accelerate)
    pub ship_speed: f32,
    /// Velocity decay factor per tick while coasting
    pub friction: f32,
    /// Turn rate in radians per tick
    pub rotational_speed: f32,

    /// Projectile speed along the ship heading
    pub projectile_speed: f32,
    /// Damage applied per projectile hit
    pub hit_damage: f32,

    /// Ticks between periodic asteroid spawns
    pub spawn_interval_ticks: u32,
    /// Delays (in ticks) for the staggered spawns that seed a new session,
    /// in addition to one immediate spawn
    pub seed_burst_delays: Vec<u32>,
    /// Asteroid nominal radius range `[min, max)`
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,

    /// Ticks between a ship impact and the game-over transition
    pub game_over_delay_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            ship_speed: SHIP_SPEED,
            friction: FRICTION,
            rotational_speed: ROTATIONAL_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            hit_damage: HIT_DAMAGE,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            seed_burst_delays: vec![30, 60],
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            game_over_delay_ticks: GAME_OVER_DELAY_TICKS,
        }
    }
}

impl SimConfig {
    /// Playfield bounds as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Playfield center (ship start position, spawner aim point)
    pub fn center(&self) -> Vec2 {
        self.bounds() / 2.0
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_constants() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.ship_speed, 3.0);
        assert_eq!(cfg.projectile_speed, 3.5);
        assert_eq!(cfg.friction, 0.995);
        assert_eq!(cfg.hit_damage, 10.0);
        assert_eq!(cfg.spawn_interval_ticks, 150);
    }

    #[test]
    fn json_round_trip() {
        let cfg = SimConfig {
            width: 800.0,
            height: 600.0,
            ..SimConfig::default()
        };
        let json = serde_json::to_string(&cfg).expect("serialize");
        let back = SimConfig::from_json(&json).expect("parse");
        assert_eq!(back.width, 800.0);
        assert_eq!(back.height, 600.0);
        assert_eq!(back.seed_burst_delays, cfg.seed_burst_delays);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(SimConfig::from_json("{not json").is_err());
    }
}
