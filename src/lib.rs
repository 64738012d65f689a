//! Drift Rocks - an asteroids-style arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `settings`: Typed tuning parameters
//!
//! Rendering and the host event loop live outside this crate: a renderer
//! reads the public fields of [`sim::GameState`] each frame, and the host
//! feeds one [`sim::TickInput`] per display frame into [`sim::tick`].

pub mod settings;
pub mod sim;

pub use settings::SimConfig;
pub use sim::{GamePhase, GameState, TickInput, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Host tick rate the fixed-step constants below are tuned for
    pub const TICK_HZ: u32 = 60;

    /// Ship speed while thrusting (pixels/tick, overwrites velocity)
    pub const SHIP_SPEED: f32 = 3.0;
    /// Velocity decay per tick while not thrusting
    pub const FRICTION: f32 = 0.995;
    /// Turn rate (radians/tick)
    pub const ROTATIONAL_SPEED: f32 = 0.05;

    /// Ship hull in local coordinates: nose x, tail x, half wing span
    pub const SHIP_NOSE: f32 = 30.0;
    pub const SHIP_TAIL: f32 = -10.0;
    pub const SHIP_HALF_WIDTH: f32 = 10.0;
    /// Projectiles emerge this far along the heading (just past the nose)
    pub const MUZZLE_OFFSET: f32 = 31.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 3.5;
    pub const PROJECTILE_RADIUS: f32 = 3.0;

    /// Damage applied per projectile hit
    pub const HIT_DAMAGE: f32 = 10.0;

    /// Asteroid nominal radius range
    pub const ASTEROID_MIN_RADIUS: f32 = 30.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 70.0;

    /// Periodic spawn cadence (2.5 s at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u32 = 150;

    /// Delay between ship impact and the game-over transition (400 ms)
    pub const GAME_OVER_DELAY_TICKS: u32 = 24;

    /// Explosion burst size and particle tuning
    pub const EXPLOSION_PARTICLES: usize = 8;
    pub const HIT_BURST_MAX_RADIUS: f32 = 3.0;
    pub const SHIP_BURST_MAX_RADIUS: f32 = 5.0;
    pub const PARTICLE_FADE: f32 = 0.01;

    /// Shown on the HUD but never consumed by the rules
    pub const STARTING_LIVES: u8 = 3;
}

/// Wrap a position onto the toroidal playfield `[0, w] x [0, h]`
///
/// Holds for arbitrarily large single-tick displacement, not just one
/// playfield-width of overshoot.
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(pos.x.rem_euclid(bounds.x), pos.y.rem_euclid(bounds.y))
}

/// Unit vector for a heading angle in radians
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    Vec2::new(rotation.cos(), rotation.sin())
}
