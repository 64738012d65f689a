//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-rate tick only (one call per display frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The renderer reads [`GameState`]'s public fields as its per-frame
//! snapshot; it never mutates them.

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{circle_circle, circle_triangle, closest_point_on_segment};
pub use spawn::spawn_edge_asteroid;
pub use state::{Asteroid, GamePhase, GameState, Particle, Projectile, Ship};
pub use tick::{InputState, TickInput, tick};
pub use timer::{IntervalTimer, OneShot, TimerEvent};
