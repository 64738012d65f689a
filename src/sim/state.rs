//! Game state and core simulation types
//!
//! The whole session is one explicit [`GameState`] value: entities,
//! score, phase, timers, and the seeded RNG. There are no ambient
//! globals; the tick driver mutates exactly what it is handed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use super::timer::{IntervalTimer, OneShot};
use crate::consts::*;
use crate::settings::SimConfig;
use crate::{heading, wrap_position};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen; the renderer shows a pause overlay
    Paused,
    /// Run ended; entities keep drifting behind the game-over screen
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians, unbounded (trig handles wraparound)
    pub rotation: f32,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Hull triangle in world space: nose plus two wing tips
    pub fn hull(&self) -> [Vec2; 3] {
        let rot = Vec2::from_angle(self.rotation);
        [
            self.pos + rot.rotate(Vec2::new(SHIP_NOSE, 0.0)),
            self.pos + rot.rotate(Vec2::new(SHIP_TAIL, SHIP_HALF_WIDTH)),
            self.pos + rot.rotate(Vec2::new(SHIP_TAIL, -SHIP_HALF_WIDTH)),
        ]
    }

    /// Where projectiles emerge, just past the nose
    pub fn muzzle(&self) -> Vec2 {
        self.pos + heading(self.rotation) * MUZZLE_OFFSET
    }

    /// Advance one tick and wrap onto the toroidal playfield
    pub fn integrate(&mut self, bounds: Vec2) {
        self.pos = wrap_position(self.pos + self.vel, bounds);
    }
}

/// A fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: PROJECTILE_RADIUS,
        }
    }
}

/// An asteroid with accumulated damage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Nominal size, fixed at spawn
    pub radius: f32,
    /// Monotonically non-decreasing; destruction at `damage >= radius`
    pub damage: f32,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            damage: 0.0,
        }
    }

    /// Effective hitbox radius after damage (ship collisions use this)
    pub fn remaining_radius(&self) -> f32 {
        self.radius - self.damage
    }

    /// Radius the renderer should draw, floored so a nearly destroyed
    /// asteroid stays visible
    pub fn visible_radius(&self) -> f32 {
        let remaining = self.remaining_radius();
        if remaining < 2.0 * HIT_DAMAGE {
            HIT_DAMAGE
        } else {
            remaining
        }
    }

    pub fn apply_hit(&mut self, damage: f32) {
        self.damage += damage;
    }

    pub fn is_destroyed(&self) -> bool {
        self.damage >= self.radius
    }

    /// Points awarded on destruction, from the nominal size
    pub fn score_value(&self) -> u32 {
        (self.radius / 10.0).floor() as u32
    }
}

/// Explosion debris; cosmetic only, never collides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Opacity in [0, 1]; the particle dies at zero
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            alpha: 1.0,
        }
    }

    /// Drift, slow down, and fade one tick
    pub fn age(&mut self) {
        self.vel *= FRICTION;
        self.pos += self.vel;
        self.alpha -= PARTICLE_FADE;
    }
}

/// Complete session state (deterministic, serializable)
///
/// Public fields double as the renderer's read-only frame snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Tuning parameters this session was built with
    pub config: SimConfig,
    /// Current phase
    pub phase: GamePhase,
    /// Accumulated score
    pub score: u32,
    /// Displayed on the HUD; never decremented by the rules
    pub lives: u8,
    /// Tick counter
    pub time_ticks: u64,
    /// The player's ship
    pub ship: Ship,
    /// Live asteroids (membership matters, order does not)
    pub asteroids: Vec<Asteroid>,
    /// Live projectiles
    pub projectiles: Vec<Projectile>,
    /// Explosion debris (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// True when the current pause came from focus loss, so regaining
    /// focus may unpause without clobbering a manual pause
    pub paused_by_focus: bool,
    /// Periodic asteroid spawn cadence
    pub spawn_timer: IntervalTimer,
    /// Pending one-shot timers (seed spawns, deferred game over)
    pub one_shots: Vec<OneShot>,
    /// Seeded RNG; all randomness flows through here
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed and tuning
    pub fn new(seed: u64, config: SimConfig) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            time_ticks: 0,
            ship: Ship::new(config.center()),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            paused_by_focus: false,
            spawn_timer: IntervalTimer::new(config.spawn_interval_ticks),
            one_shots: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        spawn::seed_initial_asteroids(&mut state);
        log::info!("new session started (seed {seed})");
        state
    }

    /// Playfield bounds
    pub fn bounds(&self) -> Vec2 {
        self.config.bounds()
    }

    /// Playfield center
    pub fn center(&self) -> Vec2 {
        self.config.center()
    }

    /// Begin a fresh run after game over
    ///
    /// Cancels every pending one-shot first: the original game let its
    /// deferred game-over timer fire into the new session.
    pub fn restart(&mut self) {
        for os in &mut self.one_shots {
            os.cancel();
        }
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.paused_by_focus = false;
        self.asteroids.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.ship = Ship::new(self.center());
        self.spawn_timer.reset();
        spawn::seed_initial_asteroids(self);
        log::info!("session restarted (seed {})", self.seed);
    }
}
