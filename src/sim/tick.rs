//! Per-frame simulation tick
//!
//! One call per display frame, fixed rate. Frame order: session input →
//! timers → ship controls and integration → particle/projectile aging →
//! asteroid pass (ship impact, pruning, projectile hits, scoring) →
//! deferred game-over transition.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{circle_circle, circle_triangle};
use super::spawn::spawn_edge_asteroid;
use super::state::{GamePhase, GameState, Particle, Projectile};
use super::timer::{self, OneShot, TimerEvent};
use crate::consts::*;
use crate::heading;

/// Held key state: mirrors the keyboard, read-only to the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub thrust: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// One frame's worth of input
///
/// `held` flags persist while keys are down; everything else is
/// edge-triggered and must be cleared by the host after each tick
/// (one projectile per key-down, not per frame held).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub held: InputState,
    /// Fire one projectile
    pub fire: bool,
    /// Toggle manual pause
    pub toggle_pause: bool,
    /// Start a new run (only honored during game over)
    pub restart: bool,
    /// Host window lost focus
    pub focus_lost: bool,
    /// Host window regained focus
    pub focus_gained: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    apply_session_input(state, input);

    // Timers run on the host clock: they advance even while paused,
    // but what a fired event does depends on the phase below.
    let interval_spawn = state.spawn_timer.tick();
    let mut deferred_spawns = 0usize;
    let mut game_over_due = false;
    for event in timer::advance(&mut state.one_shots) {
        match event {
            TimerEvent::SpawnAsteroid => deferred_spawns += 1,
            TimerEvent::GameOver => game_over_due = true,
        }
    }

    if state.phase == GamePhase::Paused {
        // Frozen world: no motion, no spawns. The deferred game-over
        // still lands, matching the original wall-clock timer.
        if game_over_due {
            state.phase = GamePhase::GameOver;
            log::info!("game over (score {})", state.score);
        }
        state.time_ticks += 1;
        return;
    }

    if interval_spawn {
        spawn_edge_asteroid(state);
    }
    for _ in 0..deferred_spawns {
        spawn_edge_asteroid(state);
    }

    if state.phase == GamePhase::Playing {
        apply_controls(state, &input.held);
        if input.fire {
            fire_projectile(state);
        }
        let bounds = state.bounds();
        state.ship.integrate(bounds);
    }

    update_particles(state);
    update_projectiles(state);
    resolve_asteroids(state);

    if game_over_due && state.phase == GamePhase::Playing {
        state.phase = GamePhase::GameOver;
        log::info!("game over (score {})", state.score);
    }

    state.time_ticks += 1;
}

/// Phase transitions from input and window lifecycle
fn apply_session_input(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Playing => {
            if input.toggle_pause {
                state.phase = GamePhase::Paused;
                state.paused_by_focus = false;
            } else if input.focus_lost {
                state.phase = GamePhase::Paused;
                state.paused_by_focus = true;
            }
        }
        GamePhase::Paused => {
            // Regaining focus only clears a focus-induced pause; a manual
            // pause stays until toggled.
            if input.toggle_pause || (input.focus_gained && state.paused_by_focus) {
                state.phase = GamePhase::Playing;
                state.paused_by_focus = false;
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
            }
        }
    }
}

/// Thrust, friction, and turning
///
/// Thrust overwrites velocity along the current heading rather than
/// accelerating, and uses the pre-turn rotation.
fn apply_controls(state: &mut GameState, held: &InputState) {
    let dir = heading(state.ship.rotation);
    if held.thrust {
        state.ship.vel = dir * state.config.ship_speed;
    } else {
        state.ship.vel *= state.config.friction;
    }
    if held.turn_right {
        state.ship.rotation += state.config.rotational_speed;
    } else if held.turn_left {
        state.ship.rotation -= state.config.rotational_speed;
    }
}

fn fire_projectile(state: &mut GameState) {
    let vel = heading(state.ship.rotation) * state.config.projectile_speed;
    state.projectiles.push(Projectile::new(state.ship.muzzle(), vel));
}

fn update_particles(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.age();
    }
    state.particles.retain(|p| p.alpha > 0.0);
}

fn update_projectiles(state: &mut GameState) {
    let bounds = state.bounds();
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel;
    }
    state
        .projectiles
        .retain(|p| !fully_offscreen(p.pos, p.radius, bounds));
}

/// Integrate asteroids and resolve all collision consequences
fn resolve_asteroids(state: &mut GameState) {
    let bounds = state.bounds();
    let hull = state.ship.hull();
    let ship_pos = state.ship.pos;
    let ship_alive = state.phase == GamePhase::Playing;
    let hit_damage = state.config.hit_damage;
    let game_over_delay = state.config.game_over_delay_ticks;

    let mut i = state.asteroids.len();
    while i > 0 {
        i -= 1;

        let vel = state.asteroids[i].vel;
        state.asteroids[i].pos += vel;

        let (pos, nominal, remaining) = {
            let a = &state.asteroids[i];
            (a.pos, a.radius, a.remaining_radius())
        };

        // Ship impact checks the shrunken hitbox, not the nominal size
        if ship_alive
            && !game_over_pending(&state.one_shots)
            && circle_triangle(pos, remaining, &hull)
        {
            explosion_burst(
                &mut state.rng,
                &mut state.particles,
                ship_pos,
                SHIP_BURST_MAX_RADIUS,
            );
            state
                .one_shots
                .push(OneShot::new(game_over_delay, TimerEvent::GameOver));
            log::info!("ship destroyed, ending session");
        }

        if fully_offscreen(pos, nominal, bounds) {
            state.asteroids.remove(i);
            continue;
        }

        // At most one projectile is consumed per asteroid per tick;
        // other overlapping projectiles wait for later ticks.
        let mut j = state.projectiles.len();
        while j > 0 {
            j -= 1;
            let p = &state.projectiles[j];
            if circle_circle(p.pos, p.radius, pos, nominal) {
                let impact = state.projectiles.remove(j).pos;
                explosion_burst(
                    &mut state.rng,
                    &mut state.particles,
                    impact,
                    HIT_BURST_MAX_RADIUS,
                );
                state.asteroids[i].apply_hit(hit_damage);
                if state.asteroids[i].is_destroyed() {
                    let points = state.asteroids[i].score_value();
                    state.score += points;
                    log::debug!("asteroid destroyed, +{points} points");
                    state.asteroids.remove(i);
                }
                break;
            }
        }
    }
}

fn game_over_pending(one_shots: &[OneShot]) -> bool {
    one_shots
        .iter()
        .any(|os| os.event() == TimerEvent::GameOver && !os.is_cancelled())
}

/// Fully outside the expanded bounds `position ± radius`
fn fully_offscreen(pos: Vec2, radius: f32, bounds: Vec2) -> bool {
    pos.x + radius < 0.0
        || pos.x - radius > bounds.x
        || pos.y + radius < 0.0
        || pos.y - radius > bounds.y
}

/// Scatter debris at an impact point
fn explosion_burst(rng: &mut Pcg32, particles: &mut Vec<Particle>, at: Vec2, max_radius: f32) {
    for _ in 0..EXPLOSION_PARTICLES {
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * rng.random::<f32>() * 8.0,
            (rng.random::<f32>() - 0.5) * rng.random::<f32>() * 6.0,
        );
        particles.push(Particle::new(at, vel, rng.random_range(0.0..max_radius)));
    }
}
