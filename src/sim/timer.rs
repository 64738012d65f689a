//! Tick-counted timers
//!
//! The original game leaned on host wall-clock timers (a spawn interval
//! and a one-shot game-over delay). Here every delay is counted in host
//! ticks so the whole simulation stays deterministic and testable.
//!
//! Timers advance even while the game is paused; whether a fired event
//! has any effect is decided by the tick driver, which observes the
//! current phase.

use serde::{Deserialize, Serialize};

/// What a fired timer means to the tick driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Spawn one asteroid at a playfield edge
    SpawnAsteroid,
    /// Transition the session to game over
    GameOver,
}

/// A one-shot timer with explicit cancellation
///
/// Restart cancels any pending `GameOver` one-shot so a stale transition
/// can never fire into a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneShot {
    remaining: u32,
    event: TimerEvent,
    cancelled: bool,
}

impl OneShot {
    pub fn new(delay_ticks: u32, event: TimerEvent) -> Self {
        Self {
            // A zero delay still takes one advance to fire
            remaining: delay_ticks.max(1),
            event,
            cancelled: false,
        }
    }

    pub fn event(&self) -> TimerEvent {
        self.event
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Advance all one-shots by one tick
///
/// Returns the events that fired this tick; fired and cancelled timers
/// are removed.
pub fn advance(one_shots: &mut Vec<OneShot>) -> Vec<TimerEvent> {
    let mut fired = Vec::new();
    for os in one_shots.iter_mut() {
        if os.cancelled {
            continue;
        }
        os.remaining -= 1;
        if os.remaining == 0 {
            fired.push(os.event);
        }
    }
    one_shots.retain(|os| !os.cancelled && os.remaining > 0);
    fired
}

/// A repeating timer with a fixed period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalTimer {
    period: u32,
    remaining: u32,
}

impl IntervalTimer {
    pub fn new(period: u32) -> Self {
        let period = period.max(1);
        Self {
            period,
            remaining: period,
        }
    }

    /// Advance one tick; returns true each time a full period elapses
    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.period;
            true
        } else {
            false
        }
    }

    /// Restart the current period from scratch
    pub fn reset(&mut self) {
        self.remaining = self.period;
    }
}
