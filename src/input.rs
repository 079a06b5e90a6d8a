//! Input adapter: drag gestures to simulation mutations
//!
//! Raw pointer events may arrive at any rate between ticks. They are queued
//! here and applied in one batch at the tick boundary, so the simulation and
//! the render snapshot always see a consistent player state.

use glam::Vec2;

use crate::consts::TILT_ANGLE;
use crate::sim::{GamePhase, GameState};

/// A single raw drag event from the pointer surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Finger down: start firing
    Start,
    /// Finger moved by (dx, dy)
    Move { dx: f32, dy: f32 },
    /// Finger up: stop firing, level out
    End,
    /// Gesture interrupted: same as End
    Cancel,
}

/// Buffers drag events between ticks
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<DragEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw event; applied at the next tick boundary
    pub fn push(&mut self, event: DragEvent) {
        self.events.push(event);
    }

    /// Apply all pending events to the state, in arrival order.
    ///
    /// Call once per tick, before `tick()`. Events are discarded unprocessed
    /// while the session is over.
    pub fn drain(&mut self, state: &mut GameState) {
        for event in self.events.drain(..) {
            apply(state, event);
        }
    }
}

/// Apply one drag event. No-op while `GameOver`.
fn apply(state: &mut GameState, event: DragEvent) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    match event {
        DragEvent::Start => {
            state.firing = true;
        }
        DragEvent::Move { dx, dy } => {
            // Malformed deltas are dropped rather than propagated
            if !dx.is_finite() || !dy.is_finite() {
                log::warn!("ignoring non-finite drag delta ({dx}, {dy})");
                return;
            }
            state.player.pos += Vec2::new(dx, dy);
            state.clamp_player();
            state.player.tilt = if dx > 0.0 {
                TILT_ANGLE
            } else if dx < 0.0 {
                -TILT_ANGLE
            } else {
                0.0
            };
        }
        DragEvent::End | DragEvent::Cancel => {
            state.firing = false;
            state.player.tilt = 0.0;
        }
    }
}
