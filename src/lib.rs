//! Rocket Rush - a single-screen arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, per-tick update, collisions)
//! - `input`: Drag-gesture adapter feeding the simulation
//!
//! Rendering, assets and platform bootstrapping are external collaborators:
//! they feed drag events in and read a [`sim::Snapshot`] out once per tick.

pub mod input;
pub mod sim;

pub use input::{DragEvent, InputQueue};
pub use sim::{GamePhase, GameState, Snapshot};

/// Game tuning constants
pub mod consts {
    /// Logical duration of one simulation tick (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Starfield size, regenerated wholesale on reset
    pub const STAR_COUNT: usize = 50;
    /// Per-star parallax fall speed range (units/tick, inclusive)
    pub const STAR_MIN_SPEED: u32 = 1;
    pub const STAR_MAX_SPEED: u32 = 6;

    /// Player hit-box half extent; also the clamp inset from screen edges
    pub const PLAYER_HALF_EXTENT: f32 = 60.0;
    /// Cosmetic tilt while dragging horizontally (degrees)
    pub const TILT_ANGLE: f32 = 15.0;

    /// Obstacles are fixed-size squares
    pub const OBSTACLE_SIZE: f32 = 170.0;
    /// Starting health of every obstacle
    pub const OBSTACLE_HEALTH: i32 = 2;
    /// Fall speed (units/tick) for the normal and fast tiers
    pub const OBSTACLE_FALL_SPEED: f32 = 8.0;
    pub const OBSTACLE_FAST_FALL_SPEED: f32 = 16.0;
    /// Rotation speed palette (degrees/tick), picked once per obstacle
    pub const ROTATION_SPEEDS: [f32; 4] = [-4.0, -2.0, 2.0, 4.0];
    /// Per-tick spawn chance and fast-tier sub-chance, out of 0..=100
    pub const SPAWN_CHANCE: u32 = 4;
    pub const FAST_CHANCE: u32 = 20;
    /// Horizontal spawn margins (left edge of spawn range, right inset)
    pub const SPAWN_MARGIN_LEFT: f32 = 100.0;
    pub const SPAWN_MARGIN_RIGHT: f32 = 200.0;

    /// Minimum interval between consecutive shots
    pub const FIRE_COOLDOWN_MS: u64 = 150;
    /// Bullet travel per tick, toward the top edge
    pub const BULLET_STEP: f32 = 15.0;
    /// Bullets spawn this far above the player center
    pub const BULLET_MUZZLE_OFFSET: f32 = 60.0;
    /// Bullet hit-box: (x - half_width, y - height) .. (x + half_width, y)
    pub const BULLET_HALF_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 20.0;

    /// How long an obstacle stays tinted after taking a hit
    pub const HIT_FLASH_MS: u64 = 20;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_angle_deg(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle_deg() {
        assert_eq!(wrap_angle_deg(0.0), 0.0);
        assert_eq!(wrap_angle_deg(360.0), 0.0);
        assert_eq!(wrap_angle_deg(364.0), 4.0);
        assert_eq!(wrap_angle_deg(-4.0), 356.0);
    }
}
