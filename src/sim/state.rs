//! Game state and core simulation types
//!
//! Everything here is deterministic given the seed: the only randomness is
//! the owned Pcg32, and time is a logical clock advanced by the tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player collided with an obstacle; latched until `reset`
    GameOver,
}

/// A background star with its own parallax fall speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
}

/// Obstacle sprite variants (closed set, cosmetic except for the fast tint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Stone,
    GrayStone,
    RedStone,
}

/// A falling, rotating obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub health: i32,
    pub kind: ObstacleKind,
    /// Current rotation (degrees, wrapped to [0, 360))
    pub angle: f32,
    /// Fixed per-obstacle rotation speed (degrees/tick)
    pub rotation_speed: f32,
    /// Units/tick along the fall axis
    pub fall_speed: f32,
    /// Fast tier flag (higher fall speed, tinted in rendering)
    pub fast: bool,
    /// Logical time of the last bullet hit, drives the hit-flash
    pub last_hit_ms: Option<u64>,
}

/// A player bullet; `used` marks it consumed by a hit this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub used: bool,
}

impl Bullet {
    /// Small rect around the bullet position used for obstacle hits
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.pos.x - BULLET_HALF_WIDTH,
            self.pos.y - BULLET_HEIGHT,
            self.pos.x + BULLET_HALF_WIDTH,
            self.pos.y,
        )
    }
}

/// The player sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Cosmetic tilt in degrees, set while dragging horizontally
    pub tilt: f32,
}

impl Player {
    /// Fixed-size hit-box centered on the player
    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.pos, PLAYER_HALF_EXTENT, PLAYER_HALF_EXTENT)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Owned RNG; all spawn randomness flows through here
    pub rng: Pcg32,
    /// Screen dimensions, fixed for the session
    pub width: f32,
    pub height: f32,
    /// Logical clock, advances TICK_MS per tick
    pub time_ms: u64,
    /// Tick counter
    pub ticks: u64,
    pub phase: GamePhase,
    /// Monotonically increasing: +1 per obstacle destroyed
    pub score: u32,
    /// Set by drag-start, cleared by drag-end/cancel
    pub firing: bool,
    /// Logical time of the last bullet spawn (None = never fired)
    pub last_shot_ms: Option<u64>,
    pub player: Player,
    pub stars: Vec<Star>,
    pub obstacles: Vec<Obstacle>,
    pub bullets: Vec<Bullet>,
}

impl GameState {
    /// Create a new session for the given seed and screen dimensions
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            time_ms: 0,
            ticks: 0,
            phase: GamePhase::Running,
            score: 0,
            firing: false,
            last_shot_ms: None,
            player: Player {
                pos: Vec2::new(width / 2.0, height / 2.0),
                tilt: 0.0,
            },
            stars: Vec::with_capacity(STAR_COUNT),
            obstacles: Vec::new(),
            bullets: Vec::new(),
        };
        state.spawn_starfield();
        state
    }

    /// Regenerate the starfield with fresh random positions and speeds
    fn spawn_starfield(&mut self) {
        self.stars.clear();
        for _ in 0..STAR_COUNT {
            let pos = Vec2::new(
                self.rng.random_range(0.0..=self.width),
                self.rng.random_range(0.0..=self.height),
            );
            let speed = self.rng.random_range(STAR_MIN_SPEED..=STAR_MAX_SPEED) as f32;
            self.stars.push(Star { pos, speed });
        }
    }

    /// Replace the whole mutable state with a fresh session.
    ///
    /// The only way back from `GameOver`. Callable while `Running` too, which
    /// simply discards the session in progress.
    pub fn reset(&mut self) {
        log::info!("session reset (final score {})", self.score);
        self.phase = GamePhase::Running;
        self.score = 0;
        self.firing = false;
        self.last_shot_ms = None;
        self.player = Player {
            pos: Vec2::new(self.width / 2.0, self.height / 2.0),
            tilt: 0.0,
        };
        self.obstacles.clear();
        self.bullets.clear();
        self.spawn_starfield();
    }

    /// Clamp the player to the safe rectangle inset from the screen edges
    pub(crate) fn clamp_player(&mut self) {
        self.player.pos.x = self
            .player
            .pos
            .x
            .clamp(PLAYER_HALF_EXTENT, self.width - PLAYER_HALF_EXTENT);
        self.player.pos.y = self
            .player
            .pos
            .y
            .clamp(PLAYER_HALF_EXTENT, self.height - PLAYER_HALF_EXTENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1080.0;
    const H: f32 = 1920.0;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7, W, H);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.stars.len(), STAR_COUNT);
        assert!(state.obstacles.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.player.pos, Vec2::new(W / 2.0, H / 2.0));
        for star in &state.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x <= W);
            assert!(star.pos.y >= 0.0 && star.pos.y <= H);
            assert!(star.speed >= STAR_MIN_SPEED as f32 && star.speed <= STAR_MAX_SPEED as f32);
        }
    }

    #[test]
    fn test_same_seed_same_state() {
        let a = GameState::new(42, W, H);
        let b = GameState::new(42, W, H);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reset_postconditions() {
        let mut state = GameState::new(3, W, H);
        state.score = 12;
        state.phase = GamePhase::GameOver;
        state.firing = true;
        state.player.pos = Vec2::new(100.0, 100.0);
        state.player.tilt = 15.0;
        state.last_shot_ms = Some(500);
        state.bullets.push(Bullet {
            pos: Vec2::new(10.0, 10.0),
            used: false,
        });
        let old_stars = state.stars.clone();

        state.reset();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(!state.firing);
        assert_eq!(state.last_shot_ms, None);
        assert_eq!(state.player.tilt, 0.0);
        assert_eq!(state.player.pos, Vec2::new(W / 2.0, H / 2.0));
        assert!(state.obstacles.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.stars.len(), STAR_COUNT);
        // Fresh random field, not the previous one
        assert_ne!(state.stars, old_stars);
    }

    #[test]
    fn test_player_hitbox() {
        let player = Player {
            pos: Vec2::new(200.0, 300.0),
            tilt: 0.0,
        };
        let hb = player.hitbox();
        assert_eq!(hb, Rect::new(140.0, 240.0, 260.0, 360.0));
    }

    #[test]
    fn test_bullet_hitbox() {
        let b = Bullet {
            pos: Vec2::new(50.0, 100.0),
            used: false,
        };
        assert_eq!(b.hitbox(), Rect::new(40.0, 80.0, 60.0, 100.0));
    }

    #[test]
    fn test_state_json_round_trip() {
        let state = GameState::new(99, W, H);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
