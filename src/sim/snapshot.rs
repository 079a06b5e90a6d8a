//! Read-only render snapshot
//!
//! The presentation adapter consumes one [`Snapshot`] per tick and never
//! touches the live state, so a half-applied batch can never be observed.
//! Transient flags (hit-flash) are derived here from the logical clock.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GamePhase, GameState, ObstacleKind};
use crate::consts::HIT_FLASH_MS;

/// Obstacle as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub kind: ObstacleKind,
    /// Rotation in degrees
    pub angle: f32,
    /// True within the flash window after a bullet hit (red tint)
    pub hit_flash: bool,
    /// Fast tier (tinted differently)
    pub fast: bool,
}

/// Player as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub tilt: f32,
    /// False once the session has ended
    pub alive: bool,
}

/// Everything the presentation adapter reads, captured once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stars: Vec<Vec2>,
    pub obstacles: Vec<ObstacleView>,
    pub bullets: Vec<Vec2>,
    pub player: PlayerView,
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    /// Capture the current frame for rendering
    pub fn snapshot(&self) -> Snapshot {
        let now = self.time_ms;
        Snapshot {
            stars: self.stars.iter().map(|s| s.pos).collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|ob| ObstacleView {
                    rect: ob.rect,
                    kind: ob.kind,
                    angle: ob.angle,
                    hit_flash: ob
                        .last_hit_ms
                        .is_some_and(|hit| now - hit < HIT_FLASH_MS),
                    fast: ob.fast,
                })
                .collect(),
            bullets: self.bullets.iter().map(|b| b.pos).collect(),
            player: PlayerView {
                pos: self.player.pos,
                tilt: self.player.tilt,
                alive: self.phase == GamePhase::Running,
            },
            score: self.score,
            game_over: self.phase == GamePhase::GameOver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Obstacle;

    fn test_obstacle(last_hit_ms: Option<u64>) -> Obstacle {
        Obstacle {
            rect: Rect::new(100.0, 0.0, 270.0, 170.0),
            health: OBSTACLE_HEALTH,
            kind: ObstacleKind::RedStone,
            angle: 42.0,
            rotation_speed: -2.0,
            fall_speed: OBSTACLE_FAST_FALL_SPEED,
            fast: true,
            last_hit_ms,
        }
    }

    #[test]
    fn test_hit_flash_window() {
        let mut state = GameState::new(5, 1080.0, 1920.0);
        state.time_ms = 1000;
        state.obstacles.push(test_obstacle(Some(1000)));
        state.obstacles.push(test_obstacle(Some(1000 - HIT_FLASH_MS)));
        state.obstacles.push(test_obstacle(None));

        let snap = state.snapshot();
        assert!(snap.obstacles[0].hit_flash);
        assert!(!snap.obstacles[1].hit_flash);
        assert!(!snap.obstacles[2].hit_flash);
        assert!(snap.obstacles[0].fast);
        assert_eq!(snap.obstacles[0].angle, 42.0);
    }

    #[test]
    fn test_snapshot_mirrors_scalars() {
        let mut state = GameState::new(5, 1080.0, 1920.0);
        state.score = 9;
        let snap = state.snapshot();
        assert_eq!(snap.score, 9);
        assert!(!snap.game_over);
        assert!(snap.player.alive);
        assert_eq!(snap.stars.len(), STAR_COUNT);

        state.phase = GamePhase::GameOver;
        let snap = state.snapshot();
        assert!(snap.game_over);
        assert!(!snap.player.alive);
    }
}
