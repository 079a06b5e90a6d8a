//! Fixed timestep simulation tick
//!
//! One call advances the whole state by a single batch in a fixed step order:
//! stars, obstacle advance, obstacle spawn, firing, bullet advance, player
//! collision, bullet/obstacle collision, cleanup. The presentation side only
//! ever observes the state between batches.

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, GamePhase, GameState, Obstacle, ObstacleKind};
use crate::consts::*;
use crate::wrap_angle_deg;

/// Advance the game state by one tick. No-op while `GameOver`.
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.ticks += 1;
    state.time_ms += TICK_MS;
    let now = state.time_ms;

    advance_stars(state);
    advance_obstacles(state);
    spawn_obstacle(state);
    fire_bullet(state, now);
    advance_bullets(state);

    // Collision latch happens mid-batch: the remaining steps of this tick
    // still run against the same snapshot of positions, only the *next* tick
    // is gated off.
    if state
        .obstacles
        .iter()
        .any(|ob| ob.rect.intersects(&state.player.hitbox()))
    {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at tick {} (score {})",
            state.ticks,
            state.score
        );
    }

    collide_bullets(state, now);
    cleanup(state);

    // Despawn rules keep these small; anything bigger is a logic bug.
    debug_assert!(state.obstacles.len() < 256);
    debug_assert!(state.bullets.len() < 256);
}

/// Scroll the starfield; stars wrap from the bottom edge back to the top
fn advance_stars(state: &mut GameState) {
    let (width, height) = (state.width, state.height);
    for star in &mut state.stars {
        star.pos.y += star.speed;
        if star.pos.y > height {
            star.pos.y = 0.0;
            star.pos.x = state.rng.random_range(0.0..=width);
        }
    }
}

/// Translate and rotate obstacles; drop the ones past the bottom edge
fn advance_obstacles(state: &mut GameState) {
    let height = state.height;
    for ob in &mut state.obstacles {
        ob.rect.translate_y(ob.fall_speed);
        ob.angle = wrap_angle_deg(ob.angle + ob.rotation_speed);
    }
    // No score for obstacles that escape
    state.obstacles.retain(|ob| ob.rect.top < height);
}

/// Stochastic spawn: ~4% chance per tick of one new obstacle
fn spawn_obstacle(state: &mut GameState) {
    let spawn_max = state.width - SPAWN_MARGIN_RIGHT;
    if spawn_max <= SPAWN_MARGIN_LEFT {
        // Screen too narrow for the safe spawn band
        return;
    }
    if state.rng.random_range(0..=100) >= SPAWN_CHANCE {
        return;
    }

    let x = state.rng.random_range(SPAWN_MARGIN_LEFT..=spawn_max);
    let kind = match state.rng.random_range(0..3) {
        0 => ObstacleKind::Stone,
        1 => ObstacleKind::GrayStone,
        _ => ObstacleKind::RedStone,
    };
    let rotation_speed = ROTATION_SPEEDS[state.rng.random_range(0..ROTATION_SPEEDS.len())];
    let fast = state.rng.random_range(0..=100) < FAST_CHANCE;
    let fall_speed = if fast {
        OBSTACLE_FAST_FALL_SPEED
    } else {
        OBSTACLE_FALL_SPEED
    };

    log::debug!("spawn obstacle x={x:.0} kind={kind:?} fast={fast}");
    state.obstacles.push(Obstacle {
        rect: super::Rect::new(x, 0.0, x + OBSTACLE_SIZE, OBSTACLE_SIZE),
        health: OBSTACLE_HEALTH,
        kind,
        angle: 0.0,
        rotation_speed,
        fall_speed,
        fast,
        last_hit_ms: None,
    });
}

/// Spawn a bullet while firing, subject to the cooldown interval
fn fire_bullet(state: &mut GameState, now: u64) {
    if !state.firing {
        return;
    }
    let ready = match state.last_shot_ms {
        None => true,
        Some(last) => now - last >= FIRE_COOLDOWN_MS,
    };
    if ready {
        state.bullets.push(Bullet {
            pos: Vec2::new(state.player.pos.x, state.player.pos.y - BULLET_MUZZLE_OFFSET),
            used: false,
        });
        state.last_shot_ms = Some(now);
    }
}

/// Move bullets toward the top edge; drop the ones that cross it
fn advance_bullets(state: &mut GameState) {
    for b in &mut state.bullets {
        b.pos.y -= BULLET_STEP;
    }
    state.bullets.retain(|b| b.pos.y > 0.0);
}

/// Pairwise bullet/obstacle hits.
///
/// Outer loop over obstacles, inner over bullets, both in collection order.
/// A bullet is consumed by its first hit; an obstacle may take several hits
/// in one tick. The pair order is the accepted nondeterminism of the design:
/// other implementations may iterate differently.
fn collide_bullets(state: &mut GameState, now: u64) {
    for ob in &mut state.obstacles {
        for b in &mut state.bullets {
            if !b.used && ob.rect.intersects(&b.hitbox()) {
                ob.health -= 1;
                ob.last_hit_ms = Some(now);
                b.used = true;
            }
        }
    }
}

/// Remove destroyed obstacles (scoring one point each) and consumed bullets
fn cleanup(state: &mut GameState) {
    let mut destroyed = 0u32;
    state.obstacles.retain(|ob| {
        if ob.health <= 0 {
            destroyed += 1;
            false
        } else {
            true
        }
    });
    if destroyed > 0 {
        state.score += destroyed;
        log::debug!("destroyed {destroyed} obstacle(s), score {}", state.score);
    }
    state.bullets.retain(|b| !b.used);
}
