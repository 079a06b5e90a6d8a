//! Rocket Rush entry point
//!
//! There is no native renderer; the binary runs a short headless session with
//! scripted drag input as a smoke run, logging the outcome. A real host wires
//! the same three calls per frame: `InputQueue::drain`, `sim::tick`,
//! `GameState::snapshot`.

use std::time::{SystemTime, UNIX_EPOCH};

use rocket_rush::sim::{GameState, tick};
use rocket_rush::{DragEvent, InputQueue};

const SCREEN_WIDTH: f32 = 1080.0;
const SCREEN_HEIGHT: f32 = 1920.0;
const DEMO_TICKS: u64 = 1800; // ~30 seconds of game time

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Rocket Rush starting (seed {seed})");

    let mut state = GameState::new(seed, SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut input = InputQueue::new();

    // Scripted session: hold a drag and strafe left/right across the screen
    input.push(DragEvent::Start);
    for t in 0..DEMO_TICKS {
        let dx = if (t / 120) % 2 == 0 { 6.0 } else { -6.0 };
        input.push(DragEvent::Move { dx, dy: 0.0 });

        input.drain(&mut state);
        tick(&mut state);

        let snap = state.snapshot();
        if snap.game_over {
            log::info!("crashed at tick {} with score {}", state.ticks, snap.score);
            break;
        }
    }
    input.push(DragEvent::End);
    input.drain(&mut state);

    let snap = state.snapshot();
    log::info!(
        "demo finished: score {}, {} obstacles and {} bullets on screen, game_over={}",
        snap.score,
        snap.obstacles.len(),
        snap.bullets.len(),
        snap.game_over
    );
}
