//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The one accepted nondeterminism across *implementations* is the iteration
//! order of the bullet/obstacle collision pass (see `tick`); within this
//! implementation it is fixed by collection order.

pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use snapshot::{ObstacleView, PlayerView, Snapshot};
pub use state::{Bullet, GamePhase, GameState, Obstacle, ObstacleKind, Player, Star};
pub use tick::tick;
