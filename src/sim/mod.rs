//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod physics;
pub mod progression;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use clock::Clock;
pub use collision::{Aabb, character_box, first_hit, obstacle_box};
pub use snapshot::{ObstacleView, Snapshot};
pub use spawn::Spawner;
pub use state::{Character, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind};
pub use tick::{AUTOPILOT_LEAD_TICKS, TickInput, autopilot_wants_jump, tick};
