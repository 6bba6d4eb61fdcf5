//! Capybara Runner - A side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump physics, obstacles, collisions, scoring)
//! - `game`: Frame driver that feeds queued input and due ticks into the simulation
//! - `platform`: Browser bridge (wasm32 only)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use sim::{GamePhase, GameState, Snapshot};
pub use tuning::{ScoringPolicy, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (16 ms, ~60 Hz)
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame we will catch up on (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Ground baseline
    pub const GROUND_Y: f32 = 0.0;

    /// Character box - fixed horizontal position, square sprite
    pub const CHARACTER_X: f32 = 80.0;
    pub const CHARACTER_SIZE: f32 = 44.0;

    /// Jump arc (per tick)
    pub const JUMP_VELOCITY: f32 = 12.0;
    pub const GRAVITY: f32 = 0.8;
    /// Longest jump a tuning may produce (ticks in the air)
    pub const MAX_AIRTIME_TICKS: u32 = 600;

    /// Low ground obstacle (cactus)
    pub const CACTUS_WIDTH: f32 = 20.0;
    pub const CACTUS_HEIGHT: f32 = 46.0;

    /// Elevated obstacle (bird)
    pub const BIRD_WIDTH: f32 = 46.0;
    pub const BIRD_HEIGHT: f32 = 26.0;
    pub const BIRD_ALTITUDE: f32 = 50.0;
    /// Chance that a spawned obstacle is a bird
    pub const BIRD_CHANCE: f64 = 0.3;

    /// World edges
    pub const WORLD_RIGHT_EDGE: f32 = 800.0;
    pub const OFFSCREEN_X: f32 = -50.0;

    /// Scroll speed ramp
    pub const BASE_SPEED: f32 = 6.0;
    pub const SPEED_STEP: f32 = 0.2;
    /// 10 seconds of 16 ms ticks
    pub const SPEED_STEP_TICKS: u64 = 625;
    pub const MAX_SPEED: f32 = 12.0;

    /// Extra spacing drawn on top of the minimum safe gap
    pub const SPAWN_MARGIN_MIN: f32 = 280.0;
    pub const SPAWN_MARGIN_MAX: f32 = 660.0;

    /// Ground texture repeat
    pub const GROUND_PATTERN: f32 = 20.0;

    /// Reward
    pub const REWARD_THRESHOLD: u32 = 100;
    pub const REWARD_CODE: &str = "SPacEKopUbarich";
}

/// Whether a browser key code triggers the primary action
#[inline]
pub fn is_primary_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_keys() {
        assert!(is_primary_key("Space"));
        assert!(is_primary_key("ArrowUp"));
        assert!(!is_primary_key("ArrowDown"));
        assert!(!is_primary_key("KeyW"));
        assert!(!is_primary_key(""));
    }
}
