//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults reproduce the
//! classic runner. A session only accepts a tuning that passes
//! [`Tuning::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::physics::arc_step;

/// How the score grows while running
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// One point for every obstacle that crosses the character line
    #[default]
    Crossing,
    /// Fixed fractional amount every tick
    Distance { per_tick: f32 },
}

/// Reasons a tuning is rejected
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("`{field}` must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("max_speed {max} is below base_speed {base}")]
    SpeedCapBelowBase { base: f32, max: f32 },
    #[error("bird_chance {0} is outside [0, 1]")]
    ChanceOutOfRange(f64),
    #[error("spawn margin range {min}..{max} is empty")]
    EmptyMarginRange { min: f32, max: f32 },
    #[error("off-screen threshold {offscreen} must lie left of the character at {character}")]
    OffscreenRightOfCharacter { offscreen: f32, character: f32 },
    #[error("jump (velocity {velocity}, gravity {gravity}) does not land within {limit} ticks")]
    JumpNeverLands {
        velocity: f32,
        gravity: f32,
        limit: u32,
    },
}

/// Tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Character ===
    pub character_x: f32,
    pub character_size: f32,

    // === Jump arc (per tick) ===
    pub jump_velocity: f32,
    pub gravity: f32,

    // === Obstacles ===
    pub cactus_width: f32,
    pub cactus_height: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_altitude: f32,
    pub bird_chance: f64,

    // === World ===
    pub world_right_edge: f32,
    pub offscreen_x: f32,
    pub ground_pattern: f32,

    // === Spawn spacing ===
    pub spawn_margin_min: f32,
    pub spawn_margin_max: f32,

    // === Progression ===
    pub base_speed: f32,
    pub speed_step: f32,
    pub speed_step_ticks: u64,
    pub max_speed: f32,
    pub scoring: ScoringPolicy,

    // === Reward ===
    pub reward_threshold: u32,

    // === Lifecycle ===
    /// Primary action on the game-over screen starts a new run directly
    pub auto_restart: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            character_x: CHARACTER_X,
            character_size: CHARACTER_SIZE,

            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,

            cactus_width: CACTUS_WIDTH,
            cactus_height: CACTUS_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_altitude: BIRD_ALTITUDE,
            bird_chance: BIRD_CHANCE,

            world_right_edge: WORLD_RIGHT_EDGE,
            offscreen_x: OFFSCREEN_X,
            ground_pattern: GROUND_PATTERN,

            spawn_margin_min: SPAWN_MARGIN_MIN,
            spawn_margin_max: SPAWN_MARGIN_MAX,

            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            speed_step_ticks: SPEED_STEP_TICKS,
            max_speed: MAX_SPEED,
            scoring: ScoringPolicy::Crossing,

            reward_threshold: REWARD_THRESHOLD,

            auto_restart: false,
        }
    }
}

impl Tuning {
    /// Reject values that would make the game unplayable or break invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("character_size", self.character_size),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("cactus_width", self.cactus_width),
            ("cactus_height", self.cactus_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("ground_pattern", self.ground_pattern),
            ("base_speed", self.base_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        if self.speed_step < 0.0 {
            return Err(TuningError::NotPositive {
                field: "speed_step",
                value: self.speed_step,
            });
        }
        if self.speed_step_ticks == 0 {
            return Err(TuningError::NotPositive {
                field: "speed_step_ticks",
                value: 0.0,
            });
        }
        if let ScoringPolicy::Distance { per_tick } = self.scoring {
            if !(per_tick > 0.0) {
                return Err(TuningError::NotPositive {
                    field: "scoring.per_tick",
                    value: per_tick,
                });
            }
        }
        if self.max_speed < self.base_speed {
            return Err(TuningError::SpeedCapBelowBase {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        if !(0.0..=1.0).contains(&self.bird_chance) {
            return Err(TuningError::ChanceOutOfRange(self.bird_chance));
        }
        if !(self.spawn_margin_min >= 0.0 && self.spawn_margin_min < self.spawn_margin_max) {
            return Err(TuningError::EmptyMarginRange {
                min: self.spawn_margin_min,
                max: self.spawn_margin_max,
            });
        }
        if self.offscreen_x >= self.character_x {
            return Err(TuningError::OffscreenRightOfCharacter {
                offscreen: self.offscreen_x,
                character: self.character_x,
            });
        }
        if self.airtime_ticks().is_none() {
            return Err(TuningError::JumpNeverLands {
                velocity: self.jump_velocity,
                gravity: self.gravity,
                limit: MAX_AIRTIME_TICKS,
            });
        }
        Ok(())
    }

    /// Number of ticks a jump stays airborne
    ///
    /// Simulates the arc exactly as the physics step does so the spawner and
    /// autopilot agree with it to the tick. `None` if the arc does not land
    /// within `MAX_AIRTIME_TICKS`.
    pub fn airtime_ticks(&self) -> Option<u32> {
        if !(self.gravity > 0.0) {
            return None;
        }
        let mut y = GROUND_Y;
        let mut vel = self.jump_velocity;
        for ticks in 1..=MAX_AIRTIME_TICKS {
            let (landed, next_y, next_vel) = arc_step(y, vel, self.gravity);
            if landed {
                return Some(ticks);
            }
            y = next_y;
            vel = next_vel;
        }
        None
    }

    /// Widest obstacle footprint
    pub fn widest_obstacle(&self) -> f32 {
        self.cactus_width.max(self.bird_width)
    }

    /// Smallest leading-edge spacing between consecutive obstacles that a
    /// player can always clear at `speed`, for a jump lasting `airtime` ticks
    pub fn min_gap(&self, speed: f32, airtime: u32) -> f32 {
        speed * airtime as f32 + self.character_size + self.widest_obstacle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_airtime() {
        // 12n - 0.4n(n-1) returns to zero after 31 ticks
        assert_eq!(Tuning::default().airtime_ticks(), Some(31));
    }

    #[test]
    fn test_min_gap_scales_with_speed() {
        let tuning = Tuning::default();
        let slow = tuning.min_gap(tuning.base_speed, 31);
        let fast = tuning.min_gap(tuning.max_speed, 31);
        assert!((slow - (6.0 * 31.0 + 44.0 + 46.0)).abs() < 0.001);
        assert!(fast > slow);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{ "base_speed": 7.0, "scoring": { "mode": "distance", "per_tick": 0.1 } }"#)
                .unwrap();
        assert_eq!(tuning.base_speed, 7.0);
        assert_eq!(tuning.max_speed, MAX_SPEED);
        assert_eq!(tuning.character_x, CHARACTER_X);
        assert_eq!(tuning.scoring, ScoringPolicy::Distance { per_tick: 0.1 });
    }

    #[test]
    fn test_rejects_speed_cap_below_base() {
        let tuning = Tuning {
            base_speed: 8.0,
            max_speed: 4.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::SpeedCapBelowBase { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_chance_and_margin() {
        let tuning = Tuning {
            bird_chance: 1.5,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::ChanceOutOfRange(1.5)));

        let tuning = Tuning {
            spawn_margin_min: 50.0,
            spawn_margin_max: 50.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::EmptyMarginRange { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_speed_step_ticks() {
        let tuning = Tuning {
            speed_step_ticks: 0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive {
                field: "speed_step_ticks",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive { field: "gravity", .. })
        ));
        assert_eq!(tuning.airtime_ticks(), None);
    }

    #[test]
    fn test_rejects_jump_that_never_lands() {
        // Gravity this small vanishes against the velocity in f32
        let tiny_gravity = Tuning {
            gravity: 1e-30,
            ..Default::default()
        };
        assert_eq!(tiny_gravity.airtime_ticks(), None);
        assert!(matches!(
            tiny_gravity.validate(),
            Err(TuningError::JumpNeverLands {
                limit: MAX_AIRTIME_TICKS,
                ..
            })
        ));

        let huge_jump = Tuning {
            jump_velocity: 1e6,
            ..Default::default()
        };
        assert!(matches!(
            huge_jump.validate(),
            Err(TuningError::JumpNeverLands { .. })
        ));
    }
}
