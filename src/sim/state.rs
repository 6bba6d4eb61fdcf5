//! Game state and core simulation types
//!
//! Everything one run needs lives in [`GameState`]; presentation only ever
//! sees it through a [`Snapshot`](super::Snapshot).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::Spawner;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first primary action
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by a collision
    GameOver,
}

/// The player character (fixed horizontal position, only y moves)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Height of the feet above ground
    pub y: f32,
    /// Vertical velocity (per tick, positive is up)
    pub vel: f32,
    /// Mid-jump flag
    pub jumping: bool,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            y: GROUND_Y,
            vel: 0.0,
            jumping: false,
        }
    }
}

impl Character {
    /// Resting on the ground and not in a jump
    ///
    /// Both checks are needed: on the landing tick the flag clears in the
    /// same step that snaps y back to ground.
    pub fn is_grounded(&self) -> bool {
        !self.jumping && self.y == GROUND_Y
    }

    /// Put the character back on the ground, at rest
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    /// Low ground obstacle - must be jumped
    Cactus,
    /// Elevated obstacle - must be run under
    Bird,
}

impl ObstacleKind {
    /// Box size (width, height) for this kind
    pub fn size(self, tuning: &Tuning) -> (f32, f32) {
        match self {
            ObstacleKind::Cactus => (tuning.cactus_width, tuning.cactus_height),
            ObstacleKind::Bird => (tuning.bird_width, tuning.bird_height),
        }
    }

    /// Height of the box bottom above ground
    pub fn altitude(self, tuning: &Tuning) -> f32 {
        match self {
            ObstacleKind::Cactus => GROUND_Y,
            ObstacleKind::Bird => GROUND_Y + tuning.bird_altitude,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Cactus => "cactus",
            ObstacleKind::Bird => "bird",
        }
    }
}

/// An obstacle scrolling toward the character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Unique per session history (stable rendering key)
    pub id: u32,
    pub kind: ObstacleKind,
    /// Left edge, decreasing every tick
    pub x: f32,
}

/// Things that happened during a tick (for sound/flash hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Session entered Running
    Started,
    /// Character left the ground
    Jumped,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    /// Obstacle crossed the character line on a tick the run survived
    ObstaclePassed { id: u32 },
    SpeedIncreased { speed: f32 },
    RewardRevealed,
    /// Run ended against this obstacle
    Collided { id: u32 },
    /// Session returned to its initial values
    Reset,
}

/// Complete game state (deterministic given seed + inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values for this session (validated at construction)
    pub(crate) tuning: Tuning,
    /// Jump airtime derived from `tuning`
    airtime: u32,
    /// Obstacle RNG (persists across runs so every run differs)
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Running ticks since the run began
    pub elapsed_ticks: u64,
    /// Player character
    pub character: Character,
    /// Live obstacles, leftmost (oldest) first
    pub obstacles: Vec<Obstacle>,
    /// Score (never decreases during a run)
    pub score: f32,
    /// Scroll speed per tick (never decreases during a run, capped)
    pub speed: f32,
    /// Ground texture scroll offset in [0, ground_pattern)
    pub ground_offset: f32,
    /// Reward string once revealed this session
    pub reward: Option<&'static str>,
    /// Spacing state for the next obstacle
    pub spawner: Spawner,
    /// Events emitted by the most recent tick / transition
    pub events: Vec<GameEvent>,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the default tuning
    pub fn new(seed: u64) -> Self {
        let tuning = Tuning::default();
        // The default arc always lands
        let airtime = tuning.airtime_ticks().unwrap_or(MAX_AIRTIME_TICKS);
        Self::from_parts(seed, tuning, airtime)
    }

    /// Create a new game state with custom balance values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let airtime = tuning.airtime_ticks().unwrap_or(MAX_AIRTIME_TICKS);
        Ok(Self::from_parts(seed, tuning, airtime))
    }

    fn from_parts(seed: u64, tuning: Tuning, airtime: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            elapsed_ticks: 0,
            character: Character::default(),
            obstacles: Vec::new(),
            score: 0.0,
            speed: tuning.base_speed,
            ground_offset: 0.0,
            reward: None,
            spawner: Spawner::default(),
            events: Vec::new(),
            next_id: 1,
            airtime,
            tuning,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Smallest clearable obstacle spacing at the current speed
    pub fn min_gap(&self) -> f32 {
        self.tuning.min_gap(self.speed, self.airtime)
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether the reward has been revealed this session
    pub fn reward_revealed(&self) -> bool {
        self.reward.is_some()
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// Return every per-run field to its initial value
    ///
    /// The RNG and the ID counter carry on so a new run gets a fresh
    /// obstacle sequence and never reuses an ID. Does not touch the RNG, so
    /// resetting twice lands in the same state as resetting once.
    pub fn reset_run(&mut self) {
        self.elapsed_ticks = 0;
        self.character.reset();
        self.obstacles.clear();
        self.score = 0.0;
        self.speed = self.tuning.base_speed;
        self.ground_offset = 0.0;
        self.reward = None;
        self.spawner = Spawner::default();
    }
}
