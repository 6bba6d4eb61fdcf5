//! Read-only view of the game for the presentation layer

use serde::Serialize;

use super::collision::obstacle_box;
use super::state::{GameEvent, GamePhase, GameState, ObstacleKind};

/// Obstacle as drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub x: f32,
    /// Bottom edge above ground
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub character_x: f32,
    pub character_y: f32,
    pub character_size: f32,
    pub jumping: bool,
    pub obstacles: Vec<ObstacleView>,
    pub score: f32,
    /// Floored score for the HUD
    pub display_score: u32,
    pub speed: f32,
    pub ground_offset: f32,
    pub elapsed_ticks: u64,
    pub reward: Option<&'static str>,
    pub reward_revealed: bool,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let obstacles = state
            .obstacles
            .iter()
            .map(|o| {
                let bounds = obstacle_box(o, &state.tuning);
                ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    x: bounds.min.x,
                    y: bounds.min.y,
                    width: bounds.size.x,
                    height: bounds.size.y,
                }
            })
            .collect();

        Self {
            phase: state.phase,
            character_x: state.tuning.character_x,
            character_y: state.character.y,
            character_size: state.tuning.character_size,
            jumping: state.character.jumping,
            obstacles,
            score: state.score,
            display_score: state.display_score(),
            speed: state.speed,
            ground_offset: state.ground_offset,
            elapsed_ticks: state.elapsed_ticks,
            reward: state.reward,
            reward_revealed: state.reward_revealed(),
            events: state.events.clone(),
        }
    }

    /// Serialize for a browser front-end
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Score padded to five digits like the classic HUD
    pub fn score_label(&self) -> String {
        format!("{:05}", self.display_score)
    }
}
