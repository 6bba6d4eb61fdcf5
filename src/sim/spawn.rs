//! Obstacle spawning
//!
//! Spacing is distance based: the next obstacle appears once the world has
//! scrolled a minimum safe gap (which grows with speed) plus a random margin
//! since the previous one. Since every obstacle scrolls at the same speed,
//! the distance scrolled between two spawns is exactly the spacing between
//! their leading edges.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Spacing state between spawns
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// World distance scrolled since the last spawn (or run start)
    pub traveled: f32,
    /// Random extra spacing for the next obstacle
    pub margin: f32,
}

impl Spawner {
    /// Fresh spacing with a newly rolled margin
    pub fn new(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        Self {
            traveled: 0.0,
            margin: roll_margin(tuning, rng),
        }
    }

    /// Distance that must be scrolled before the next spawn, given the
    /// current minimum gap
    ///
    /// Re-evaluated every tick so a speed-up lengthens the pending gap too.
    pub fn required_gap(&self, min_gap: f32) -> f32 {
        min_gap + self.margin
    }

    pub fn is_due(&self, min_gap: f32) -> bool {
        self.traveled >= self.required_gap(min_gap)
    }
}

fn roll_margin(tuning: &Tuning, rng: &mut impl Rng) -> f32 {
    rng.random_range(tuning.spawn_margin_min..tuning.spawn_margin_max)
}

/// Weighted choice between the two obstacle kinds
pub fn choose_kind(tuning: &Tuning, rng: &mut impl Rng) -> ObstacleKind {
    if rng.random_bool(tuning.bird_chance) {
        ObstacleKind::Bird
    } else {
        ObstacleKind::Cactus
    }
}

/// Emit a new obstacle at the right edge if the gap has been covered
pub fn spawn_check(state: &mut GameState) -> Option<Obstacle> {
    if !state.spawner.is_due(state.min_gap()) {
        return None;
    }

    let kind = choose_kind(&state.tuning, &mut state.rng);
    let obstacle = Obstacle {
        id: state.next_entity_id(),
        kind,
        x: state.tuning.world_right_edge,
    };
    state.obstacles.push(obstacle);
    state.spawner = Spawner {
        traveled: 0.0,
        margin: roll_margin(&state.tuning, &mut state.rng),
    };
    state.events.push(GameEvent::ObstacleSpawned {
        id: obstacle.id,
        kind,
    });
    log::debug!(
        "Spawned {} #{} (speed {:.1}, next margin {:.0})",
        kind.as_str(),
        obstacle.id,
        state.speed,
        state.spawner.margin
    );

    Some(obstacle)
}
