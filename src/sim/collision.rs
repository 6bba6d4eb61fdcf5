//! Collision detection between the character and obstacles
//!
//! Both sides are axis-aligned boxes in world space (x right, y up from the
//! ground). Touching edges do not collide.

use glam::Vec2;

use super::state::{Character, Obstacle};
use crate::tuning::Tuning;

/// Axis-aligned box, half-open: `[min.x, min.x + size.x) x [min.y, min.y + size.y)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// The character's box
pub fn character_box(character: &Character, tuning: &Tuning) -> Aabb {
    Aabb::new(
        tuning.character_x,
        character.y,
        tuning.character_size,
        tuning.character_size,
    )
}

/// An obstacle's box
pub fn obstacle_box(obstacle: &Obstacle, tuning: &Tuning) -> Aabb {
    let (width, height) = obstacle.kind.size(tuning);
    Aabb::new(obstacle.x, obstacle.kind.altitude(tuning), width, height)
}

/// First obstacle the character overlaps, if any
pub fn first_hit<'a>(
    character: &Character,
    obstacles: &'a [Obstacle],
    tuning: &Tuning,
) -> Option<&'a Obstacle> {
    let player = character_box(character, tuning);
    obstacles
        .iter()
        .find(|o| player.overlaps(&obstacle_box(o, tuning)))
}
