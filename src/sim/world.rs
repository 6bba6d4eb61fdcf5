//! World scrolling
//!
//! Moves every obstacle left by the current speed, records which ones crossed
//! the character line this tick and drops the ones that left the screen.

use super::state::GameState;

/// Advance obstacles and ground by one tick
///
/// Returns the IDs of obstacles that crossed the character line. An
/// obstacle crosses exactly once: positions only decrease, so the
/// "was ahead, now behind" transition can happen on a single tick.
pub fn step_world(state: &mut GameState) -> Vec<u32> {
    let speed = state.speed;
    let line = state.tuning.character_x;
    let mut crossed = Vec::new();

    for obstacle in &mut state.obstacles {
        let before = obstacle.x;
        obstacle.x -= speed;
        if before > line && obstacle.x <= line {
            crossed.push(obstacle.id);
        }
    }

    let offscreen = state.tuning.offscreen_x;
    state.obstacles.retain(|o| o.x > offscreen);

    state.spawner.traveled += speed;
    state.ground_offset = (state.ground_offset + speed) % state.tuning.ground_pattern;

    crossed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Obstacle, ObstacleKind};
    use proptest::prelude::*;

    fn state_with(xs: &[f32]) -> GameState {
        let mut state = GameState::new(11);
        for &x in xs {
            let id = state.next_entity_id();
            state.obstacles.push(Obstacle {
                id,
                kind: ObstacleKind::Cactus,
                x,
            });
        }
        state
    }

    #[test]
    fn test_moves_by_speed() {
        let mut state = state_with(&[500.0, 700.0]);
        step_world(&mut state);
        assert_eq!(state.obstacles[0].x, 494.0);
        assert_eq!(state.obstacles[1].x, 694.0);
        assert_eq!(state.spawner.traveled, BASE_SPEED);
    }

    #[test]
    fn test_prunes_offscreen_only() {
        let mut state = state_with(&[-44.0, -43.0, 300.0]);
        step_world(&mut state);
        // -44 - 6 = -50 is gone, -43 - 6 = -49 stays
        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![-49.0, 294.0]);
    }

    #[test]
    fn test_crossing_counted_once() {
        let mut state = state_with(&[90.0]);
        let id = state.obstacles[0].id;
        let mut crossed = Vec::new();
        for _ in 0..30 {
            crossed.extend(step_world(&mut state));
        }
        assert_eq!(crossed, vec![id]);
    }

    #[test]
    fn test_obstacle_landing_on_line_counts() {
        let mut state = state_with(&[86.0]);
        assert_eq!(step_world(&mut state).len(), 1);
        assert_eq!(state.obstacles[0].x, CHARACTER_X);
        assert!(step_world(&mut state).is_empty());
    }

    #[test]
    fn test_ground_offset_wraps() {
        let mut state = state_with(&[]);
        for _ in 0..4 {
            step_world(&mut state);
        }
        // 24 mod 20
        assert!((state.ground_offset - 4.0).abs() < 0.001);
        assert!(state.ground_offset < GROUND_PATTERN);
    }

    proptest! {
        #[test]
        fn prop_survivors_moved_left(
            xs in proptest::collection::vec(-100.0f32..900.0, 0..20),
            speed in 0.5f32..12.0,
        ) {
            let mut state = state_with(&xs);
            state.speed = speed;
            let before: Vec<(u32, f32)> = state.obstacles.iter().map(|o| (o.id, o.x)).collect();

            step_world(&mut state);

            for (id, x) in before {
                match state.obstacles.iter().find(|o| o.id == id) {
                    Some(o) => {
                        prop_assert!(o.x < x);
                        prop_assert!(o.x > OFFSCREEN_X);
                    }
                    None => prop_assert!(x - speed <= OFFSCREEN_X),
                }
            }
        }
    }
}
