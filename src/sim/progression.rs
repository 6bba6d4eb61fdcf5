//! Score, speed ramp and the reward latch

use super::state::{GameEvent, GameState};
use crate::consts::REWARD_CODE;
use crate::tuning::ScoringPolicy;

/// Add this tick's score and report the obstacles passed on it
///
/// Only called on ticks the run survives, so every `ObstaclePassed` event
/// matches a crossing that counted.
pub fn advance_score(state: &mut GameState, crossed: &[u32]) {
    match state.tuning.scoring {
        ScoringPolicy::Crossing => state.score += crossed.len() as f32,
        ScoringPolicy::Distance { per_tick } => state.score += per_tick,
    }
    state
        .events
        .extend(crossed.iter().map(|&id| GameEvent::ObstaclePassed { id }));
}

/// Step the scroll speed up every `speed_step_ticks`, never past the cap
pub fn advance_speed(state: &mut GameState) {
    let tuning = &state.tuning;
    if state.elapsed_ticks == 0 || state.elapsed_ticks % tuning.speed_step_ticks != 0 {
        return;
    }
    if state.speed >= tuning.max_speed {
        return;
    }
    state.speed = (state.speed + tuning.speed_step).min(tuning.max_speed);
    state.events.push(GameEvent::SpeedIncreased { speed: state.speed });
    log::debug!("Speed up to {:.1} at tick {}", state.speed, state.elapsed_ticks);
}

/// Reveal the reward the first time the floored score reaches the threshold
///
/// Returns true only on the revealing tick.
pub fn check_reward(state: &mut GameState) -> bool {
    if state.reward.is_some() || state.display_score() < state.tuning.reward_threshold {
        return false;
    }
    state.reward = Some(REWARD_CODE);
    state.events.push(GameEvent::RewardRevealed);
    log::info!("Reward revealed at score {}", state.display_score());
    true
}
