//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call runs
//! the whole tick in a fixed order:
//!
//! 1. input (phase transitions, jump request)
//! 2. jump physics
//! 3. world scroll + prune
//! 4. spawn check
//! 5. collision check (ends the run on the first hit)
//! 6. score and speed
//! 7. reward check

use super::state::{GameEvent, GamePhase, GameState, ObstacleKind};
use super::{collision, physics, progression, session, spawn, world};

/// How many ticks ahead of contact the autopilot jumps
pub const AUTOPILOT_LEAD_TICKS: f32 = 7.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary action (start / jump / restart depending on phase)
    pub primary: bool,
    /// Idle/demo mode - the simulation decides when to jump
    pub autopilot: bool,
}

impl TickInput {
    pub fn press() -> Self {
        Self {
            primary: true,
            ..Default::default()
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase != GamePhase::Running {
        if input.primary {
            session::primary_action(state);
        }
        return;
    }

    // Input
    let wants_jump = input.primary || (input.autopilot && autopilot_wants_jump(state));
    if wants_jump && physics::try_jump(&mut state.character, state.tuning.jump_velocity) {
        state.events.push(GameEvent::Jumped);
    }

    state.elapsed_ticks += 1;

    // Physics
    physics::step(&mut state.character, state.tuning.gravity);

    // World
    let crossed = world::step_world(state);
    spawn::spawn_check(state);

    // Collision
    if let Some(obstacle) =
        collision::first_hit(&state.character, &state.obstacles, &state.tuning).copied()
    {
        session::end_run(state, &obstacle);
        return;
    }

    // Progression
    progression::advance_score(state, &crossed);
    progression::advance_speed(state);
    progression::check_reward(state);

    log::trace!(
        "tick {} y={:.1} obstacles={} score={:.1} speed={:.1}",
        state.elapsed_ticks,
        state.character.y,
        state.obstacles.len(),
        state.score,
        state.speed
    );
}

/// Demo AI: jump when the next cactus is about to reach the character
///
/// Birds fly above a grounded character, so only cacti are jumped.
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    if !state.character.is_grounded() {
        return false;
    }
    let tuning = &state.tuning;
    let front = tuning.character_x + tuning.character_size;

    state
        .obstacles
        .iter()
        .filter(|o| o.kind == ObstacleKind::Cactus)
        .find(|o| o.x + o.kind.size(tuning).0 > tuning.character_x)
        .is_some_and(|o| o.x - front <= AUTOPILOT_LEAD_TICKS * state.speed)
}
