//! Session lifecycle: Idle -> Running -> GameOver -> Idle
//!
//! Every transition goes through these functions so the resets stay in one
//! place.

use super::spawn::Spawner;
use super::state::{GameEvent, GamePhase, GameState, Obstacle};

/// Begin a fresh run (from Idle, or from GameOver with auto-restart)
///
/// Ignored while already running.
pub fn start_run(state: &mut GameState) -> bool {
    if state.phase == GamePhase::Running {
        return false;
    }
    state.reset_run();
    state.spawner = Spawner::new(&state.tuning, &mut state.rng);
    state.phase = GamePhase::Running;
    state.events.push(GameEvent::Started);
    log::info!("Run started");
    true
}

/// Stop the run against `obstacle`
///
/// Score, obstacles and the reward stay frozen for the game-over screen.
pub fn end_run(state: &mut GameState, obstacle: &Obstacle) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::Collided { id: obstacle.id });
    log::info!(
        "Game over: hit {} #{} at score {} after {} ticks",
        obstacle.kind.as_str(),
        obstacle.id,
        state.display_score(),
        state.elapsed_ticks
    );
}

/// Return to the title screen with every per-run value cleared
///
/// Idempotent: resetting twice is the same as resetting once.
pub fn reset(state: &mut GameState) {
    let was = state.phase;
    state.reset_run();
    state.phase = GamePhase::Idle;
    state.events.clear();
    state.events.push(GameEvent::Reset);
    if was != GamePhase::Idle {
        log::info!("Session reset from {:?}", was);
    }
}

/// Apply the primary action outside of Running
///
/// Idle starts a run; GameOver resets (or restarts directly when
/// `auto_restart` is set). Returns whether the phase changed.
pub fn primary_action(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Idle => start_run(state),
        GamePhase::GameOver if state.tuning.auto_restart => start_run(state),
        GamePhase::GameOver => {
            reset(state);
            true
        }
        GamePhase::Running => false,
    }
}
