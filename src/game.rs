//! Frame driver
//!
//! Owns the simulation and the fixed-step clock. Front-ends queue input at
//! any time; it is only applied at the next tick boundary.

use crate::sim::{Clock, GamePhase, GameState, Snapshot, TickInput, session, tick};
use crate::tuning::{Tuning, TuningError};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    clock: Clock,
    /// Input queued for the next tick
    input: TickInput,
    /// Track phase for transition logging
    last_phase: GamePhase,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        log::info!("New game (seed {})", seed);
        Self::from_state(GameState::new(seed))
    }

    /// New game with custom balance values, rejected if they fail validation
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        let state = GameState::with_tuning(seed, tuning)?;
        log::info!("New game (seed {}, custom tuning)", seed);
        Ok(Self::from_state(state))
    }

    fn from_state(state: GameState) -> Self {
        Self {
            state,
            clock: Clock::default(),
            input: TickInput::default(),
            last_phase: GamePhase::Idle,
        }
    }

    /// Queue the primary action (start / jump / restart)
    pub fn press(&mut self) {
        self.input.primary = true;
    }

    /// Let the simulation play itself
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Explicit "play again": straight back to the title screen
    pub fn reset(&mut self) {
        session::reset(&mut self.state);
        self.clock.reset();
        self.input.primary = false;
        self.note_phase();
    }

    /// Run every tick due after `elapsed` seconds; returns how many ran
    pub fn frame(&mut self, elapsed: f32) -> u32 {
        let due = self.clock.accumulate(elapsed);
        let mut ran = 0;
        while ran < due {
            let input = self.input;
            tick(&mut self.state, &input);
            ran += 1;

            // Clear one-shot inputs after processing
            self.input.primary = false;

            if self.note_phase() == Some(GamePhase::Running) {
                // Leftover ticks of this frame belong to the finished run
                self.clock.reset();
                break;
            }
        }
        ran
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Log phase transitions; returns the phase that was left, if any
    fn note_phase(&mut self) -> Option<GamePhase> {
        let current = self.state.phase;
        if current == self.last_phase {
            return None;
        }
        log::info!("Phase {:?} -> {:?}", self.last_phase, current);
        let left = self.last_phase;
        self.last_phase = current;
        Some(left)
    }
}
