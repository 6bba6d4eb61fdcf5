//! Fixed-step clock
//!
//! Turns variable frame times into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    /// Seconds per tick
    pub dt: f32,
    accumulator: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl Clock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add `elapsed` seconds and return how many ticks are due
    ///
    /// Long frames are clamped and at most `MAX_SUBSTEPS` ticks run per call;
    /// anything beyond that is dropped rather than carried over.
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut due = 0;
        while self.accumulator >= self.dt && due < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            due += 1;
        }
        if due == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.dt);
        }
        due
    }

    /// Drop any partial tick
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks() {
        let mut clock = Clock::new(0.016);
        assert_eq!(clock.accumulate(0.010), 0);
        assert_eq!(clock.accumulate(0.010), 1);
        // 0.004 s carried over
        assert_eq!(clock.accumulate(0.012), 1);
    }

    #[test]
    fn test_substep_cap() {
        let mut clock = Clock::new(0.016);
        // 0.1 s would be 6 ticks; a 5 s hitch is clamped to the same
        assert_eq!(clock.accumulate(5.0), 6);

        let mut fine = Clock::new(0.001);
        assert_eq!(fine.accumulate(0.1), MAX_SUBSTEPS);
        // Backlog is not replayed
        assert!(fine.accumulate(0.0) <= 1);
    }

    #[test]
    fn test_reset_discards_partial_tick() {
        let mut clock = Clock::new(0.016);
        clock.accumulate(0.015);
        clock.reset();
        assert_eq!(clock.accumulate(0.002), 0);
    }

    #[test]
    fn test_negative_elapsed_ignored() {
        let mut clock = Clock::new(0.016);
        assert_eq!(clock.accumulate(-1.0), 0);
        assert_eq!(clock.accumulate(0.015), 0);
    }
}
