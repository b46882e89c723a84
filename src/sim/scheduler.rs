//! Fixed timestep frame scheduler
//!
//! Turns variable display frame times into a whole number of simulation
//! ticks, so the simulation sees the same `dt` regardless of refresh rate.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulator-based scheduler
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Forget any partially accumulated time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Run as many ticks as `frame_dt` covers; returns how many ran
    ///
    /// One-shot input is cleared once a tick has consumed it. A frame too
    /// short to run a tick leaves it pending for the next frame.
    pub fn advance(&mut self, state: &mut GameState, input: &mut TickInput, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            tick(state, input, self.step);
            self.accumulator -= self.step;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.drop = false;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    #[test]
    fn test_short_frame_keeps_input_pending() {
        let mut state = GameState::started(Tuning::default());
        let mut input = TickInput { drop: true };
        let mut scheduler = FixedStep::default();

        assert_eq!(scheduler.advance(&mut state, &mut input, SIM_DT * 0.5), 0);
        assert!(input.drop);
        assert_eq!(state.phase, GamePhase::Swinging);

        assert_eq!(scheduler.advance(&mut state, &mut input, SIM_DT * 0.6), 1);
        assert!(!input.drop);
        assert_eq!(state.phase, GamePhase::Dropping);
    }

    #[test]
    fn test_long_frame_runs_several_ticks() {
        let mut state = GameState::started(Tuning::default());
        let mut input = TickInput::default();
        let mut scheduler = FixedStep::default();

        let ticks = scheduler.advance(&mut state, &mut input, SIM_DT * 3.5);
        assert_eq!(ticks, 3);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_huge_frame_is_clamped() {
        let mut state = GameState::started(Tuning::default());
        let mut input = TickInput::default();
        let mut scheduler = FixedStep::default();

        // A stalled tab must not fast-forward the swing
        let ticks = scheduler.advance(&mut state, &mut input, 5.0);
        assert!(ticks <= (MAX_FRAME_DT / SIM_DT).ceil() as u32);
        assert!(ticks <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_drop_consumed_by_one_tick_only() {
        let mut state = GameState::started(Tuning::default());
        let mut input = TickInput { drop: true };
        let mut scheduler = FixedStep::default();

        scheduler.advance(&mut state, &mut input, SIM_DT * 2.5);
        assert_eq!(state.phase, GamePhase::Dropping);
        assert!(!input.drop);
    }
}
