//! Property tests for the stacking simulation
//!
//! Random tap timings drive whole runs; the invariants must hold for all of them.

use precise_stacker::consts::SIM_DT;
use precise_stacker::sim::{GamePhase, GameState, Span, TickInput, overlap, overlap_width, tick};
use precise_stacker::Tuning;
use proptest::prelude::*;

/// Play a run: wait `delay` ticks while swinging, tap, let it land, repeat
fn play(delays: &[u16]) -> Vec<GameState> {
    let mut state = GameState::started(Tuning::default());
    let mut snapshots = vec![state.clone()];
    let idle = TickInput::default();
    let tap = TickInput { drop: true };

    for &delay in delays {
        if state.phase == GamePhase::GameOver {
            break;
        }
        for _ in 0..delay {
            tick(&mut state, &idle, SIM_DT);
        }
        tick(&mut state, &tap, SIM_DT);
        while state.phase == GamePhase::Dropping {
            tick(&mut state, &idle, SIM_DT);
        }
        snapshots.push(state.clone());
    }
    snapshots
}

proptest! {
    #[test]
    fn overlap_matches_formula(
        x1 in -500.0f32..500.0, w1 in 1.0f32..400.0,
        x2 in -500.0f32..500.0, w2 in 1.0f32..400.0,
    ) {
        let a = Span::from_extent(x1, w1);
        let b = Span::from_extent(x2, w2);
        let expected = (x1 + w1).min(x2 + w2) - x1.max(x2);
        prop_assert_eq!(overlap_width(a, b), expected);

        match overlap(a, b) {
            Some(hit) => {
                prop_assert!(expected > 0.0);
                prop_assert!(hit.width() <= w1.min(w2) + 1e-3);
            }
            None => prop_assert!(expected <= 0.0),
        }
    }

    #[test]
    fn stack_widths_never_grow(delays in prop::collection::vec(0u16..90, 1..40)) {
        let last = play(&delays).pop().unwrap();
        for pair in last.blocks.windows(2) {
            prop_assert!(pair[1].width <= pair[0].width + 1e-3);
            prop_assert!(pair[1].width > 0.0);
        }
    }

    #[test]
    fn blocks_rest_on_each_other(delays in prop::collection::vec(0u16..90, 1..40)) {
        let last = play(&delays).pop().unwrap();
        for pair in last.blocks.windows(2) {
            prop_assert!((pair[0].y - pair[1].y - last.tuning.block_height).abs() < 1e-3);
        }
    }

    #[test]
    fn score_tracks_successful_landings(delays in prop::collection::vec(0u16..90, 1..40)) {
        let tuning = Tuning::default();
        for state in play(&delays) {
            prop_assert_eq!(state.score as usize, state.blocks.len() - 1);
            let expected = tuning.swing_speed_start + state.score as f32 * tuning.swing_speed_increase;
            prop_assert!((state.swing_speed - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn camera_never_moves_down(delays in prop::collection::vec(0u16..90, 1..60)) {
        let snapshots = play(&delays);
        for pair in snapshots.windows(2) {
            prop_assert!(pair[1].camera_height() >= pair[0].camera_height());
        }
    }

    #[test]
    fn swinging_block_stays_on_canvas(delay in 0u16..2000) {
        let mut state = GameState::started(Tuning::default());
        for _ in 0..delay {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        let current = state.current.unwrap().block;
        prop_assert!(current.x >= 0.0);
        prop_assert!(current.x + current.width <= state.tuning.canvas_width + 1e-3);
    }
}
