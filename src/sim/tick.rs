//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::camera;
use super::overlap::overlap;
use super::state::{Block, GameEvent, GamePhase, GameState, Motion};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the swinging block (click/tap/space)
    pub drop: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Waiting | GamePhase::GameOver => return,
        _ => {}
    }

    state.time_ticks += 1;

    // Input only counts while swinging
    if input.drop && state.phase == GamePhase::Swinging {
        if let Some(current) = state.current.as_mut() {
            current.motion = Motion::Dropping;
            state.phase = GamePhase::Dropping;
        }
    }

    match state.phase {
        GamePhase::Swinging => {
            let speed = state.swing_speed;
            let width = state.tuning.canvas_width;
            if let Some(current) = state.current.as_mut() {
                current.swing(speed, dt, width);
            }
        }
        GamePhase::Dropping => {
            let Some(target_y) = state.landing_y() else {
                return;
            };
            let drop_speed = state.tuning.drop_speed;
            let landed = state
                .current
                .as_mut()
                .is_some_and(|current| current.fall(drop_speed, dt, target_y));
            if landed {
                land(state);
            }
        }
        GamePhase::Waiting | GamePhase::GameOver => {}
    }
}

/// Pure form of `tick`: returns the next state, leaving `state` untouched
pub fn step(state: &GameState, input: &TickInput, dt: f32) -> GameState {
    let mut next = state.clone();
    tick(&mut next, input, dt);
    next
}

/// Resolve a landed block: trim and stack it, or end the run
fn land(state: &mut GameState) {
    let (Some(current), Some(top)) = (state.current, state.top().copied()) else {
        return;
    };
    let dropped = current.block;

    let Some(hit) = overlap(dropped.span(), top.span()) else {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        return;
    };

    let placed = Block {
        x: hit.start,
        y: top.y - state.tuning.block_height,
        width: hit.width(),
        height: state.tuning.block_height,
        color: dropped.color,
    };
    state.blocks.push(placed);

    state.score += 1;
    state.swing_speed = state.tuning.swing_speed_for(state.score);
    state.events.push(GameEvent::BlockPlaced {
        width: placed.width,
    });
    state.events.push(GameEvent::ScoreChanged { score: state.score });

    state.camera_y = camera::follow(
        state.camera_y,
        placed.y,
        state.blocks.len(),
        &state.tuning,
    );

    state.spawn_block();
    state.phase = GamePhase::Swinging;
}
