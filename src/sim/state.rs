//! Game state and core simulation types
//!
//! Everything a run needs lives in `GameState`; reset builds it afresh.

use serde::{Deserialize, Serialize};

use super::overlap::Span;
use super::palette::{BASE_BLOCK_COLOR, HueCycle};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run started yet
    Waiting,
    /// Current block moving side to side, waiting for input
    Swinging,
    /// Current block falling onto the stack
    Dropping,
    /// Run ended on a miss
    GameOver,
}

/// Notifications produced by the simulation for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed (also sent on reset)
    ScoreChanged { score: u32 },
    /// A trimmed block joined the stack
    BlockPlaced { width: f32 },
    /// Dropped block missed the stack
    GameOver { score: u32 },
}

/// A placed block (world coordinates, Y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

impl Block {
    /// Horizontal extent
    pub fn span(&self) -> Span {
        Span::from_extent(self.x, self.width)
    }
}

/// How the in-flight block is moving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Moving horizontally; direction is +1 (right) or -1 (left)
    Swinging { direction: f32 },
    /// Falling toward the stack
    Dropping,
}

/// The block the player is about to drop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentBlock {
    pub block: Block,
    pub motion: Motion,
}

impl CurrentBlock {
    /// Advance the swing, bouncing off either edge of the canvas
    pub fn swing(&mut self, speed: f32, dt: f32, canvas_width: f32) {
        let Motion::Swinging { direction } = &mut self.motion else {
            return;
        };
        let block = &mut self.block;
        block.x += *direction * speed * dt;

        if block.x < 0.0 || block.x + block.width > canvas_width {
            *direction = -*direction;
            block.x = block.x.min(canvas_width - block.width).max(0.0);
        }
    }

    /// Fall toward `target_y`; returns true once the block has arrived
    pub fn fall(&mut self, speed: f32, dt: f32, target_y: f32) -> bool {
        self.block.y += speed * dt;
        if self.block.y >= target_y {
            // Snap exactly onto the stack
            self.block.y = target_y;
            return true;
        }
        false
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Layout and balance for this run
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Placed blocks, base first
    pub blocks: Vec<Block>,
    /// In-flight block (None before the first reset)
    pub current: Option<CurrentBlock>,
    /// Swing speed (pixels/s)
    pub swing_speed: f32,
    /// World Y at the top of the screen
    pub camera_y: f32,
    /// Score
    pub score: u32,
    /// Block color cycle
    pub palette: HueCycle,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending notifications (drained by the controller)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle state; call `reset` to start a run
    pub fn new(tuning: Tuning) -> Self {
        Self {
            swing_speed: tuning.swing_speed_start,
            palette: HueCycle::new(tuning.hue_start, tuning.hue_increment),
            tuning,
            phase: GamePhase::Waiting,
            blocks: Vec::new(),
            current: None,
            camera_y: 0.0,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Create a state with a run already in progress
    pub fn started(tuning: Tuning) -> Self {
        let mut state = Self::new(tuning);
        state.reset();
        state
    }

    /// Start a fresh run: base block, first swinging block, score zero
    pub fn reset(&mut self) {
        let tuning = self.tuning.clone();
        *self = Self::new(tuning);

        let t = &self.tuning;
        let base_width = t.base_width();
        self.blocks.push(Block {
            x: (t.canvas_width - base_width) / 2.0,
            y: t.canvas_height - t.block_height,
            width: base_width,
            height: t.block_height,
            color: BASE_BLOCK_COLOR,
        });

        self.spawn_block();
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        self.phase = GamePhase::Swinging;
    }

    /// Top of the stack
    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Spawn a new swinging block above the stack top
    ///
    /// It starts at the left edge moving right, as wide as the top block, a
    /// fixed gap above it but never closer than `min_spawn_offset` to the top
    /// of the view.
    pub fn spawn_block(&mut self) {
        let Some(top) = self.top().copied() else {
            return;
        };
        let t = &self.tuning;

        let mut spawn_y = top.y - t.block_height - t.spawn_gap;
        if spawn_y - self.camera_y < t.min_spawn_offset {
            spawn_y = self.camera_y + t.min_spawn_offset;
        }

        let block = Block {
            x: 0.0,
            y: spawn_y,
            width: top.width,
            height: t.block_height,
            color: self.palette.next_color(),
        };
        self.current = Some(CurrentBlock {
            block,
            motion: Motion::Swinging { direction: 1.0 },
        });
    }

    /// World Y the current block lands at
    pub fn landing_y(&self) -> Option<f32> {
        self.top().map(|top| top.y - self.tuning.block_height)
    }

    /// How far the camera has climbed (never decreases during a run)
    pub fn camera_height(&self) -> f32 {
        -self.camera_y
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_waiting() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.phase, GamePhase::Waiting);
        assert!(state.blocks.is_empty());
        assert!(state.current.is_none());
    }

    #[test]
    fn test_reset_builds_base_and_first_block() {
        let state = GameState::started(Tuning::default());
        assert_eq!(state.phase, GamePhase::Swinging);
        assert_eq!(state.blocks.len(), 1);

        let base = state.blocks[0];
        assert_eq!(base.x, 40.0);
        assert_eq!(base.y, 580.0);
        assert_eq!(base.width, 320.0);
        assert_eq!(base.color, BASE_BLOCK_COLOR);

        let current = state.current.unwrap();
        assert_eq!(current.block.x, 0.0);
        assert_eq!(current.block.y, 580.0 - 20.0 - 50.0);
        assert_eq!(current.block.width, 320.0);
        assert_eq!(current.motion, Motion::Swinging { direction: 1.0 });
        assert_eq!(state.palette.hue, 195.0);
        assert_eq!(state.events, vec![GameEvent::ScoreChanged { score: 0 }]);
    }

    #[test]
    fn test_reset_clears_previous_run() {
        let mut state = GameState::started(Tuning::default());
        state.score = 7;
        state.camera_y = -300.0;
        state.swing_speed = 999.0;
        state.phase = GamePhase::GameOver;
        let base = state.blocks[0];
        state.blocks.push(base);

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.camera_y, 0.0);
        assert_eq!(state.swing_speed, state.tuning.swing_speed_start);
        assert_eq!(state.blocks.len(), 1);
        assert_eq!(state.phase, GamePhase::Swinging);
    }

    #[test]
    fn test_spawn_respects_view_minimum() {
        let mut state = GameState::started(Tuning::default());
        // Pretend the camera already climbed past the spawn point
        state.camera_y = 500.0;
        state.spawn_block();
        let current = state.current.unwrap();
        assert_eq!(current.block.y, 550.0);
    }

    #[test]
    fn test_swing_bounces_off_right_edge() {
        let mut current = CurrentBlock {
            block: Block {
                x: 75.0,
                y: 0.0,
                width: 320.0,
                height: 20.0,
                color: [1.0; 4],
            },
            motion: Motion::Swinging { direction: 1.0 },
        };
        current.swing(600.0, 1.0 / 60.0, 400.0);
        assert_eq!(current.block.x, 80.0);
        assert_eq!(current.motion, Motion::Swinging { direction: -1.0 });
    }

    #[test]
    fn test_swing_bounces_off_left_edge() {
        let mut current = CurrentBlock {
            block: Block {
                x: 1.0,
                y: 0.0,
                width: 100.0,
                height: 20.0,
                color: [1.0; 4],
            },
            motion: Motion::Swinging { direction: -1.0 },
        };
        current.swing(120.0, 1.0 / 60.0, 400.0);
        assert_eq!(current.block.x, 0.0);
        assert_eq!(current.motion, Motion::Swinging { direction: 1.0 });
    }

    #[test]
    fn test_fall_snaps_to_target() {
        let mut current = CurrentBlock {
            block: Block {
                x: 0.0,
                y: 557.0,
                width: 100.0,
                height: 20.0,
                color: [1.0; 4],
            },
            motion: Motion::Dropping,
        };
        assert!(current.fall(300.0, 1.0 / 60.0, 560.0));
        assert_eq!(current.block.y, 560.0);
    }
}
