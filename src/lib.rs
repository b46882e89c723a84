//! Precise Stacker - A tower stacking timing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (swing, drop, overlap trim, camera)
//! - `game`: Controller tying the simulation to storage and HUD
//! - `renderer`: Draw list construction and WebGPU pipeline
//! - `highscores`: Best score persistence (LocalStorage on web)
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::StartupError;
pub use game::{Game, Hud};
pub use highscores::{HighScore, MemoryStore, ScoreStore};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Canvas dimensions (logical pixels)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Block defaults
    pub const BLOCK_HEIGHT: f32 = 20.0;
    /// Base block is 80% of canvas width
    pub const BASE_BLOCK_WIDTH_RATIO: f32 = 0.8;
    /// Vertical distance above the stack where new blocks spawn
    pub const BLOCK_SPAWN_GAP: f32 = 50.0;
    /// Minimum distance from the top of the view a block may spawn at
    pub const MIN_SPAWN_Y_OFFSET: f32 = 50.0;

    /// Horizontal swing speed (pixels/s) at score 0
    pub const SWING_SPEED_START: f32 = 120.0;
    /// Swing speed gained per placed block (pixels/s)
    pub const SWING_SPEED_INCREASE: f32 = 3.0;
    /// Drop speed (pixels/s)
    pub const DROP_SPEED: f32 = 300.0;

    /// Camera follows once the stack top is in the upper 60% of the screen
    pub const CAMERA_FOLLOW_THRESHOLD_RATIO: f32 = 0.6;
    /// Blocks in the stack before the camera starts moving
    pub const CAMERA_START_THRESHOLD_BLOCKS: usize = 5;

    /// Block color cycle (HSL)
    pub const HUE_START: f32 = 180.0;
    pub const HUE_INCREMENT: f32 = 15.0;
    pub const HSL_SATURATION: f32 = 0.7;
    pub const HSL_LIGHTNESS: f32 = 0.6;

    /// Block outline width (pixels)
    pub const BLOCK_BORDER_WIDTH: f32 = 1.0;
}
