//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness (colors cycle in a fixed order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod overlap;
pub mod palette;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use overlap::{Span, overlap, overlap_width};
pub use palette::{BASE_BLOCK_COLOR, HueCycle, hsl_to_rgba};
pub use scheduler::FixedStep;
pub use state::{Block, CurrentBlock, GameEvent, GamePhase, GameState, Motion};
pub use tick::{TickInput, step, tick};
