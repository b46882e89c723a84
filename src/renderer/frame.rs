//! Per-frame draw list
//!
//! Converts the game state into screen-space rectangles. Knows nothing about
//! the GPU, so it can be tested natively.

use glam::Vec2;

use super::vertex::colors;
use crate::sim::camera::to_screen;
use crate::sim::{Block, GamePhase, GameState};

/// A filled, outlined rectangle in screen pixels (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub origin: Vec2,
    pub size: Vec2,
    pub fill: [f32; 4],
    pub border: [f32; 4],
}

impl DrawRect {
    fn from_block(block: &Block, camera_y: f32) -> Self {
        Self {
            origin: Vec2::new(block.x, to_screen(block.y, camera_y)),
            size: Vec2::new(block.width, block.height),
            fill: block.color,
            border: colors::BLOCK_BORDER,
        }
    }
}

/// Build the rectangles for the current frame
///
/// Stacked blocks come first (top of the stack first), skipping anything
/// outside the view, then the in-flight block while it is in play.
pub fn build_frame(state: &GameState) -> Vec<DrawRect> {
    let view_height = state.tuning.canvas_height;
    let mut rects = Vec::with_capacity(state.blocks.len() + 1);

    for block in state.blocks.iter().rev() {
        let y = to_screen(block.y, state.camera_y);
        if y < view_height && y + block.height > 0.0 {
            rects.push(DrawRect::from_block(block, state.camera_y));
        }
    }

    if matches!(state.phase, GamePhase::Swinging | GamePhase::Dropping) {
        if let Some(current) = &state.current {
            rects.push(DrawRect::from_block(&current.block, state.camera_y));
        }
    }

    rects
}
