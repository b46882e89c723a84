//! Camera follow
//!
//! `camera_y` is the world Y at the top of the screen. World Y grows
//! downward, so following the tower up makes it smaller; it never grows.

use crate::tuning::Tuning;

/// Camera offset after a block lands at world `block_y`
///
/// Once the stack holds more than `camera_start_blocks` blocks and the new
/// block would be drawn above the threshold line, the camera moves so the
/// block sits exactly on that line.
pub fn follow(camera_y: f32, block_y: f32, stack_len: usize, tuning: &Tuning) -> f32 {
    let threshold = tuning.camera_threshold_line();
    if block_y - camera_y < threshold && stack_len > tuning.camera_start_blocks {
        block_y - threshold
    } else {
        camera_y
    }
}

/// World-to-screen Y
#[inline]
pub fn to_screen(world_y: f32, camera_y: f32) -> f32 {
    world_y - camera_y
}
