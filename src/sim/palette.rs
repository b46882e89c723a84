//! Block color cycling
//!
//! Each spawned block takes the next hue around the color wheel.

use serde::{Deserialize, Serialize};

use crate::consts::{HSL_LIGHTNESS, HSL_SATURATION};

/// Base block gray (#888)
pub const BASE_BLOCK_COLOR: [f32; 4] = [0.533, 0.533, 0.533, 1.0];

/// Hue cycle state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueCycle {
    /// Last hue handed out (degrees)
    pub hue: f32,
    pub increment: f32,
}

impl HueCycle {
    pub fn new(start: f32, increment: f32) -> Self {
        Self {
            hue: start,
            increment,
        }
    }

    /// Advance the hue and return the color for the next block
    pub fn next_color(&mut self) -> [f32; 4] {
        self.hue = (self.hue + self.increment).rem_euclid(360.0);
        hsl_to_rgba(self.hue, HSL_SATURATION, HSL_LIGHTNESS)
    }
}

/// Convert HSL (hue in degrees, s/l in 0-1) to opaque RGBA
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn assert_rgb(actual: [f32; 4], expected: [f32; 3]) {
        for i in 0..3 {
            assert!(
                approx_eq(actual[i], expected[i]),
                "channel {i}: {actual:?} vs {expected:?}"
            );
        }
        assert_eq!(actual[3], 1.0);
    }

    #[test]
    fn test_primary_hues() {
        assert_rgb(hsl_to_rgba(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
        assert_rgb(hsl_to_rgba(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
        assert_rgb(hsl_to_rgba(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
        assert_rgb(hsl_to_rgba(360.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_game_saturation_lightness() {
        // hsl(180, 70%, 60%) = rgb(82, 224, 224)
        assert_rgb(
            hsl_to_rgba(180.0, HSL_SATURATION, HSL_LIGHTNESS),
            [0.32, 0.88, 0.88],
        );
    }

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = HueCycle::new(180.0, 15.0);
        cycle.next_color();
        assert_eq!(cycle.hue, 195.0);

        let mut cycle = HueCycle::new(350.0, 15.0);
        cycle.next_color();
        assert_eq!(cycle.hue, 5.0);
    }
}
