//! Game balance and layout parameters
//!
//! Defaults come from `consts`. A partial JSON document overrides individual
//! fields; everything missing keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be between 0 and 1 (got {value})")]
    RatioOutOfRange { field: &'static str, value: f32 },
}

/// Data-driven tuning for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub block_height: f32,
    pub base_width_ratio: f32,
    pub spawn_gap: f32,
    pub min_spawn_offset: f32,
    pub swing_speed_start: f32,
    pub swing_speed_increase: f32,
    pub drop_speed: f32,
    pub camera_threshold_ratio: f32,
    pub camera_start_blocks: usize,
    pub hue_start: f32,
    pub hue_increment: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            block_height: BLOCK_HEIGHT,
            base_width_ratio: BASE_BLOCK_WIDTH_RATIO,
            spawn_gap: BLOCK_SPAWN_GAP,
            min_spawn_offset: MIN_SPAWN_Y_OFFSET,
            swing_speed_start: SWING_SPEED_START,
            swing_speed_increase: SWING_SPEED_INCREASE,
            drop_speed: DROP_SPEED,
            camera_threshold_ratio: CAMERA_FOLLOW_THRESHOLD_RATIO,
            camera_start_blocks: CAMERA_START_THRESHOLD_BLOCKS,
            hue_start: HUE_START,
            hue_increment: HUE_INCREMENT,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "preciseStackerTuning";

    /// Parse and validate a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("block_height", self.block_height),
            ("swing_speed_start", self.swing_speed_start),
            ("drop_speed", self.drop_speed),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also catches NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("swing_speed_increase", self.swing_speed_increase),
            ("spawn_gap", self.spawn_gap),
            ("min_spawn_offset", self.min_spawn_offset),
            ("hue_increment", self.hue_increment),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        let ratios = [
            ("base_width_ratio", self.base_width_ratio),
            ("camera_threshold_ratio", self.camera_threshold_ratio),
        ];
        for (field, value) in ratios {
            if !(value > 0.0 && value < 1.0) {
                return Err(TuningError::RatioOutOfRange { field, value });
            }
        }

        Ok(())
    }

    /// Width of the base block
    pub fn base_width(&self) -> f32 {
        self.canvas_width * self.base_width_ratio
    }

    /// Screen-space Y of the camera follow line
    ///
    /// `height - height * ratio` rather than `height * (1 - ratio)`: the
    /// latter is off by an ulp for the default 600 * 0.6.
    pub fn camera_threshold_line(&self) -> f32 {
        self.canvas_height - self.canvas_height * self.camera_threshold_ratio
    }

    /// Swing speed after `score` successful placements
    pub fn swing_speed_for(&self, score: u32) -> f32 {
        self.swing_speed_start + score as f32 * self.swing_speed_increase
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
