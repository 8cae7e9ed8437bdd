//! # Glazing Area
//!
//! Net visible glazing area after the frame coverage is deducted from each
//! dimension. Dimensions smaller than the deduction give zero, never a
//! negative area.

use serde::{Deserialize, Serialize};

use crate::settings::EngineSettings;
use crate::units::SquareMeters;
use crate::window::WindowConfig;

/// Visible pane dimensions (mm), before any per-leaf split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlazingDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Deduct the frame coverage from both dimensions, floored at zero.
pub fn glazing_dimensions(config: &WindowConfig, frame_reduction_mm: f64) -> GlazingDimensions {
    GlazingDimensions {
        width_mm: (config.width_mm - frame_reduction_mm).max(0.0),
        height_mm: (config.height_mm - frame_reduction_mm).max(0.0),
    }
}

/// Net glazing area in m².
pub fn glazing_area(config: &WindowConfig, settings: &EngineSettings) -> SquareMeters {
    let dims = glazing_dimensions(config, settings.frame_reduction_mm);

    if config.leaves > 1 {
        // Known no-op branch: splitting the width per leaf and multiplying the
        // leaf count back in gives the single-leaf area. Kept as-is until a
        // per-leaf deduction (e.g. meeting-stile width) is defined.
        let leaves = f64::from(config.leaves);
        let leaf_width = dims.width_mm / leaves;
        return SquareMeters::from_mm2(leaf_width * dims.height_mm * leaves);
    }

    SquareMeters::from_mm2(dims.width_mm * dims.height_mm)
}
