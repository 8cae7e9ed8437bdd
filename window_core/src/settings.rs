//! # Engine Settings
//!
//! The fixed ratios the pricing engine has always used, exposed as named
//! values so they can be overridden without touching the formulas. The
//! defaults reproduce the established quotes exactly.
//!
//! ## JSON Example
//!
//! Every field is optional in an override file; missing fields keep their
//! default.
//!
//! ```json
//! {
//!   "labor_ratio": 0.12,
//!   "margin_percent": 25.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default sash inset factor for single-leaf, non-sliding windows
pub const DEFAULT_SASH_INSET_FACTOR: f64 = 0.9;
/// Default glazing weight factor (kg per m² per mm of declared thickness)
pub const DEFAULT_GLASS_WEIGHT_FACTOR: f64 = 2.5;
/// Default total frame deduction per dimension (40 mm each side)
pub const DEFAULT_FRAME_REDUCTION_MM: f64 = 80.0;
/// Default labor share of material cost
pub const DEFAULT_LABOR_RATIO: f64 = 0.10;
/// Default margin applied on top of material + labor
pub const DEFAULT_MARGIN_PERCENT: f64 = 30.0;

/// Tunable constants of the calculation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Multiplier on the frame perimeter for a single operable sash
    pub sash_inset_factor: f64,

    /// kg per m² per mm of glazing thickness.
    ///
    /// An approximation constant, not a density model.
    pub glass_weight_factor: f64,

    /// Frame coverage subtracted from width and height to get the visible pane (mm)
    pub frame_reduction_mm: f64,

    /// Labor cost as a fraction of material cost
    pub labor_ratio: f64,

    /// Margin percentage applied to material + labor
    pub margin_percent: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            sash_inset_factor: DEFAULT_SASH_INSET_FACTOR,
            glass_weight_factor: DEFAULT_GLASS_WEIGHT_FACTOR,
            frame_reduction_mm: DEFAULT_FRAME_REDUCTION_MM,
            labor_ratio: DEFAULT_LABOR_RATIO,
            margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }
}

impl EngineSettings {
    /// Validate override values.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.sash_inset_factor > 0.0 && self.sash_inset_factor <= 1.0) {
            return Err(CalcError::invalid_settings(
                "sash_inset_factor",
                self.sash_inset_factor.to_string(),
                "Sash inset factor must be in (0, 1]",
            ));
        }
        let non_negative = [
            ("glass_weight_factor", self.glass_weight_factor),
            ("frame_reduction_mm", self.frame_reduction_mm),
            ("labor_ratio", self.labor_ratio),
            ("margin_percent", self.margin_percent),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_settings(
                    field,
                    value.to_string(),
                    "Must be a finite, non-negative number",
                ));
            }
        }
        Ok(())
    }
}
