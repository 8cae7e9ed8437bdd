//! # Window Configuration
//!
//! The calculation input: overall size, opening mechanism, chosen profile
//! system and glazing, and the layout counts.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "width": 1200.0,
//!   "height": 1400.0,
//!   "opening_type": "casement",
//!   "system_id": "sys-alu-45",
//!   "glass_id": "glass-4-12-4",
//!   "leaves": 1,
//!   "mullions": 0,
//!   "transoms": 0
//! }
//! ```
//!
//! `leaves`, `mullions` and `transoms` may be omitted and default to 1, 0, 0.
//! `width_mm` and `height_mm` are accepted as aliases of the dimension keys.

use serde::{Deserialize, Serialize};

use crate::catalog::OpeningType;
use crate::errors::{CalcError, CalcResult};

fn default_leaves() -> u32 {
    1
}

/// Input parameters for one window or door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Overall outside width (mm)
    #[serde(rename = "width", alias = "width_mm")]
    pub width_mm: f64,

    /// Overall outside height (mm)
    #[serde(rename = "height", alias = "height_mm")]
    pub height_mm: f64,

    pub opening_type: OpeningType,

    /// Material system whose profiles are used
    pub system_id: String,

    /// Glazing unit
    pub glass_id: String,

    /// Number of leaves (≥ 1)
    #[serde(default = "default_leaves")]
    pub leaves: u32,

    /// Number of vertical dividers
    #[serde(default)]
    pub mullions: u32,

    /// Number of horizontal dividers
    #[serde(default)]
    pub transoms: u32,
}

impl WindowConfig {
    /// Create a single-leaf configuration with no dividers.
    pub fn new(
        width_mm: f64,
        height_mm: f64,
        opening_type: OpeningType,
        system_id: impl Into<String>,
        glass_id: impl Into<String>,
    ) -> Self {
        WindowConfig {
            width_mm,
            height_mm,
            opening_type,
            system_id: system_id.into(),
            glass_id: glass_id.into(),
            leaves: 1,
            mullions: 0,
            transoms: 0,
        }
    }

    pub fn with_leaves(mut self, leaves: u32) -> Self {
        self.leaves = leaves;
        self
    }

    pub fn with_mullions(mut self, mullions: u32) -> Self {
        self.mullions = mullions;
        self
    }

    pub fn with_transoms(mut self, transoms: u32) -> Self {
        self.transoms = transoms;
        self
    }

    /// Validate input parameters.
    ///
    /// This is the boundary check; the engine stages assume it has passed.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.width_mm.is_finite() || self.width_mm <= 0.0 {
            return Err(CalcError::invalid_configuration(
                "width",
                self.width_mm.to_string(),
                "Width must be a positive number",
            ));
        }
        if !self.height_mm.is_finite() || self.height_mm <= 0.0 {
            return Err(CalcError::invalid_configuration(
                "height",
                self.height_mm.to_string(),
                "Height must be a positive number",
            ));
        }
        if self.leaves == 0 {
            return Err(CalcError::invalid_configuration(
                "leaves",
                "0",
                "A window needs at least one leaf",
            ));
        }
        if self.system_id.trim().is_empty() {
            return Err(CalcError::invalid_configuration(
                "system_id",
                self.system_id.clone(),
                "System id must not be empty",
            ));
        }
        if self.glass_id.trim().is_empty() {
            return Err(CalcError::invalid_configuration(
                "glass_id",
                self.glass_id.clone(),
                "Glass id must not be empty",
            ));
        }
        Ok(())
    }
}
