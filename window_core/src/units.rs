//! # Unit Types
//!
//! Type-safe wrappers for the units the quoting engine moves between.
//! They are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Conventions
//!
//! - Input dimensions: millimeters (mm)
//! - BOM quantities: meters (m) for profiles, square meters (m²) for glazing
//! - Weight: kilograms (kg)
//!
//! ## Example
//!
//! ```rust
//! use window_core::units::{Meters, Millimeters, SquareMeters};
//!
//! let frame = Millimeters(7000.0);
//! let frame_m: Meters = frame.into();
//! assert_eq!(frame_m.0, 7.0);
//!
//! let pane = SquareMeters::from_mm2(520.0 * 720.0);
//! assert!((pane.0 - 0.3744).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

const MM_PER_M: f64 = 1_000.0;
const MM2_PER_M2: f64 = 1_000_000.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_M)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * MM_PER_M)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl SquareMeters {
    /// Convert an area given in mm² to m²
    pub fn from_mm2(mm2: f64) -> Self {
        SquareMeters(mm2 / MM2_PER_M2)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl Add for Kilograms {
    type Output = Kilograms;
    fn add(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Kilograms {
    fn sum<I: Iterator<Item = Kilograms>>(iter: I) -> Self {
        iter.fold(Kilograms(0.0), Add::add)
    }
}

/// Linear mass (kg/m) times length gives mass.
impl Mul<f64> for Meters {
    type Output = f64;
    fn mul(self, rhs: f64) -> f64 {
        self.0 * rhs
    }
}

impl std::fmt::Display for Meters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} m", self.0)
    }
}

impl std::fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} m²", self.0)
    }
}

impl std::fmt::Display for Kilograms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kg", self.0)
    }
}
