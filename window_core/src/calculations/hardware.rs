//! # Hardware Compatibility
//!
//! Picks the hardware kits that can carry this window: the kit must list the
//! opening type, and every limit it declares (width, height, weight) must be
//! respected. An absent limit means no constraint.

use crate::catalog::Hardware;
use crate::units::Kilograms;
use crate::window::WindowConfig;

/// `None` bound is unconstrained, otherwise value ≤ bound.
#[inline]
fn within(value: f64, bound: Option<f64>) -> bool {
    bound.map_or(true, |max| value <= max)
}

/// Whether a single hardware record fits the configuration and assembly weight.
pub fn accepts(hardware: &Hardware, config: &WindowConfig, weight: Kilograms) -> bool {
    hardware.supports(config.opening_type)
        && within(config.width_mm, hardware.max_width_mm)
        && within(config.height_mm, hardware.max_height_mm)
        && within(weight.0, hardware.max_weight_kg)
}

/// Filter candidates down to the accepted kits, preserving their order.
pub fn filter_compatible<'a>(
    candidates: &'a [Hardware],
    config: &WindowConfig,
    weight: Kilograms,
) -> Vec<&'a Hardware> {
    candidates
        .iter()
        .filter(|hw| accepts(hw, config, weight))
        .collect()
}
