//! # Profile Geometry
//!
//! Linear length of each profile category needed for one window.
//!
//! ## Formulas
//!
//! ```text
//! frame    = 2(W + H)
//! sash     = n · 2(W/n + H)         sliding, or any type with n > 1
//!          = 2(W + H) · k           single non-sliding leaf (k = sash inset factor)
//! mullion  = mullions · H
//! transom  = transoms · W
//! ```
//!
//! All lengths are in millimeters and unrounded.

use serde::{Deserialize, Serialize};

use crate::catalog::{OpeningType, ProfileCategory};
use crate::settings::EngineSettings;
use crate::window::WindowConfig;

/// Required length per profile category (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileLengths {
    pub frame_mm: f64,
    pub sash_mm: f64,
    pub mullion_mm: f64,
    pub transom_mm: f64,
}

impl ProfileLengths {
    /// Length required for a category.
    pub fn length_for(&self, category: ProfileCategory) -> f64 {
        match category {
            ProfileCategory::Frame => self.frame_mm,
            ProfileCategory::Sash => self.sash_mm,
            ProfileCategory::Mullion => self.mullion_mm,
            ProfileCategory::Transom => self.transom_mm,
        }
    }

    /// Iterate all categories with their lengths
    pub fn iter(&self) -> impl Iterator<Item = (ProfileCategory, f64)> + '_ {
        ProfileCategory::ALL.into_iter().map(move |c| (c, self.length_for(c)))
    }

    pub fn all_finite(&self) -> bool {
        self.iter().all(|(_, len)| len.is_finite())
    }
}

/// Frame perimeter: 2(W + H)
#[inline]
pub fn frame_length(width_mm: f64, height_mm: f64) -> f64 {
    2.0 * (width_mm + height_mm)
}

/// Sash perimeter of one leaf when the width is split evenly: 2(W/n + H)
#[inline]
pub fn leaf_sash_perimeter(width_mm: f64, height_mm: f64, leaves: u32) -> f64 {
    2.0 * (width_mm / f64::from(leaves) + height_mm)
}

/// Sash length for the configured opening type and leaf count.
///
/// Leaves must be ≥ 1 (guaranteed by [`WindowConfig::validate`]).
pub fn sash_length(config: &WindowConfig, sash_inset_factor: f64) -> f64 {
    let width = config.width_mm;
    let height = config.height_mm;
    let leaves = f64::from(config.leaves);

    let per_leaf = || leaves * leaf_sash_perimeter(width, height, config.leaves);

    match config.opening_type {
        OpeningType::Sliding => per_leaf(),
        OpeningType::Casement | OpeningType::Awning | OpeningType::TurnTilt | OpeningType::Folding => {
            if config.leaves == 1 {
                frame_length(width, height) * sash_inset_factor
            } else {
                per_leaf()
            }
        }
    }
}

/// Compute the required length of every profile category.
pub fn profile_lengths(config: &WindowConfig, settings: &EngineSettings) -> ProfileLengths {
    ProfileLengths {
        frame_mm: frame_length(config.width_mm, config.height_mm),
        sash_mm: sash_length(config, settings.sash_inset_factor),
        mullion_mm: f64::from(config.mullions) * config.height_mm,
        transom_mm: f64::from(config.transoms) * config.width_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: f64, height: f64, opening: OpeningType, leaves: u32) -> WindowConfig {
        WindowConfig::new(width, height, opening, "sys", "glass").with_leaves(leaves)
    }

    #[test]
    fn test_sliding_two_leaves() {
        let lengths = profile_lengths(&config(2000.0, 1500.0, OpeningType::Sliding, 2), &EngineSettings::default());
        assert!((lengths.frame_mm - 7000.0).abs() < 1e-9);
        // each leaf: 2(1000 + 1500) = 5000, two leaves = 2(W + nH) = 10000
        assert!((leaf_sash_perimeter(2000.0, 1500.0, 2) - 5000.0).abs() < 1e-9);
        assert!((lengths.sash_mm - 10000.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_casement_applies_inset() {
        let lengths = profile_lengths(&config(600.0, 800.0, OpeningType::Casement, 1), &EngineSettings::default());
        assert!((lengths.frame_mm - 2800.0).abs() < 1e-9);
        assert!((lengths.sash_mm - 2520.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_leaf_sliding_has_no_inset() {
        let lengths = profile_lengths(&config(600.0, 800.0, OpeningType::Sliding, 1), &EngineSettings::default());
        assert!((lengths.sash_mm - 2800.0).abs() < 1e-9);
    }

    #[test]
    fn test_multi_leaf_non_sliding_uses_per_leaf_formula() {
        for opening in [OpeningType::Casement, OpeningType::Awning, OpeningType::TurnTilt, OpeningType::Folding] {
            let lengths = profile_lengths(&config(1800.0, 1200.0, opening, 3), &EngineSettings::default());
            // 2(W + nH) = 2(1800 + 3600)
            assert!((lengths.sash_mm - 10800.0).abs() < 1e-9, "{:?}", opening);
        }
    }

    #[test]
    fn test_dividers() {
        let cfg = config(1500.0, 1200.0, OpeningType::Casement, 1).with_mullions(2).with_transoms(1);
        let lengths = profile_lengths(&cfg, &EngineSettings::default());
        assert_eq!(lengths.mullion_mm, 2400.0);
        assert_eq!(lengths.transom_mm, 1500.0);
        assert_eq!(lengths.length_for(ProfileCategory::Mullion), 2400.0);
    }

    #[test]
    fn test_no_dividers_gives_zero_length() {
        let lengths = profile_lengths(&config(1000.0, 1000.0, OpeningType::Awning, 1), &EngineSettings::default());
        assert_eq!(lengths.mullion_mm, 0.0);
        assert_eq!(lengths.transom_mm, 0.0);
    }

    #[test]
    fn test_custom_inset_factor() {
        let settings = EngineSettings {
            sash_inset_factor: 0.8,
            ..EngineSettings::default()
        };
        let lengths = profile_lengths(&config(600.0, 800.0, OpeningType::TurnTilt, 1), &settings);
        assert!((lengths.sash_mm - 2240.0).abs() < 1e-9);
    }
}
