//! # Weight Estimate
//!
//! Assembled weight = Σ (profile length in m × kg/m) + glazing weight.
//!
//! Glazing weight is `area (m²) × declared thickness (mm) × factor`, with the
//! factor defaulting to 2.5 kg/m²/mm. The declared thickness of an insulated
//! unit includes its gas gap, so this is an approximation rather than a
//! density model.

use crate::catalog::{Glass, Profile};
use crate::settings::EngineSettings;
use crate::units::{Kilograms, Meters, Millimeters, SquareMeters};

use super::geometry::ProfileLengths;

/// Weight of the profiles whose category has a positive required length.
pub fn profile_weight(lengths: &ProfileLengths, profiles: &[Profile]) -> Kilograms {
    profiles
        .iter()
        .filter_map(|profile| {
            let length_mm = lengths.length_for(profile.category);
            (length_mm > 0.0).then(|| {
                let length = Meters::from(Millimeters(length_mm));
                Kilograms(length * profile.weight_per_meter)
            })
        })
        .sum()
}

/// Weight of the glazing unit.
pub fn glazing_weight(area: SquareMeters, glass: &Glass, glass_weight_factor: f64) -> Kilograms {
    Kilograms(area.0 * glass.thickness_mm * glass_weight_factor)
}

/// Total assembled weight.
pub fn total_weight(
    lengths: &ProfileLengths,
    area: SquareMeters,
    profiles: &[Profile],
    glass: &Glass,
    settings: &EngineSettings,
) -> Kilograms {
    profile_weight(lengths, profiles) + glazing_weight(area, glass, settings.glass_weight_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, GlassRepository, ProfileRepository};

    fn lengths() -> ProfileLengths {
        ProfileLengths {
            frame_mm: 2800.0,
            sash_mm: 2520.0,
            mullion_mm: 0.0,
            transom_mm: 0.0,
        }
    }

    #[test]
    fn test_profile_weight_skips_zero_lengths() {
        let catalog = sample_catalog();
        let profiles = catalog.list_by_system("sys-alu-45");
        // frame 2.8 m × 1.2 + sash 2.52 m × 0.9; mullion has no length
        let weight = profile_weight(&lengths(), &profiles);
        assert!((weight.0 - (2.8 * 1.2 + 2.52 * 0.9)).abs() < 1e-9);
    }

    #[test]
    fn test_glazing_weight() {
        let catalog = sample_catalog();
        let glass = catalog.get_glass("glass-4-12-4").unwrap();
        let weight = glazing_weight(SquareMeters(0.3744), &glass, 2.5);
        assert!((weight.0 - 0.3744 * 20.0 * 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_weight_is_sum() {
        let catalog = sample_catalog();
        let profiles = catalog.list_by_system("sys-upvc-70");
        let glass = catalog.get_glass("glass-triple").unwrap();
        let settings = EngineSettings::default();
        let area = SquareMeters(1.2);

        let total = total_weight(&lengths(), area, &profiles, &glass, &settings);
        let expected = profile_weight(&lengths(), &profiles).0 + 1.2 * 32.0 * 2.5;
        assert!((total.0 - expected).abs() < 1e-9);
        assert!(total.0 > 0.0);
    }

    #[test]
    fn test_no_glazing_area_means_profiles_only() {
        let catalog = sample_catalog();
        let profiles = catalog.list_by_system("sys-wood-68");
        let glass = catalog.get_glass("glass-4-16-4").unwrap();
        let settings = EngineSettings::default();

        let total = total_weight(&lengths(), SquareMeters(0.0), &profiles, &glass, &settings);
        assert_eq!(total, profile_weight(&lengths(), &profiles));
    }
}
