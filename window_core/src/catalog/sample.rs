//! Sample catalog
//!
//! Seed data for demos and tests: three profile systems (aluminum, uPVC,
//! timber), their profiles, six universal hardware kits and five glazing
//! units. Ids are stable strings so CLI users and fixtures can refer to them.

use once_cell::sync::Lazy;

use super::{Catalog, Glass, Hardware, MaterialSystem, MaterialType, OpeningType, Profile, ProfileCategory};

/// Shared, lazily built copy of [`sample_catalog`].
pub static SAMPLE_CATALOG: Lazy<Catalog> = Lazy::new(sample_catalog);

const STOCK_BAR_MM: f64 = 6000.0;

fn system(id: &str, name: &str, material_type: MaterialType, openings: &[OpeningType], description: &str) -> MaterialSystem {
    MaterialSystem {
        id: id.to_string(),
        name: name.to_string(),
        material_type,
        compatible_openings: openings.to_vec(),
        description: Some(description.to_string()),
    }
}

fn profile(
    id: &str,
    system_id: &str,
    code: &str,
    category: ProfileCategory,
    weight_per_meter: f64,
    cost_per_meter: f64,
    description: &str,
) -> Profile {
    Profile {
        id: id.to_string(),
        system_id: system_id.to_string(),
        code: code.to_string(),
        category,
        bar_length_mm: STOCK_BAR_MM,
        weight_per_meter,
        cost_per_meter,
        description: Some(description.to_string()),
    }
}

fn kit(
    id: &str,
    name: &str,
    hardware_type: &str,
    cost: f64,
    openings: &[OpeningType],
    limits: Option<(f64, f64, f64)>,
) -> Hardware {
    let (max_weight_kg, max_width_mm, max_height_mm) = match limits {
        Some((weight, width, height)) => (Some(weight), Some(width), Some(height)),
        None => (None, None, None),
    };
    Hardware {
        id: id.to_string(),
        system: "universal".to_string(),
        name: name.to_string(),
        hardware_type: hardware_type.to_string(),
        cost,
        compatible_openings: openings.to_vec(),
        max_weight_kg,
        max_width_mm,
        max_height_mm,
    }
}

fn glass(id: &str, description: &str, thickness_mm: f64, glass_type: &str, u_value: f64, cost_per_m2: f64) -> Glass {
    Glass {
        id: id.to_string(),
        description: description.to_string(),
        thickness_mm,
        glass_type: glass_type.to_string(),
        u_value,
        cost_per_m2,
    }
}

/// Build the sample catalog.
pub fn sample_catalog() -> Catalog {
    use OpeningType::*;
    use ProfileCategory::*;

    Catalog {
        systems: vec![
            system(
                "sys-alu-45",
                "Alu Series 45",
                MaterialType::Aluminum,
                &[Casement, Awning, TurnTilt],
                "45mm aluminum system for residential use",
            ),
            system(
                "sys-upvc-70",
                "uPVC Series 70",
                MaterialType::Upvc,
                &[Casement, TurnTilt, Sliding],
                "70mm multi-chamber uPVC system",
            ),
            system(
                "sys-wood-68",
                "Euro68 Timber",
                MaterialType::Wood,
                &[Casement, Awning, TurnTilt],
                "68mm European timber system",
            ),
        ],
        profiles: vec![
            profile("prof-alu-f45", "sys-alu-45", "ALU-F45", Frame, 1.2, 15.50, "Aluminum frame 45mm"),
            profile("prof-alu-s45", "sys-alu-45", "ALU-S45", Sash, 0.9, 12.30, "Aluminum sash 45mm"),
            profile("prof-alu-m45", "sys-alu-45", "ALU-M45", Mullion, 1.0, 13.80, "Aluminum mullion 45mm"),
            profile("prof-pvc-f70", "sys-upvc-70", "PVC-F70", Frame, 2.1, 18.90, "uPVC frame 70mm"),
            profile("prof-pvc-s70", "sys-upvc-70", "PVC-S70", Sash, 1.8, 16.70, "uPVC sash 70mm"),
            profile("prof-wood-f68", "sys-wood-68", "WOOD-F68", Frame, 2.8, 35.50, "Timber frame 68mm"),
            profile("prof-wood-s68", "sys-wood-68", "WOOD-S68", Sash, 2.5, 32.80, "Timber sash 68mm"),
        ],
        hardware: vec![
            kit("hw-casement-kit", "Standard Casement Kit", "casement_kit", 45.80, &[Casement], Some((80.0, 1200.0, 1500.0))),
            kit("hw-awning-kit", "Awning Kit", "awning_kit", 38.50, &[Awning], Some((60.0, 1000.0, 800.0))),
            kit("hw-turn-tilt-kit", "Turn-Tilt Kit", "turn_tilt_kit", 125.90, &[TurnTilt], Some((100.0, 1400.0, 1800.0))),
            kit("hw-sliding-kit", "Sliding Kit", "sliding_kit", 67.30, &[Sliding], Some((120.0, 2500.0, 2200.0))),
            kit("hw-handle", "Standard Handle", "handle", 18.90, &OpeningType::ALL, None),
            kit("hw-multipoint-lock", "Multipoint Lock", "lock", 89.50, &[Casement, TurnTilt], None),
        ],
        glass: vec![
            glass("glass-4-12-4", "4-12-4 Double Glazing", 20.0, "double", 2.8, 28.50),
            glass("glass-4-16-4", "4-16-4 Double Glazing", 24.0, "double", 2.6, 32.80),
            glass("glass-6-12-6", "6-12-6 Double Glazing", 24.0, "double", 2.7, 35.90),
            glass("glass-3-3-laminated", "3+3 Laminated", 6.0, "laminated", 5.8, 42.30),
            glass("glass-triple", "Triple 4-12-4-12-4", 32.0, "triple", 1.8, 48.70),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GlassRepository, SystemRepository};

    #[test]
    fn test_sample_counts() {
        let catalog = sample_catalog();
        assert_eq!(catalog.systems.len(), 3);
        assert_eq!(catalog.profiles.len(), 7);
        assert_eq!(catalog.hardware.len(), 6);
        assert_eq!(catalog.glass.len(), 5);
    }

    #[test]
    fn test_every_profile_belongs_to_a_system() {
        let catalog = sample_catalog();
        for profile in &catalog.profiles {
            assert!(catalog.get_system(&profile.system_id).is_some(), "{}", profile.code);
        }
    }

    #[test]
    fn test_shared_instance_matches_builder() {
        assert_eq!(*SAMPLE_CATALOG, sample_catalog());
        assert_eq!(SAMPLE_CATALOG.get_glass("glass-4-12-4").unwrap().thickness_mm, 20.0);
    }
}
