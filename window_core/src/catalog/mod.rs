//! # Catalog
//!
//! Read-only catalog data the engine prices against: material systems,
//! their profiles, hardware kits and glazing units. The engine never talks
//! to storage directly; it goes through the repository traits below, so any
//! backend (database, HTTP service, JSON file, in-memory fixture) can feed it.
//!
//! ## Example
//!
//! ```rust
//! use window_core::catalog::{sample_catalog, OpeningType, ProfileRepository, HardwareRepository};
//!
//! let catalog = sample_catalog();
//! let profiles = catalog.list_by_system("sys-alu-45");
//! assert_eq!(profiles.len(), 3);
//!
//! let kits = catalog.list_by_opening_type(OpeningType::Sliding);
//! assert!(kits.iter().all(|hw| hw.supports(OpeningType::Sliding)));
//! ```

pub mod sample;

pub use sample::{sample_catalog, SAMPLE_CATALOG};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Enumerations
// ============================================================================

/// Base material of a profile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    Aluminum,
    Upvc,
    Wood,
    Steel,
}

impl MaterialType {
    /// All material types for UI selection
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Aluminum,
        MaterialType::Upvc,
        MaterialType::Wood,
        MaterialType::Steel,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialType::Aluminum => "Aluminum",
            MaterialType::Upvc => "uPVC",
            MaterialType::Wood => "Wood",
            MaterialType::Steel => "Steel",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "aluminum" | "aluminium" | "alu" => Ok(MaterialType::Aluminum),
            "upvc" | "pvc" | "u-pvc" => Ok(MaterialType::Upvc),
            "wood" | "timber" => Ok(MaterialType::Wood),
            "steel" => Ok(MaterialType::Steel),
            _ => Err(CalcError::invalid_configuration(
                "material_type",
                s,
                "Expected one of: aluminum, upvc, wood, steel",
            )),
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Mechanism by which a window or door leaf opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    /// Side-hinged
    Casement,
    /// Top-hinged, opens outward
    Awning,
    /// Side-hinged and bottom-tilting
    TurnTilt,
    /// Leaves slide past each other on tracks
    Sliding,
    /// Bi-fold leaves
    Folding,
}

impl OpeningType {
    /// All opening types for UI selection
    pub const ALL: [OpeningType; 5] = [
        OpeningType::Casement,
        OpeningType::Awning,
        OpeningType::TurnTilt,
        OpeningType::Sliding,
        OpeningType::Folding,
    ];

    /// Get the wire code (matches the JSON representation)
    pub fn code(&self) -> &'static str {
        match self {
            OpeningType::Casement => "casement",
            OpeningType::Awning => "awning",
            OpeningType::TurnTilt => "turn_tilt",
            OpeningType::Sliding => "sliding",
            OpeningType::Folding => "folding",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            OpeningType::Casement => "Casement",
            OpeningType::Awning => "Awning",
            OpeningType::TurnTilt => "Turn-Tilt",
            OpeningType::Sliding => "Sliding",
            OpeningType::Folding => "Folding",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "casement" => Ok(OpeningType::Casement),
            "awning" => Ok(OpeningType::Awning),
            "turn_tilt" | "turntilt" | "tilt_turn" => Ok(OpeningType::TurnTilt),
            "sliding" | "slider" => Ok(OpeningType::Sliding),
            "folding" | "bifold" | "bi_fold" => Ok(OpeningType::Folding),
            _ => Err(CalcError::invalid_configuration(
                "opening_type",
                s,
                "Expected one of: casement, awning, turn_tilt, sliding, folding",
            )),
        }
    }
}

impl std::fmt::Display for OpeningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Role of an extruded profile within the assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileCategory {
    /// Outer fixed frame
    Frame,
    /// Operable leaf frame
    Sash,
    /// Vertical divider
    Mullion,
    /// Horizontal divider
    Transom,
}

impl ProfileCategory {
    pub const ALL: [ProfileCategory; 4] = [
        ProfileCategory::Frame,
        ProfileCategory::Sash,
        ProfileCategory::Mullion,
        ProfileCategory::Transom,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileCategory::Frame => "Frame",
            ProfileCategory::Sash => "Sash",
            ProfileCategory::Mullion => "Mullion",
            ProfileCategory::Transom => "Transom",
        }
    }
}

impl std::fmt::Display for ProfileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A vendor product line defining compatible profiles and opening types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSystem {
    pub id: String,
    pub name: String,
    pub material_type: MaterialType,
    pub compatible_openings: Vec<OpeningType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MaterialSystem {
    /// Whether this system is marketed for the given opening type
    pub fn supports(&self, opening: OpeningType) -> bool {
        self.compatible_openings.contains(&opening)
    }
}

/// An extruded bar sold by linear length.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "prof-alu-f45",
///   "system_id": "sys-alu-45",
///   "code": "ALU-F45",
///   "category": "frame",
///   "bar_length_mm": 6000.0,
///   "weight_per_meter": 1.2,
///   "cost_per_meter": 15.5,
///   "description": "Aluminum frame 45mm"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Owning material system
    pub system_id: String,
    /// Vendor article code
    pub code: String,
    pub category: ProfileCategory,
    /// Stock bar length (mm)
    pub bar_length_mm: f64,
    /// Linear mass (kg/m)
    pub weight_per_meter: f64,
    /// Price per linear meter
    pub cost_per_meter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Profile {
    /// Text used for the BOM row: "description - code", or the code alone
    pub fn bom_description(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} - {}", desc, self.code),
            None => self.code.clone(),
        }
    }
}

/// A hardware kit (hinges, handles, locks, rollers).
///
/// Hardware is not tied to a profile system. Each optional bound that is
/// absent leaves that dimension unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hardware {
    pub id: String,
    /// Vendor family, e.g. "universal"
    pub system: String,
    pub name: String,
    /// Free-form kind: hinge, handle, lock, casement_kit, ...
    pub hardware_type: String,
    /// Price per piece
    pub cost: f64,
    pub compatible_openings: Vec<OpeningType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height_mm: Option<f64>,
}

impl Hardware {
    pub fn supports(&self, opening: OpeningType) -> bool {
        self.compatible_openings.contains(&opening)
    }
}

/// A glazing unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glass {
    pub id: String,
    pub description: String,
    /// Declared system thickness including any internal gap (a 4-12-4 unit is 20 mm)
    pub thickness_mm: f64,
    /// double, triple, laminated, ...
    pub glass_type: String,
    /// Thermal transmittance (W/m²K)
    pub u_value: f64,
    pub cost_per_m2: f64,
}

// ============================================================================
// Repository interfaces
// ============================================================================

/// Material system lookup.
pub trait SystemRepository {
    fn get_system(&self, system_id: &str) -> Option<MaterialSystem>;
}

/// Profile lookup. An empty list means the system is unknown.
pub trait ProfileRepository {
    fn list_by_system(&self, system_id: &str) -> Vec<Profile>;
}

/// Glass lookup.
pub trait GlassRepository {
    fn get_glass(&self, glass_id: &str) -> Option<Glass>;
}

/// Hardware lookup. An empty list is valid and yields no hardware rows.
pub trait HardwareRepository {
    fn list_by_opening_type(&self, opening: OpeningType) -> Vec<Hardware>;
}

/// Everything the engine needs to price a window.
pub trait CatalogRepository: ProfileRepository + GlassRepository + HardwareRepository {}

impl<T: ProfileRepository + GlassRepository + HardwareRepository> CatalogRepository for T {}

// ============================================================================
// In-memory catalog
// ============================================================================

/// Serializable in-memory catalog implementing every repository trait.
///
/// Lookups return records in insertion order, which is also the order
/// profile and hardware rows appear in the BOM.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub systems: Vec<MaterialSystem>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub hardware: Vec<Hardware>,
    #[serde(default)]
    pub glass: Vec<Glass>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn with_system(mut self, system: MaterialSystem) -> Self {
        self.systems.push(system);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn with_hardware(mut self, hardware: Hardware) -> Self {
        self.hardware.push(hardware);
        self
    }

    pub fn with_glass(mut self, glass: Glass) -> Self {
        self.glass.push(glass);
        self
    }
}

impl SystemRepository for Catalog {
    fn get_system(&self, system_id: &str) -> Option<MaterialSystem> {
        self.systems.iter().find(|s| s.id == system_id).cloned()
    }
}

impl ProfileRepository for Catalog {
    fn list_by_system(&self, system_id: &str) -> Vec<Profile> {
        self.profiles
            .iter()
            .filter(|p| p.system_id == system_id)
            .cloned()
            .collect()
    }
}

impl GlassRepository for Catalog {
    fn get_glass(&self, glass_id: &str) -> Option<Glass> {
        self.glass.iter().find(|g| g.id == glass_id).cloned()
    }
}

impl HardwareRepository for Catalog {
    fn list_by_opening_type(&self, opening: OpeningType) -> Vec<Hardware> {
        self.hardware
            .iter()
            .filter(|hw| hw.supports(opening))
            .cloned()
            .collect()
    }
}
