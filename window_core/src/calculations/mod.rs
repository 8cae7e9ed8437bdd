//! # Window Calculations
//!
//! The configuration-to-quote engine. Each stage lives in its own module and
//! is a pure function:
//!
//! - [`geometry`] - profile lengths per category
//! - [`area`] - net glazing area
//! - [`weight`] - assembled weight
//! - [`hardware`] - hardware compatibility filter
//! - [`bom`] - priced bill of materials
//! - [`pricing`] - labor, margin and final price
//!
//! [`calculate`] is the boundary entry point: it validates the configuration,
//! resolves catalog records through the repository traits, then runs
//! [`evaluate`] in a single synchronous pass. Either a complete
//! [`CalculationResult`] comes back or an error does; never a partial BOM.
//!
//! ## Example
//!
//! ```rust
//! use window_core::calculations::calculate;
//! use window_core::catalog::{sample_catalog, OpeningType};
//! use window_core::settings::EngineSettings;
//! use window_core::window::WindowConfig;
//!
//! let catalog = sample_catalog();
//! let config = WindowConfig::new(1200.0, 1400.0, OpeningType::Casement, "sys-alu-45", "glass-4-12-4");
//!
//! let result = calculate(&config, &catalog, &EngineSettings::default()).expect("calculation should succeed");
//! assert!(result.final_price > result.total_material_cost);
//! assert_eq!(result.margin_percent, 30.0);
//! ```

pub mod area;
pub mod bom;
pub mod geometry;
pub mod hardware;
pub mod pricing;
pub mod weight;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalog::{CatalogRepository, Glass, Hardware, Profile};
use crate::errors::{CalcError, CalcResult, Lookup, Stage};
use crate::settings::EngineSettings;
use crate::window::WindowConfig;

pub use bom::{BillOfMaterials, BomCategory, BomLineItem, BomUnit};
pub use geometry::ProfileLengths;
pub use pricing::Pricing;

/// Catalog records resolved for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    /// Profiles of the chosen system (never empty)
    pub profiles: Vec<Profile>,
    /// The chosen glazing unit
    pub glass: Glass,
    /// Hardware listed for the chosen opening type (may be empty)
    pub hardware: Vec<Hardware>,
}

impl CatalogSnapshot {
    /// Resolve every catalog record the configuration refers to.
    ///
    /// Fails with `NotFound(system)` when the system has no profiles and
    /// `NotFound(glass)` when the glass id is unknown.
    pub fn fetch<R>(config: &WindowConfig, repo: &R) -> CalcResult<Self>
    where
        R: CatalogRepository + ?Sized,
    {
        let profiles = repo.list_by_system(&config.system_id);
        if profiles.is_empty() {
            return Err(CalcError::not_found(Lookup::System, &config.system_id));
        }

        let glass = repo
            .get_glass(&config.glass_id)
            .ok_or_else(|| CalcError::not_found(Lookup::Glass, &config.glass_id))?;

        let hardware = repo.list_by_opening_type(config.opening_type);

        Ok(CatalogSnapshot {
            profiles,
            glass,
            hardware,
        })
    }
}

/// The engine's output for one window.
///
/// ## JSON Example
///
/// ```json
/// {
///   "config": { "width": 600.0, "height": 800.0, "opening_type": "casement", "...": "..." },
///   "bom_items": [ { "item_id": "prof-alu-f45", "item_type": "profile", "...": "..." } ],
///   "total_material_cost": 192.1,
///   "labor_cost": 19.21,
///   "margin_percent": 30.0,
///   "final_price": 274.7,
///   "weight": 24.9,
///   "glass_area": 0.3744
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The configuration this result was computed for
    pub config: WindowConfig,

    /// BOM rows: profiles, then glazing, then hardware
    pub bom_items: Vec<BomLineItem>,

    /// Sum of all BOM row totals
    pub total_material_cost: f64,

    /// Material cost × labor ratio
    pub labor_cost: f64,

    /// Margin applied to material + labor (always the engine setting)
    pub margin_percent: f64,

    /// (material + labor) × (1 + margin/100)
    pub final_price: f64,

    /// Assembled weight (kg)
    #[serde(rename = "weight", alias = "weight_kg")]
    pub weight_kg: f64,

    /// Net glazing area (m²)
    #[serde(rename = "glass_area", alias = "glass_area_m2")]
    pub glass_area_m2: f64,
}

impl CalculationResult {
    /// Recompute the material total from the rows
    pub fn bom_total(&self) -> f64 {
        self.bom_items.iter().map(|item| item.total_cost).sum()
    }

    /// Rows of one category, in BOM order
    pub fn items_in(&self, category: BomCategory) -> impl Iterator<Item = &BomLineItem> {
        self.bom_items.iter().filter(move |item| item.category == category)
    }
}

fn ensure_finite(stage: Stage, what: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::computation_failed(stage, format!("{} is not finite ({})", what, value)))
    }
}

/// Run the pure calculation over already-resolved catalog records.
///
/// The configuration is assumed valid (see [`WindowConfig::validate`]).
pub fn evaluate(
    config: &WindowConfig,
    snapshot: &CatalogSnapshot,
    settings: &EngineSettings,
) -> CalcResult<CalculationResult> {
    let lengths = geometry::profile_lengths(config, settings);
    if !lengths.all_finite() {
        return Err(CalcError::computation_failed(
            Stage::Geometry,
            format!("profile lengths are not finite: {:?}", lengths),
        ));
    }
    debug!(
        frame_mm = lengths.frame_mm,
        sash_mm = lengths.sash_mm,
        mullion_mm = lengths.mullion_mm,
        transom_mm = lengths.transom_mm,
        "profile lengths"
    );

    let area = area::glazing_area(config, settings);
    ensure_finite(Stage::Area, "glazing area", area.0)?;

    let weight = weight::total_weight(&lengths, area, &snapshot.profiles, &snapshot.glass, settings);
    ensure_finite(Stage::Weight, "total weight", weight.0)?;
    debug!(glass_area_m2 = area.0, weight_kg = weight.0, "area and weight");

    let accepted = hardware::filter_compatible(&snapshot.hardware, config, weight);
    if let Some(hw) = accepted.iter().find(|hw| !hw.cost.is_finite()) {
        return Err(CalcError::computation_failed(
            Stage::Hardware,
            format!("hardware '{}' has a non-finite cost", hw.id),
        ));
    }
    debug!(
        candidates = snapshot.hardware.len(),
        accepted = accepted.len(),
        "hardware filtered"
    );

    let bom = bom::assemble(&lengths, &snapshot.profiles, area, &snapshot.glass, &accepted);
    ensure_finite(Stage::Bom, "material cost", bom.total_material_cost)?;

    let pricing = pricing::price(bom.total_material_cost, settings);
    ensure_finite(Stage::Pricing, "final price", pricing.final_price)?;
    debug!(
        rows = bom.len(),
        material = bom.total_material_cost,
        final_price = pricing.final_price,
        "priced"
    );

    Ok(CalculationResult {
        config: config.clone(),
        bom_items: bom.items,
        total_material_cost: bom.total_material_cost,
        labor_cost: pricing.labor_cost,
        margin_percent: pricing.margin_percent,
        final_price: pricing.final_price,
        weight_kg: weight.0,
        glass_area_m2: area.0,
    })
}

/// Validate, resolve catalog records and price one window.
///
/// # Returns
///
/// * `Ok(CalculationResult)` - complete quote
/// * `Err(CalcError::InvalidConfiguration)` / `Err(CalcError::InvalidSettings)` - rejected input
/// * `Err(CalcError::NotFound)` - system or glass lookup failed, nothing computed
/// * `Err(CalcError::ComputationFailed)` - a stage produced an unusable value
#[instrument(
    level = "debug",
    skip_all,
    fields(system = %config.system_id, glass = %config.glass_id, opening = config.opening_type.code())
)]
pub fn calculate<R>(config: &WindowConfig, repo: &R, settings: &EngineSettings) -> CalcResult<CalculationResult>
where
    R: CatalogRepository + ?Sized,
{
    config.validate()?;
    settings.validate()?;

    let snapshot = CatalogSnapshot::fetch(config, repo)?;
    evaluate(config, &snapshot, settings)
}
