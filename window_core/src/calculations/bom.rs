//! # Bill of Materials
//!
//! Priced line items for one window, emitted in a fixed order:
//!
//! 1. one row per profile whose category has a positive required length (m)
//! 2. exactly one glazing row (m²)
//! 3. one row per accepted hardware kit (piece)
//!
//! The material total is accumulated in that same order, so it always equals
//! the sum of the emitted row totals.

use serde::{Deserialize, Serialize};

use crate::catalog::{Glass, Hardware, Profile};
use crate::units::{Meters, Millimeters, SquareMeters};

use super::geometry::ProfileLengths;

/// What kind of catalog record a BOM row prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BomCategory {
    Profile,
    Glass,
    Hardware,
}

/// Quantity unit of a BOM row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BomUnit {
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "m²")]
    SquareMeter,
    #[serde(rename = "piece")]
    Piece,
}

impl BomUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            BomUnit::Meter => "m",
            BomUnit::SquareMeter => "m²",
            BomUnit::Piece => "piece",
        }
    }
}

impl std::fmt::Display for BomUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One priced row of the bill of materials.
///
/// ## JSON Example
///
/// ```json
/// {
///   "item_id": "prof-alu-f45",
///   "item_type": "profile",
///   "description": "Aluminum frame 45mm - ALU-F45",
///   "quantity": 2.8,
///   "unit": "m",
///   "unit_cost": 15.5,
///   "total_cost": 43.4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLineItem {
    /// Id of the catalog record this row prices
    pub item_id: String,
    #[serde(rename = "item_type", alias = "category")]
    pub category: BomCategory,
    pub description: String,
    pub quantity: f64,
    pub unit: BomUnit,
    pub unit_cost: f64,
    /// quantity × unit_cost
    pub total_cost: f64,
}

impl BomLineItem {
    fn priced(
        item_id: &str,
        category: BomCategory,
        description: String,
        quantity: f64,
        unit: BomUnit,
        unit_cost: f64,
    ) -> Self {
        BomLineItem {
            item_id: item_id.to_string(),
            category,
            description,
            quantity,
            unit,
            unit_cost,
            total_cost: quantity * unit_cost,
        }
    }
}

/// Ordered BOM rows with their running material total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub items: Vec<BomLineItem>,
    pub total_material_cost: f64,
}

impl BillOfMaterials {
    fn push(&mut self, item: BomLineItem) {
        self.total_material_cost += item.total_cost;
        self.items.push(item);
    }

    /// Sum of row totals for one category
    pub fn subtotal(&self, category: BomCategory) -> f64 {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.total_cost)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Assemble the BOM.
pub fn assemble(
    lengths: &ProfileLengths,
    profiles: &[Profile],
    area: SquareMeters,
    glass: &Glass,
    hardware: &[&Hardware],
) -> BillOfMaterials {
    let mut bom = BillOfMaterials::default();

    for profile in profiles {
        let length_mm = lengths.length_for(profile.category);
        if length_mm <= 0.0 {
            continue;
        }
        let length = Meters::from(Millimeters(length_mm));
        bom.push(BomLineItem::priced(
            &profile.id,
            BomCategory::Profile,
            profile.bom_description(),
            length.0,
            BomUnit::Meter,
            profile.cost_per_meter,
        ));
    }

    bom.push(BomLineItem::priced(
        &glass.id,
        BomCategory::Glass,
        glass.description.clone(),
        area.0,
        BomUnit::SquareMeter,
        glass.cost_per_m2,
    ));

    for hw in hardware {
        bom.push(BomLineItem::priced(
            &hw.id,
            BomCategory::Hardware,
            hw.name.clone(),
            1.0,
            BomUnit::Piece,
            hw.cost,
        ));
    }

    bom
}
