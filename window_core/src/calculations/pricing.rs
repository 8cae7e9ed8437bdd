//! # Pricing
//!
//! ```text
//! labor  = material × labor_ratio                    (default 10%)
//! price  = (material + labor) × (1 + margin / 100)   (default margin 30%)
//! ```
//!
//! The margin comes from [`EngineSettings`] only. A margin stored on a
//! project record is not consulted here.

use serde::{Deserialize, Serialize};

use crate::settings::EngineSettings;

/// Price build-up on top of the material cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub labor_cost: f64,
    pub margin_percent: f64,
    pub final_price: f64,
}

/// Apply labor and margin to a material cost.
pub fn price(total_material_cost: f64, settings: &EngineSettings) -> Pricing {
    let labor_cost = total_material_cost * settings.labor_ratio;
    let margin_percent = settings.margin_percent;
    let subtotal = total_material_cost + labor_cost;
    let final_price = subtotal * (1.0 + margin_percent / 100.0);

    Pricing {
        labor_cost,
        margin_percent,
        final_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratios() {
        let pricing = price(1000.0, &EngineSettings::default());
        assert!((pricing.labor_cost - 100.0).abs() < 1e-9);
        assert_eq!(pricing.margin_percent, 30.0);
        assert!((pricing.final_price - 1430.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_material() {
        let pricing = price(0.0, &EngineSettings::default());
        assert_eq!(pricing.labor_cost, 0.0);
        assert_eq!(pricing.final_price, 0.0);
    }

    #[test]
    fn test_overridden_margin() {
        let settings = EngineSettings {
            labor_ratio: 0.2,
            margin_percent: 50.0,
            ..EngineSettings::default()
        };
        let pricing = price(100.0, &settings);
        assert!((pricing.labor_cost - 20.0).abs() < 1e-9);
        assert!((pricing.final_price - 180.0).abs() < 1e-9);
    }
}
