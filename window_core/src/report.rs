//! # Quote Report
//!
//! Fixed-width plain-text rendering of a calculation result for terminals
//! and plain-text emails. Rows appear in BOM order.

use std::fmt::Write;

use crate::calculations::CalculationResult;

const RULE: &str = "═══════════════════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────────────────";

/// Render a quote as text.
///
/// ```rust
/// use window_core::calculations::calculate;
/// use window_core::catalog::{sample_catalog, OpeningType};
/// use window_core::report::render_quote;
/// use window_core::settings::EngineSettings;
/// use window_core::window::WindowConfig;
///
/// let config = WindowConfig::new(600.0, 800.0, OpeningType::Casement, "sys-alu-45", "glass-4-12-4");
/// let result = calculate(&config, &sample_catalog(), &EngineSettings::default()).unwrap();
/// let text = render_quote(&result, "USD");
/// assert!(text.contains("FINAL PRICE"));
/// ```
pub fn render_quote(result: &CalculationResult, currency: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_quote(&mut out, result, currency);
    out
}

fn write_quote(out: &mut String, result: &CalculationResult, currency: &str) -> std::fmt::Result {
    let cfg = &result.config;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  WINDOW QUOTE")?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  Size:     {:.0} x {:.0} mm   Opening: {}",
        cfg.width_mm,
        cfg.height_mm,
        cfg.opening_type.display_name()
    )?;
    writeln!(out, "  System:   {}   Glass: {}", cfg.system_id, cfg.glass_id)?;
    writeln!(
        out,
        "  Layout:   {} leaf/leaves, {} mullion(s), {} transom(s)",
        cfg.leaves, cfg.mullions, cfg.transoms
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  {:<38} {:>10} {:<6} {:>8} {:>9}",
        "Item", "Qty", "Unit", "Rate", "Total"
    )?;
    writeln!(out, "{}", THIN_RULE)?;

    for item in &result.bom_items {
        writeln!(
            out,
            "  {:<38} {:>10.3} {:<6} {:>8.2} {:>9.2}",
            truncate(&item.description, 38),
            item.quantity,
            item.unit.symbol(),
            item.unit_cost,
            item.total_cost
        )?;
    }

    writeln!(out, "{}", THIN_RULE)?;
    writeln!(out, "  {:<56} {:>16.2}", "Material", result.total_material_cost)?;
    writeln!(out, "  {:<56} {:>16.2}", "Labor", result.labor_cost)?;
    writeln!(
        out,
        "  {:<56} {:>16}",
        "Margin",
        format!("{:.1}%", result.margin_percent)
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  {:<56} {:>12.2} {}",
        "FINAL PRICE", result.final_price, currency
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  Weight: {:.2} kg   Glazing area: {:.4} m²",
        result.weight_kg, result.glass_area_m2
    )?;

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(max_chars - 1).collect();
        short.push('…');
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use crate::catalog::{sample_catalog, OpeningType};
    use crate::settings::EngineSettings;
    use crate::window::WindowConfig;

    #[test]
    fn test_rows_in_bom_order() {
        let config = WindowConfig::new(600.0, 800.0, OpeningType::Casement, "sys-alu-45", "glass-4-12-4");
        let result = calculate(&config, &sample_catalog(), &EngineSettings::default()).unwrap();
        let text = render_quote(&result, "EUR");

        let frame = text.find("ALU-F45").unwrap();
        let glass = text.find("4-12-4 Double Glazing").unwrap();
        let handle = text.find("Standard Handle").unwrap();
        assert!(frame < glass && glass < handle);
        assert!(text.contains("EUR"));
        assert!(text.contains("30.0%"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
