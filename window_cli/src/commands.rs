//! Subcommand handlers.
//!
//! Each handler prints to stdout and returns `anyhow::Result`; library
//! errors are wrapped with context but stay downcastable to `CalcError`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use window_core::catalog::{
    sample_catalog, Catalog, HardwareRepository, ProfileRepository, SystemRepository,
};
use window_core::report::render_quote;
use window_core::{
    calculate, load_catalog, load_project, load_settings, save_catalog, save_project,
    CalculationResult, EngineSettings, FileLock, Project, WindowConfig,
};

use crate::cli::{CatalogCommand, ProjectCommand, WindowArgs};

/// Catalog and settings shared by every subcommand
pub struct Session {
    pub catalog: Catalog,
    pub settings: EngineSettings,
}

impl Session {
    pub fn load(catalog: Option<&Path>, settings: Option<&Path>) -> Result<Self> {
        let catalog = match catalog {
            Some(path) => load_catalog(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
            None => sample_catalog(),
        };
        let settings = match settings {
            Some(path) => load_settings(path)
                .with_context(|| format!("loading settings {}", path.display()))?,
            None => EngineSettings::default(),
        };
        Ok(Self { catalog, settings })
    }

    fn quote(&self, window: &WindowArgs) -> Result<CalculationResult> {
        let config = window.to_config();
        self.warn_unsupported_opening(&config);
        let result = calculate(&config, &self.catalog, &self.settings)
            .with_context(|| format!("pricing {} x {} mm window", config.width_mm, config.height_mm))?;
        Ok(result)
    }

    // The engine does not enforce the system's opening list
    fn warn_unsupported_opening(&self, config: &WindowConfig) {
        if let Some(system) = self.catalog.get_system(&config.system_id) {
            if !system.supports(config.opening_type) {
                warn!(
                    system = %system.id,
                    opening = config.opening_type.code(),
                    "system does not list this opening type"
                );
            }
        }
    }
}

pub fn calculate_window(session: &Session, window: &WindowArgs, json: bool, currency: &str) -> Result<()> {
    let result = session.quote(window)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_quote(&result, currency));
    }
    Ok(())
}

pub fn catalog(session: &Session, command: &CatalogCommand) -> Result<()> {
    match command {
        CatalogCommand::Systems => {
            println!("{:<16} {:<22} {:<10} Openings", "Id", "Name", "Material");
            for system in &session.catalog.systems {
                let openings: Vec<&str> = system.compatible_openings.iter().map(|o| o.code()).collect();
                println!(
                    "{:<16} {:<22} {:<10} {}",
                    system.id,
                    system.name,
                    system.material_type.display_name(),
                    openings.join(", ")
                );
            }
        }
        CatalogCommand::Profiles { system_id } => {
            let profiles = session.catalog.list_by_system(system_id);
            if profiles.is_empty() {
                bail!("no profiles for system '{}'", system_id);
            }
            println!("{:<16} {:<10} {:<8} {:>8} {:>8} {:>8}", "Id", "Code", "Type", "kg/m", "$/m", "Bar mm");
            for p in profiles {
                println!(
                    "{:<16} {:<10} {:<8} {:>8.2} {:>8.2} {:>8.0}",
                    p.id,
                    p.code,
                    p.category.display_name(),
                    p.weight_per_meter,
                    p.cost_per_meter,
                    p.bar_length_mm
                );
            }
        }
        CatalogCommand::Glass => {
            println!("{:<22} {:<26} {:>6} {:>6} {:>8}", "Id", "Description", "mm", "U", "$/m²");
            for g in &session.catalog.glass {
                println!(
                    "{:<22} {:<26} {:>6.1} {:>6.2} {:>8.2}",
                    g.id, g.description, g.thickness_mm, g.u_value, g.cost_per_m2
                );
            }
        }
        CatalogCommand::Hardware { opening } => {
            let hardware = match opening {
                Some(opening) => session.catalog.list_by_opening_type(*opening),
                None => session.catalog.hardware.clone(),
            };
            println!("{:<20} {:<24} {:>8}  Limits", "Id", "Name", "Cost");
            for hw in hardware {
                println!(
                    "{:<20} {:<24} {:>8.2}  {}",
                    hw.id,
                    hw.name,
                    hw.cost,
                    describe_limits(hw.max_weight_kg, hw.max_width_mm, hw.max_height_mm)
                );
            }
        }
        CatalogCommand::Export { path } => {
            save_catalog(&session.catalog, path)
                .with_context(|| format!("exporting catalog to {}", path.display()))?;
            info!(path = %path.display(), "catalog exported");
        }
    }
    Ok(())
}

fn describe_limits(weight: Option<f64>, width: Option<f64>, height: Option<f64>) -> String {
    let mut parts = Vec::new();
    if let Some(w) = weight {
        parts.push(format!("≤{:.0} kg", w));
    }
    if let Some(w) = width {
        parts.push(format!("W≤{:.0}", w));
    }
    if let Some(h) = height {
        parts.push(format!("H≤{:.0}", h));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

pub fn project(session: &Session, command: &ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::New { path, client, currency } => {
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            let project = Project::new(client.as_str()).with_currency(currency.as_str());
            save_project(&project, path)
                .with_context(|| format!("creating project {}", path.display()))?;
            info!(path = %path.display(), client = %client, "project created");
        }
        ProjectCommand::Add { path, label, window, user } => {
            let _lock = FileLock::acquire(path, user.as_str())?;
            let mut project = load_project(path)?;
            let result = session.quote(window)?;
            let price = result.final_price;
            let id = project.add_item(label.as_str(), result);
            save_project(&project, path)?;
            info!(path = %path.display(), %id, "window added");
            println!("{}  {}  {:.2} {}", id, label, price, project.meta.currency);
        }
        ProjectCommand::Show { path, json } => {
            let (project, lock) = window_core::file_io::load_project_with_lock_check(path)?;
            if let Some(lock) = lock {
                warn!(user = %lock.user, machine = %lock.machine, "project is open for editing elsewhere");
            }
            if *json {
                println!("{}", serde_json::to_string_pretty(&project)?);
            } else {
                print_project(&project);
            }
        }
    }
    Ok(())
}

fn print_project(project: &Project) {
    let meta = &project.meta;
    println!("Client:   {}", meta.client_name);
    println!("Created:  {}", meta.created.format("%Y-%m-%d %H:%M"));
    println!("Modified: {}", meta.modified.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{:<24} {:<10} {:>12} {:>10} {:>12}", "Label", "Opening", "Size mm", "kg", "Price");
    for (_, item) in project.sorted_items() {
        let cfg = &item.result.config;
        println!(
            "{:<24} {:<10} {:>12} {:>10.2} {:>12.2}",
            item.label,
            cfg.opening_type.display_name(),
            format!("{:.0}x{:.0}", cfg.width_mm, cfg.height_mm),
            item.result.weight_kg,
            item.result.final_price
        );
    }
    println!();
    println!(
        "{} window(s)  {:.2} kg  TOTAL {:.2} {}",
        project.item_count(),
        project.total_weight_kg(),
        project.total_price(),
        meta.currency
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_limits() {
        assert_eq!(describe_limits(None, None, None), "-");
        assert_eq!(describe_limits(Some(80.0), Some(1200.0), None), "≤80 kg W≤1200");
    }

    #[test]
    fn test_default_context_uses_sample_catalog() {
        let session = Session::load(None, None).unwrap();
        assert_eq!(session.catalog.systems.len(), 3);
        assert_eq!(session.settings, EngineSettings::default());
    }
}
