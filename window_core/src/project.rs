//! # Project Data Structures
//!
//! A `Project` groups the priced windows quoted for one client.
//! Projects serialize to `.fnq` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, client, currency, margin, timestamps)
//! └── items: HashMap<Uuid, ProjectItem> (labelled calculation results)
//! ```
//!
//! The project's `margin_percent` is informational. Quotes are priced with
//! the margin in [`EngineSettings`](crate::settings::EngineSettings), which
//! is what every stored [`CalculationResult`] reports.
//!
//! ## Example
//!
//! ```rust
//! use window_core::project::Project;
//!
//! let project = Project::new("ACME Housing");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("ACME Housing"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::CalculationResult;

/// Current schema version for .fnq files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default project currency
pub const DEFAULT_CURRENCY: &str = "USD";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    /// All quoted windows, keyed by UUID
    pub items: HashMap<Uuid, ProjectItem>,
}

impl Project {
    /// Create a new empty project for a client.
    ///
    /// # Example
    ///
    /// ```rust
    /// use window_core::project::Project;
    ///
    /// let project = Project::new("Client Corp");
    /// assert_eq!(project.meta.client_name, "Client Corp");
    /// assert_eq!(project.meta.currency, "USD");
    /// ```
    pub fn new(client_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                client_name: client_name.into(),
                currency: DEFAULT_CURRENCY.to_string(),
                margin_percent: 30.0,
                created: now,
                modified: now,
            },
            items: HashMap::new(),
        }
    }

    /// Set the display currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.meta.currency = currency.into();
        self
    }

    /// Add a quoted window. Returns the UUID assigned to it.
    pub fn add_item(&mut self, label: impl Into<String>, result: CalculationResult) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(
            id,
            ProjectItem {
                label: label.into(),
                result,
            },
        );
        self.touch();
        id
    }

    /// Remove a quoted window by UUID.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<ProjectItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&ProjectItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items ordered by label (then id) for stable display
    pub fn sorted_items(&self) -> Vec<(&Uuid, &ProjectItem)> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| a.1.label.cmp(&b.1.label).then_with(|| a.0.cmp(b.0)));
        items
    }

    /// Sum of the final prices of all items
    pub fn total_price(&self) -> f64 {
        self.items.values().map(|item| item.result.final_price).sum()
    }

    /// Sum of the assembled weights of all items (kg)
    pub fn total_weight_kg(&self) -> f64 {
        self.items.values().map(|item| item.result.weight_kg).sum()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub client_name: String,

    /// Currency code the catalog prices are expressed in
    pub currency: String,

    /// Margin recorded for the project.
    ///
    /// Not read by the calculation engine; see the module docs.
    pub margin_percent: f64,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// A labelled, priced window within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItem {
    /// User label (e.g., "W-01 Kitchen")
    pub label: String,
    pub result: CalculationResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use crate::catalog::{sample_catalog, OpeningType};
    use crate::settings::EngineSettings;
    use crate::window::WindowConfig;

    fn quote(width: f64, height: f64) -> CalculationResult {
        let config = WindowConfig::new(width, height, OpeningType::Casement, "sys-alu-45", "glass-4-12-4");
        calculate(&config, &sample_catalog(), &EngineSettings::default()).unwrap()
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("Acme Corp").with_currency("EUR");
        assert_eq!(project.meta.client_name, "Acme Corp");
        assert_eq!(project.meta.currency, "EUR");
        assert_eq!(project.meta.margin_percent, 30.0);
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Client");
        let id = project.add_item("W-01", quote(600.0, 800.0));
        assert_eq!(project.item_count(), 1);
        assert_eq!(project.get_item(&id).unwrap().label, "W-01");

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.remove_item(&id).is_none());
    }

    #[test]
    fn test_totals() {
        let mut project = Project::new("Client");
        let a = quote(600.0, 800.0);
        let b = quote(1000.0, 1200.0);
        let expected = a.final_price + b.final_price;
        project.add_item("W-02", b);
        project.add_item("W-01", a);

        assert!((project.total_price() - expected).abs() < 1e-9);
        assert!(project.total_weight_kg() > 0.0);

        let sorted = project.sorted_items();
        let labels: Vec<_> = sorted.iter().map(|(_, item)| item.label.as_str()).collect();
        assert_eq!(labels, vec!["W-01", "W-02"]);
    }

    #[test]
    fn test_project_margin_does_not_reach_engine() {
        let mut project = Project::new("Client");
        project.meta.margin_percent = 45.0;
        let id = project.add_item("W-01", quote(600.0, 800.0));
        assert_eq!(project.get_item(&id).unwrap().result.margin_percent, 30.0);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Jane Client");
        project.add_item("W-01", quote(600.0, 800.0));
        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Jane Client"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.client_name, "Jane Client");
        assert_eq!(roundtrip.item_count(), 1);
    }
}
