//! # window_core - Window & Door Quoting Engine
//!
//! `window_core` is the computational heart of Fenestra. It turns a window
//! configuration plus catalog records (profiles, hardware, glass) into
//! profile lengths, glazing area, weight, a priced bill of materials and a
//! final quote. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Injected catalog**: Lookups go through repository traits, never storage
//! - **Rich Errors**: Structured error types, not just strings
//! - **Deterministic**: Same config + same catalog snapshot = same result
//!
//! ## Quick Start
//!
//! ```rust
//! use window_core::{calculate, EngineSettings, WindowConfig};
//! use window_core::catalog::{sample_catalog, OpeningType};
//!
//! let config = WindowConfig::new(2000.0, 1500.0, OpeningType::Sliding, "sys-upvc-70", "glass-4-16-4")
//!     .with_leaves(2);
//!
//! let result = calculate(&config, &sample_catalog(), &EngineSettings::default()).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("bom_items"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The engine: geometry, area, weight, hardware, BOM, pricing
//! - [`catalog`] - Catalog records, repository traits, sample data
//! - [`window`] - Calculation input
//! - [`settings`] - Overridable engine constants
//! - [`project`] - Project container for several quoted windows
//! - [`file_io`] - File operations with atomic saves and locking
//! - [`report`] - Plain-text quote rendering
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod project;
pub mod report;
pub mod settings;
pub mod units;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, evaluate, CalculationResult, CatalogSnapshot};
pub use errors::{CalcError, CalcResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_catalog, load_project, load_settings, save_catalog, save_project, FileLock};
pub use project::{Project, ProjectItem, ProjectMetadata};
pub use settings::EngineSettings;
pub use window::WindowConfig;
