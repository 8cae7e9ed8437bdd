//! # Error Types
//!
//! Structured error types for window_core. Every failure the engine can
//! report carries enough context to tell which input or which stage was
//! responsible, so a caller (CLI, HTTP layer, LLM tool) can act on it
//! without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use window_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::invalid_configuration(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for window_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Which catalog lookup came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lookup {
    /// No profiles exist for the requested material system
    System,
    /// No glass record exists for the requested glass id
    Glass,
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::System => write!(f, "system"),
            Lookup::Glass => write!(f, "glass"),
        }
    }
}

/// Pipeline stage of the calculation engine, used to locate computation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Geometry,
    Area,
    Weight,
    Hardware,
    Bom,
    Pricing,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Geometry => "geometry",
            Stage::Area => "area",
            Stage::Weight => "weight",
            Stage::Hardware => "hardware",
            Stage::Bom => "bom",
            Stage::Pricing => "pricing",
        };
        f.write_str(name)
    }
}

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The window configuration is structurally invalid (rejected at the boundary)
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    /// A catalog lookup returned nothing
    #[error("Not found ({lookup}): no record for id '{id}'")]
    NotFound { lookup: Lookup, id: String },

    /// A pure calculation stage produced an unusable value
    #[error("Computation failed in {stage} stage: {reason}")]
    ComputationFailed { stage: Stage, reason: String },

    /// An engine settings override is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidConfiguration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotFound error for the given lookup
    pub fn not_found(lookup: Lookup, id: impl Into<String>) -> Self {
        CalcError::NotFound {
            lookup,
            id: id.into(),
        }
    }

    /// Create a ComputationFailed error
    pub fn computation_failed(stage: Stage, reason: impl Into<String>) -> Self {
        CalcError::ComputationFailed {
            stage,
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    ///
    /// The engine is deterministic, so computation failures never are.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            CalcError::NotFound { lookup: Lookup::System, .. } => "SYSTEM_NOT_FOUND",
            CalcError::NotFound { lookup: Lookup::Glass, .. } => "GLASS_NOT_FOUND",
            CalcError::ComputationFailed { .. } => "COMPUTATION_FAILED",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
