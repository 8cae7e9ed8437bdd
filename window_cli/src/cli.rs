//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use window_core::catalog::OpeningType;
use window_core::WindowConfig;

/// Window and door quoting from the command line
#[derive(Debug, Parser)]
#[command(name = "window-quote", version, about)]
pub struct Cli {
    /// Catalog JSON file (defaults to the built-in sample catalog)
    #[arg(long, global = true, env = "FENESTRA_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Engine settings override JSON file
    #[arg(long, global = true, env = "FENESTRA_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price a single window
    Calculate {
        #[command(flatten)]
        window: WindowArgs,

        /// Print the result as JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Currency label for the text report
        #[arg(long, default_value = "USD")]
        currency: String,
    },

    /// Browse or export the catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),

    /// Manage quote projects (.fnq files)
    #[command(subcommand)]
    Project(ProjectCommand),
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List material systems
    Systems,
    /// List the profiles of one system
    Profiles {
        system_id: String,
    },
    /// List glazing units
    Glass,
    /// List hardware kits
    Hardware {
        /// Only kits for this opening type
        #[arg(long, value_parser = parse_opening)]
        opening: Option<OpeningType>,
    },
    /// Write the active catalog to a JSON file
    Export {
        path: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Create an empty project file
    New {
        path: PathBuf,
        #[arg(long)]
        client: String,
        #[arg(long, default_value = "USD")]
        currency: String,
    },
    /// Price a window and add it to a project
    Add {
        path: PathBuf,
        #[arg(long)]
        label: String,
        #[command(flatten)]
        window: WindowArgs,
        /// Who is editing (recorded in the lock file)
        #[arg(long, env = "USER", default_value = "unknown")]
        user: String,
    },
    /// Show the windows and totals of a project
    Show {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

/// Window configuration flags
#[derive(Debug, Clone, Args)]
pub struct WindowArgs {
    /// Overall width (mm)
    #[arg(long)]
    pub width: f64,
    /// Overall height (mm)
    #[arg(long)]
    pub height: f64,
    /// casement, awning, turn_tilt, sliding or folding
    #[arg(long, value_parser = parse_opening)]
    pub opening: OpeningType,
    /// Material system id
    #[arg(long)]
    pub system: String,
    /// Glass id
    #[arg(long)]
    pub glass: String,
    #[arg(long, default_value_t = 1)]
    pub leaves: u32,
    #[arg(long, default_value_t = 0)]
    pub mullions: u32,
    #[arg(long, default_value_t = 0)]
    pub transoms: u32,
}

impl WindowArgs {
    pub fn to_config(&self) -> WindowConfig {
        WindowConfig::new(self.width, self.height, self.opening, &self.system, &self.glass)
            .with_leaves(self.leaves)
            .with_mullions(self.mullions)
            .with_transoms(self.transoms)
    }
}

fn parse_opening(s: &str) -> Result<OpeningType, String> {
    OpeningType::from_str_flexible(s).map_err(|e| e.to_string())
}
