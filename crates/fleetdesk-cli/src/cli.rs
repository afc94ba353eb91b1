//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use fleetdesk_types::{EntityKind, OutputFormat};

#[derive(Parser)]
#[command(name = "fleetdesk")]
#[command(version)]
#[command(about = "Logistics back-office data tool: drivers, pickup points, assignments")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory override. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Report selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Headline counters for all collections
    Summary,
    /// Assignment counts per driver
    PerDriver,
    /// Day/Night split of active drivers
    Shifts,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a CSV file, replacing the whole collection
    Import {
        /// Which collection to import into
        entity: EntityKind,

        /// Path to the CSV file
        file: PathBuf,
    },

    /// Print or write the CSV import template for a collection
    Template {
        entity: EntityKind,

        /// Write the template to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export all collections as CSV files
    Export {
        /// Directory to write drivers.csv, pickup_points.csv, assignments.csv into
        out_dir: PathBuf,
    },

    /// List stored records (all collections if no entity is given)
    List {
        entity: Option<EntityKind>,
    },

    /// Update fields of an existing driver
    UpdateDriver {
        /// Driver id
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Shift (day, night)
        #[arg(long)]
        shift: Option<String>,

        /// Weekly holiday date (e.g. 2024-11-03)
        #[arg(long)]
        holiday_date: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        license_type: Option<String>,

        /// Status (active, inactive)
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a driver by id
    DeleteDriver {
        id: String,
    },

    /// Summary reports over the stored collections
    Report {
        #[arg(value_enum, default_value_t = ReportKind::Summary)]
        kind: ReportKind,
    },

    /// Replace all collections with the bundled sample dataset
    Reset {
        /// Confirm the destructive reseed
        #[arg(long)]
        yes: bool,
    },
}
