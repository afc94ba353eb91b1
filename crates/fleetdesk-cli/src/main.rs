//! fleetdesk - logistics back-office data tool
//!
//! Manages drivers, pickup points, and assignments through CSV import
//! with replace-all semantics, plus export, reports, and record
//! maintenance.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
