//! Command handlers

use std::fs;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use fleetdesk_app::config::Config;
use fleetdesk_app::import_service::{
    import_assignments, import_drivers, import_pickup_points, ImportOutcome,
};
use fleetdesk_app::repository::{
    open_assignment_repo, open_driver_repo, open_pickup_point_repo,
};
use fleetdesk_app::sample_data;
use fleetdesk_domain::model::{DriverStatus, Shift};
use fleetdesk_domain::repository::{
    AssignmentRepository, DriverRepository, PickupPointRepository,
};
use fleetdesk_infra::csv_export::{export_all, template};
use fleetdesk_types::{EntityKind, Error, OutputFormat, Result};

use crate::cli::{Cli, Commands, ReportKind};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Import { entity, file } => cmd_import(&config, entity, &file, cli.verbose),
        Commands::Template { entity, output } => cmd_template(entity, output.as_deref()),
        Commands::Export { out_dir } => cmd_export(&config, &out_dir),
        Commands::List { entity } => cmd_list(&config, format, entity),
        Commands::UpdateDriver {
            id,
            name,
            shift,
            holiday_date,
            phone,
            license_type,
            status,
        } => cmd_update_driver(
            &config,
            &id,
            name,
            shift,
            holiday_date,
            phone,
            license_type,
            status,
        ),
        Commands::DeleteDriver { id } => cmd_delete_driver(&config, &id),
        Commands::Report { kind } => cmd_report(&config, format, kind),
        Commands::Reset { yes } => cmd_reset(&config, yes),
    }
}

fn import_spinner(entity: EntityKind) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("importing {entity}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn cmd_import(
    config: &Config,
    entity: EntityKind,
    file: &std::path::Path,
    verbose: bool,
) -> Result<()> {
    let raw = fs::read_to_string(file)?;

    let spinner = import_spinner(entity);
    let outcome: ImportOutcome = match entity {
        EntityKind::Drivers => import_drivers(&open_driver_repo(config)?, &raw),
        EntityKind::PickupPoints => {
            import_pickup_points(&open_pickup_point_repo(config)?, &raw)
        }
        EntityKind::Assignments => import_assignments(&open_assignment_repo(config)?, &raw),
    }?;
    spinner.finish_and_clear();

    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    if verbose && !outcome.warnings.is_empty() {
        eprintln!("{} row(s) needed a fallback", outcome.warnings.len());
    }

    println!("{} {entity} imported", outcome.imported);
    Ok(())
}

fn cmd_template(entity: EntityKind, output: Option<&std::path::Path>) -> Result<()> {
    let content = template(entity);
    match output {
        // the template file carries no trailing newline
        Some(path) => {
            fs::write(path, &content)?;
            println!("Template written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn cmd_export(config: &Config, out_dir: &std::path::Path) -> Result<()> {
    let drivers = open_driver_repo(config)?.find_all()?;
    let points = open_pickup_point_repo(config)?.find_all()?;
    let assignments = open_assignment_repo(config)?.find_all()?;

    let paths = export_all(out_dir, &drivers, &points, &assignments)?;
    for path in paths {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn cmd_list(config: &Config, format: OutputFormat, entity: Option<EntityKind>) -> Result<()> {
    match entity {
        Some(EntityKind::Drivers) => {
            output::print_drivers(format, &open_driver_repo(config)?.find_all()?)
        }
        Some(EntityKind::PickupPoints) => {
            output::print_pickup_points(format, &open_pickup_point_repo(config)?.find_all()?)
        }
        Some(EntityKind::Assignments) => {
            let drivers = open_driver_repo(config)?.find_all()?;
            let points = open_pickup_point_repo(config)?.find_all()?;
            let assignments = open_assignment_repo(config)?.find_all()?;
            output::print_assignments(format, &assignments, &drivers, &points)
        }
        None => {
            let drivers = open_driver_repo(config)?.find_all()?;
            let points = open_pickup_point_repo(config)?.find_all()?;
            let assignments = open_assignment_repo(config)?.find_all()?;
            output::print_all(format, &drivers, &points, &assignments)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_update_driver(
    config: &Config,
    id: &str,
    name: Option<String>,
    shift: Option<String>,
    holiday_date: Option<String>,
    phone: Option<String>,
    license_type: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let repo = open_driver_repo(config)?;
    let mut driver = repo
        .find_by_id(id)?
        .ok_or_else(|| Error::NotFound(format!("driver {id}")))?;

    if let Some(name) = name {
        driver.name = name;
    }
    if let Some(shift) = shift {
        driver.shift = shift.parse::<Shift>().map_err(Error::InvalidValue)?;
    }
    if let Some(holiday_date) = holiday_date {
        driver.holiday_date = holiday_date;
    }
    if let Some(phone) = phone {
        driver.phone = phone;
    }
    if let Some(license_type) = license_type {
        driver.license_type = license_type;
    }
    if let Some(status) = status {
        driver.status = status.parse::<DriverStatus>().map_err(Error::InvalidValue)?;
    }

    repo.update(&driver)?;
    println!("Driver {id} updated");
    Ok(())
}

fn cmd_delete_driver(config: &Config, id: &str) -> Result<()> {
    open_driver_repo(config)?.delete(id)?;
    println!("Driver {id} deleted");
    Ok(())
}

fn cmd_report(config: &Config, format: OutputFormat, kind: ReportKind) -> Result<()> {
    let drivers = open_driver_repo(config)?.find_all()?;
    let points = open_pickup_point_repo(config)?.find_all()?;
    let assignments = open_assignment_repo(config)?.find_all()?;

    match kind {
        ReportKind::Summary => output::print_stats(
            format,
            &fleetdesk_app::report_service::dashboard_stats(&drivers, points.len(), &assignments),
        ),
        ReportKind::PerDriver => output::print_per_driver(
            format,
            &fleetdesk_app::report_service::assignments_per_driver(&drivers, &assignments),
        ),
        ReportKind::Shifts => output::print_shift_distribution(
            format,
            &fleetdesk_app::report_service::shift_distribution(&drivers),
        ),
    }
}

fn cmd_reset(config: &Config, yes: bool) -> Result<()> {
    if !yes {
        println!("This replaces all stored data with the sample dataset; pass --yes to confirm.");
        return Ok(());
    }

    open_driver_repo(config)?.replace_all(&sample_data::sample_drivers())?;
    open_pickup_point_repo(config)?.replace_all(&sample_data::sample_pickup_points())?;
    open_assignment_repo(config)?.replace_all(&sample_data::sample_assignments())?;

    println!("Data reset to the sample dataset");
    Ok(())
}
