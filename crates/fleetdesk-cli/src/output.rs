//! Output formatting module
//!
//! Table output resolves assignment foreign keys to display names;
//! unknown ids render as "N/A" rather than failing.

use fleetdesk_app::report_service::{DashboardStats, DriverAssignmentCount, ShiftDistribution};
use fleetdesk_domain::model::{Assignment, Driver, PickupPoint};
use fleetdesk_types::{OutputFormat, Result};

pub fn print_drivers(format: OutputFormat, drivers: &[Driver]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(drivers)?);
        return Ok(());
    }

    println!("Drivers ({})", drivers.len());
    println!("{:<10} {:<28} {:<7} {:<12} {:<14} {:<8} {}",
        "ID", "Name", "Shift", "Holiday", "Phone", "License", "Status");
    for driver in drivers {
        println!(
            "{:<10} {:<28} {:<7} {:<12} {:<14} {:<8} {}",
            driver.id,
            driver.name,
            driver.shift.to_string(),
            driver.holiday_date,
            driver.phone,
            driver.license_type,
            driver.status,
        );
    }
    Ok(())
}

pub fn print_pickup_points(format: OutputFormat, points: &[PickupPoint]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(points)?);
        return Ok(());
    }

    println!("Pickup points ({})", points.len());
    println!("{:<18} {:<22} {:<24} {}", "ID", "Group", "Name", "Address");
    for point in points {
        println!(
            "{:<18} {:<22} {:<24} {}",
            point.id, point.group_name, point.name, point.address,
        );
    }
    Ok(())
}

fn driver_name<'a>(drivers: &'a [Driver], id: &str) -> &'a str {
    drivers
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.as_str())
        .unwrap_or("N/A")
}

fn point_name<'a>(points: &'a [PickupPoint], id: &str) -> &'a str {
    points
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or("N/A")
}

pub fn print_assignments(
    format: OutputFormat,
    assignments: &[Assignment],
    drivers: &[Driver],
    points: &[PickupPoint],
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(assignments)?);
        return Ok(());
    }

    println!("Assignments ({})", assignments.len());
    println!("{:<18} {:<24} {:<24} {:<12} {:<12} {}",
        "ID", "Driver", "Pickup Point", "Date", "Status", "Notes");
    for assignment in assignments {
        println!(
            "{:<18} {:<24} {:<24} {:<12} {:<12} {}",
            assignment.id,
            driver_name(drivers, &assignment.driver_id),
            point_name(points, &assignment.pickup_point_id),
            assignment.assignment_date,
            assignment.status.to_string(),
            assignment.notes,
        );
    }
    Ok(())
}

/// Dump all three collections (the bulk-read view)
pub fn print_all(
    format: OutputFormat,
    drivers: &[Driver],
    points: &[PickupPoint],
    assignments: &[Assignment],
) -> Result<()> {
    if format == OutputFormat::Json {
        let data = serde_json::json!({
            "drivers": drivers,
            "pickupPoints": points,
            "assignments": assignments,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_drivers(format, drivers)?;
    println!();
    print_pickup_points(format, points)?;
    println!();
    print_assignments(format, assignments, drivers, points)
}

pub fn print_stats(format: OutputFormat, stats: &DashboardStats) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Summary");
    println!("=======");
    println!("Drivers:        {} ({} active, {} on leave)",
        stats.total_drivers, stats.active_drivers, stats.on_leave_drivers);
    println!("Pickup points:  {}", stats.total_pickup_points);
    println!("Assignments:    {}", stats.total_assignments);
    println!("  Completed:    {}", stats.completed_assignments);
    println!("  In progress:  {}", stats.in_progress_assignments);
    println!("  Pending:      {}", stats.pending_assignments);
    Ok(())
}

pub fn print_per_driver(format: OutputFormat, counts: &[DriverAssignmentCount]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(counts)?);
        return Ok(());
    }

    println!("Assignments per driver");
    println!("{:<10} {:<28} {}", "ID", "Name", "Assignments");
    for count in counts {
        println!(
            "{:<10} {:<28} {}",
            count.driver_id, count.driver_name, count.assignments,
        );
    }
    Ok(())
}

pub fn print_shift_distribution(format: OutputFormat, dist: &ShiftDistribution) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(dist)?);
        return Ok(());
    }

    println!("Active driver shift distribution");
    println!("Day:   {}", dist.day);
    println!("Night: {}", dist.night);
    Ok(())
}
