//! CSV export and import templates
//!
//! Export is allowed to be proper CSV (quoted via the csv crate) even
//! though import is naive; exported driver files round-trip through the
//! importer because the shift column carries literal Day/Night values.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use fleetdesk_domain::model::{Assignment, Driver, PickupPoint};
use fleetdesk_types::{EntityKind, Error, Result};

use crate::csv_import::{
    ASSIGNMENT_REQUIRED_HEADERS, DRIVER_REQUIRED_HEADERS, PICKUP_POINT_REQUIRED_HEADERS,
};

/// Import template for an entity type: the required headers verbatim,
/// comma-joined, no trailing newline.
pub fn template(kind: EntityKind) -> String {
    let headers: &[&str] = match kind {
        EntityKind::Drivers => &DRIVER_REQUIRED_HEADERS,
        EntityKind::PickupPoints => &PICKUP_POINT_REQUIRED_HEADERS,
        EntityKind::Assignments => &ASSIGNMENT_REQUIRED_HEADERS,
    };
    headers.join(",")
}

fn csv_err(err: csv::Error) -> Error {
    Error::Export(err.to_string())
}

/// Write drivers as CSV. The first four columns match the import
/// template; the remainder are informational.
pub fn write_drivers_csv<W: Write>(writer: W, drivers: &[Driver]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "Driver ID",
        "Driver Name",
        "IDShift",
        "TimeHolidayDate",
        "Phone",
        "License Type",
        "Status",
    ])
    .map_err(csv_err)?;

    for driver in drivers {
        let shift = driver.shift.to_string();
        let status = driver.status.to_string();
        out.write_record([
            driver.id.as_str(),
            driver.name.as_str(),
            shift.as_str(),
            driver.holiday_date.as_str(),
            driver.phone.as_str(),
            driver.license_type.as_str(),
            status.as_str(),
        ])
        .map_err(csv_err)?;
    }

    out.flush()?;
    Ok(())
}

/// Write pickup points as CSV.
pub fn write_pickup_points_csv<W: Write>(writer: W, points: &[PickupPoint]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "Group Name",
        "Pickup Point ID",
        "Pickup Point Name",
        "Text Address",
        "Lat",
        "Lng",
        "Contact Person",
        "Contact Phone",
    ])
    .map_err(csv_err)?;

    for point in points {
        let lat = point.gps.lat.to_string();
        let lng = point.gps.lng.to_string();
        out.write_record([
            point.group_name.as_str(),
            point.id.as_str(),
            point.name.as_str(),
            point.address.as_str(),
            lat.as_str(),
            lng.as_str(),
            point.contact_person.as_str(),
            point.contact_phone.as_str(),
        ])
        .map_err(csv_err)?;
    }

    out.flush()?;
    Ok(())
}

/// Write assignments as CSV.
pub fn write_assignments_csv<W: Write>(writer: W, assignments: &[Assignment]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "Assignment ID",
        "Driver ID",
        "Pickup Point ID",
        "Assignment Date",
        "Status",
        "Notes",
    ])
    .map_err(csv_err)?;

    for assignment in assignments {
        let status = assignment.status.to_string();
        out.write_record([
            assignment.id.as_str(),
            assignment.driver_id.as_str(),
            assignment.pickup_point_id.as_str(),
            assignment.assignment_date.as_str(),
            status.as_str(),
            assignment.notes.as_str(),
        ])
        .map_err(csv_err)?;
    }

    out.flush()?;
    Ok(())
}

/// Export all three collections into `dir`, one CSV per entity.
/// Returns the written paths.
pub fn export_all(
    dir: &Path,
    drivers: &[Driver],
    points: &[PickupPoint],
    assignments: &[Assignment],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let drivers_path = dir.join("drivers.csv");
    write_drivers_csv(File::create(&drivers_path)?, drivers)?;

    let points_path = dir.join("pickup_points.csv");
    write_pickup_points_csv(File::create(&points_path)?, points)?;

    let assignments_path = dir.join("assignments.csv");
    write_assignments_csv(File::create(&assignments_path)?, assignments)?;

    Ok(vec![drivers_path, points_path, assignments_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_import::parse_drivers_csv;
    use fleetdesk_domain::model::{DriverStatus, Shift};

    fn sample_driver() -> Driver {
        Driver {
            id: "6554".to_string(),
            name: "Uthenchai".to_string(),
            shift: Shift::Night,
            holiday_date: "2024-11-03".to_string(),
            phone: "081-234-5678".to_string(),
            license_type: "CDL-A".to_string(),
            status: DriverStatus::Active,
            current_location: None,
        }
    }

    #[test]
    fn templates_match_required_headers() {
        assert_eq!(
            template(EntityKind::Drivers),
            "Driver ID,Driver Name,IDShift,TimeHolidayDate"
        );
        assert_eq!(
            template(EntityKind::PickupPoints),
            "Group Name,Pickup Point ID,Pickup Point Name,Text Address"
        );
        assert_eq!(
            template(EntityKind::Assignments),
            "Driver ID,Pickup Point ID"
        );
    }

    #[test]
    fn templates_have_no_trailing_newline() {
        assert!(!template(EntityKind::Drivers).ends_with('\n'));
    }

    #[test]
    fn exported_drivers_reimport_cleanly() {
        let mut buf = Vec::new();
        write_drivers_csv(&mut buf, &[sample_driver()]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let report = parse_drivers_csv(&text).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].id, "6554");
        assert_eq!(report.records[0].shift, Shift::Night);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn export_all_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = export_all(dir.path(), &[sample_driver()], &[], &[]).unwrap();
        assert_eq!(paths.len(), 3);
        for path in paths {
            assert!(path.exists());
        }
    }
}
