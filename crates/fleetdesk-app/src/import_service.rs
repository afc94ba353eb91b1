//! Import orchestration: parse a whole CSV file, then hand the complete
//! record set to the repository's replace-all sink.
//!
//! Parsing finishes before the sink is touched, so a failing import
//! leaves the existing collection exactly as it was.

use fleetdesk_domain::repository::{
    AssignmentRepository, DriverRepository, PickupPointRepository,
};
use fleetdesk_infra::csv_import::{
    parse_assignments_csv, parse_drivers_csv, parse_pickup_points_csv, ImportWarning,
};
use fleetdesk_types::Result;

/// What an import run produced
#[derive(Debug)]
pub struct ImportOutcome {
    /// Number of records now in the collection
    pub imported: usize,
    /// Non-fatal per-row diagnostics (e.g. shift values that fell back
    /// to the Day default)
    pub warnings: Vec<ImportWarning>,
}

/// Replace the driver collection with the contents of a drivers CSV
pub fn import_drivers(repo: &dyn DriverRepository, raw: &str) -> Result<ImportOutcome> {
    let report = parse_drivers_csv(raw)?;
    repo.replace_all(&report.records)?;
    Ok(ImportOutcome {
        imported: report.records.len(),
        warnings: report.warnings,
    })
}

/// Replace the pickup point collection with the contents of a CSV
pub fn import_pickup_points(
    repo: &dyn PickupPointRepository,
    raw: &str,
) -> Result<ImportOutcome> {
    let report = parse_pickup_points_csv(raw)?;
    repo.replace_all(&report.records)?;
    Ok(ImportOutcome {
        imported: report.records.len(),
        warnings: report.warnings,
    })
}

/// Replace the assignment collection with the contents of a CSV
pub fn import_assignments(repo: &dyn AssignmentRepository, raw: &str) -> Result<ImportOutcome> {
    let report = parse_assignments_csv(raw)?;
    repo.replace_all(&report.records)?;
    Ok(ImportOutcome {
        imported: report.records.len(),
        warnings: report.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::open_driver_repo_at;
    use fleetdesk_types::{Error, ImportError};

    const DRIVERS_CSV: &str = "\
Driver ID,Driver Name,IDShift,TimeHolidayDate
6554,Uthenchai,Day,2024-11-03
9037,Mongkol,Night,2024-11-03";

    #[test]
    fn import_fills_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_driver_repo_at(dir.path()).unwrap();

        let outcome = import_drivers(&repo, DRIVERS_CSV).unwrap();
        assert_eq!(outcome.imported, 2);
        assert!(outcome.warnings.is_empty());
        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn reimport_replaces_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_driver_repo_at(dir.path()).unwrap();

        import_drivers(&repo, DRIVERS_CSV).unwrap();
        import_drivers(&repo, DRIVERS_CSV).unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn failed_import_leaves_collection_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_driver_repo_at(dir.path()).unwrap();
        import_drivers(&repo, DRIVERS_CSV).unwrap();

        let missing_shift = "\
Driver ID,Driver Name,TimeHolidayDate
1,X,2024-11-03";
        let err = import_drivers(&repo, missing_shift).unwrap_err();
        assert!(matches!(
            err,
            Error::Import(ImportError::UnknownFormat { .. })
        ));

        // previous records are still there, nothing was replaced
        assert_eq!(repo.find_all().unwrap().len(), 2);
        assert_eq!(repo.find_all().unwrap()[0].id, "6554");
    }

    #[test]
    fn warnings_propagate_to_the_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_driver_repo_at(dir.path()).unwrap();

        let csv = "\
Driver ID,Driver Name,IDShift,TimeHolidayDate
1,X,whenever,2024-11-03";
        let outcome = import_drivers(&repo, csv).unwrap();
        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].message.contains("whenever"));
    }
}
