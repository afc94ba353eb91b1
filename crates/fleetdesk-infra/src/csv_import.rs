//! CSV import pipeline
//!
//! Tokenizer -> header validator -> row normalizer -> per-entity field
//! mapper, strictly sequential. The tokenizer is deliberately naive:
//! fields are split on commas and quote characters are stripped, so
//! commas embedded inside quoted fields are not supported. That matches
//! the roster exports this tool ingests.
//!
//! The whole file is parsed before anything is handed to a sink, so a
//! failing import never produces a partial record set.

use std::collections::HashMap;

use chrono::Utc;

use fleetdesk_domain::model::{
    Assignment, AssignmentStatus, Driver, DriverStatus, LatLng, PickupPoint,
};
use fleetdesk_domain::service::infer_shift;
use fleetdesk_types::ImportError;

/// Headers that must be present in a drivers CSV
pub const DRIVER_REQUIRED_HEADERS: [&str; 4] =
    ["Driver ID", "Driver Name", "IDShift", "TimeHolidayDate"];

/// Headers that must be present in a pickup points CSV
pub const PICKUP_POINT_REQUIRED_HEADERS: [&str; 4] = [
    "Group Name",
    "Pickup Point ID",
    "Pickup Point Name",
    "Text Address",
];

/// Headers that must be present in an assignments CSV
pub const ASSIGNMENT_REQUIRED_HEADERS: [&str; 2] = ["Driver ID", "Pickup Point ID"];

/// Default value for fields the roster exports do not carry
const NOT_AVAILABLE: &str = "N/A";

/// Non-fatal diagnostic attached to a specific data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    /// 1-based row number counted from the first data row
    pub row: usize,
    pub message: String,
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

/// A fully parsed import batch: the complete record set plus any
/// non-fatal diagnostics collected along the way.
#[derive(Debug)]
pub struct ImportReport<T> {
    pub records: Vec<T>,
    pub warnings: Vec<ImportWarning>,
}

/// Tokenized CSV text: one header row plus data rows.
struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Split raw CSV text into a header row and data rows.
///
/// A leading UTF-8 BOM is stripped; surrounding whitespace is trimmed
/// before counting lines, so a trailing newline does not produce a
/// phantom empty row.
fn tokenize(raw: &str) -> Result<Table, ImportError> {
    let text = raw.trim_start_matches('\u{feff}').trim();
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Err(ImportError::EmptyInput);
    }

    let header = split_fields(lines[0]);
    let rows = lines[1..].iter().map(|line| split_fields(line)).collect();
    Ok(Table { header, rows })
}

/// Naive field split: comma-delimited, whitespace trimmed, quote
/// characters removed.
fn split_fields(line: &str) -> Vec<String> {
    line.split(',')
        .map(|field| field.trim().replace('"', ""))
        .collect()
}

/// Check that every required header is present. Order does not matter
/// and unrecognized headers are ignored.
fn validate_headers(header: &[String], required: &[&str]) -> Result<(), ImportError> {
    for col in required {
        if !header.iter().any(|h| h == col) {
            return Err(ImportError::UnknownFormat {
                missing: (*col).to_string(),
            });
        }
    }
    Ok(())
}

/// Map a row's positional values to header names. A row shorter than
/// the header simply lacks the trailing keys; defaulting is the field
/// mapper's job, not ours.
fn normalize_row<'a>(header: &'a [String], values: &'a [String]) -> HashMap<&'a str, &'a str> {
    header
        .iter()
        .enumerate()
        .filter_map(|(i, key)| values.get(i).map(|v| (key.as_str(), v.as_str())))
        .collect()
}

fn field<'a>(record: &HashMap<&str, &'a str>, key: &str) -> &'a str {
    record.get(key).copied().unwrap_or("")
}

/// Parse a drivers CSV into a complete record set.
///
/// Phone, license type and status are not part of the export format and
/// default to "N/A" / Active. The shift is inferred from the raw
/// `IDShift` value; rows whose shift fell back to the Day default get a
/// warning in the report.
pub fn parse_drivers_csv(raw: &str) -> Result<ImportReport<Driver>, ImportError> {
    let table = tokenize(raw)?;
    validate_headers(&table.header, &DRIVER_REQUIRED_HEADERS)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut warnings = Vec::new();

    for (index, row) in table.rows.iter().enumerate() {
        let record = normalize_row(&table.header, row);

        let inference = infer_shift(field(&record, "IDShift"));
        if let Some(raw_value) = inference.fallback {
            warnings.push(ImportWarning {
                row: index + 1,
                message: format!(
                    "unrecognized shift value \"{raw_value}\", defaulting to Day"
                ),
            });
        }

        records.push(Driver {
            id: field(&record, "Driver ID").to_string(),
            name: field(&record, "Driver Name").to_string(),
            shift: inference.shift,
            holiday_date: field(&record, "TimeHolidayDate").to_string(),
            phone: NOT_AVAILABLE.to_string(),
            license_type: NOT_AVAILABLE.to_string(),
            status: DriverStatus::Active,
            current_location: None,
        });
    }

    Ok(ImportReport { records, warnings })
}

/// Parse a pickup points CSV into a complete record set.
///
/// The export format carries no coordinates or contact details, so GPS
/// defaults to (0, 0) and the contact fields to "N/A".
pub fn parse_pickup_points_csv(raw: &str) -> Result<ImportReport<PickupPoint>, ImportError> {
    let table = tokenize(raw)?;
    validate_headers(&table.header, &PICKUP_POINT_REQUIRED_HEADERS)?;

    let records = table
        .rows
        .iter()
        .map(|row| {
            let record = normalize_row(&table.header, row);
            PickupPoint {
                id: field(&record, "Pickup Point ID").to_string(),
                group_name: field(&record, "Group Name").to_string(),
                name: field(&record, "Pickup Point Name").to_string(),
                address: field(&record, "Text Address").to_string(),
                gps: LatLng { lat: 0.0, lng: 0.0 },
                contact_person: NOT_AVAILABLE.to_string(),
                contact_phone: NOT_AVAILABLE.to_string(),
            }
        })
        .collect();

    Ok(ImportReport {
        records,
        warnings: Vec::new(),
    })
}

/// Parse an assignments CSV into a complete record set.
///
/// Ids are generated as `A{unix_millis}{row_index}`: unique within one
/// batch, not stable across imports. That is acceptable because import
/// replaces the whole collection. The assignment date is today; status
/// starts Pending.
pub fn parse_assignments_csv(raw: &str) -> Result<ImportReport<Assignment>, ImportError> {
    let table = tokenize(raw)?;
    validate_headers(&table.header, &ASSIGNMENT_REQUIRED_HEADERS)?;

    let today = Utc::now().date_naive().to_string();
    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let record = normalize_row(&table.header, row);
            Assignment {
                id: format!("A{}{}", Utc::now().timestamp_millis(), index),
                driver_id: field(&record, "Driver ID").to_string(),
                pickup_point_id: field(&record, "Pickup Point ID").to_string(),
                assignment_date: today.clone(),
                status: AssignmentStatus::Pending,
                notes: String::new(),
            }
        })
        .collect();

    Ok(ImportReport {
        records,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdesk_domain::model::Shift;

    const DRIVERS_CSV: &str = "\
Driver ID,Driver Name,IDShift,TimeHolidayDate
6554,Uthenchai,Day,2024-11-03
9037,Mongkol,20:00 - 05:00,2024-11-03
9343,Anan,xyz,2024-11-02";

    #[test]
    fn drivers_one_record_per_row() {
        let report = parse_drivers_csv(DRIVERS_CSV).unwrap();
        assert_eq!(report.records.len(), 3);
        for driver in &report.records {
            assert!(!driver.id.is_empty());
            assert!(!driver.name.is_empty());
            assert!(!driver.holiday_date.is_empty());
        }
    }

    #[test]
    fn drivers_defaults_applied() {
        let report = parse_drivers_csv(DRIVERS_CSV).unwrap();
        let driver = &report.records[0];
        assert_eq!(driver.phone, "N/A");
        assert_eq!(driver.license_type, "N/A");
        assert_eq!(driver.status, DriverStatus::Active);
        assert!(driver.current_location.is_none());
    }

    #[test]
    fn drivers_shift_parsed_and_inferred() {
        let report = parse_drivers_csv(DRIVERS_CSV).unwrap();
        assert_eq!(report.records[0].shift, Shift::Day);
        assert_eq!(report.records[1].shift, Shift::Night);
        assert_eq!(report.records[2].shift, Shift::Day);
    }

    #[test]
    fn drivers_fallback_shift_warns_but_succeeds() {
        let report = parse_drivers_csv(DRIVERS_CSV).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].row, 3);
        assert!(report.warnings[0].message.contains("xyz"));
    }

    #[test]
    fn header_order_is_irrelevant() {
        let permuted = "\
TimeHolidayDate,IDShift,Driver Name,Driver ID
2024-11-03,Night,Mongkol,9037";
        let report = parse_drivers_csv(permuted).unwrap();
        assert_eq!(report.records.len(), 1);
        let driver = &report.records[0];
        assert_eq!(driver.id, "9037");
        assert_eq!(driver.name, "Mongkol");
        assert_eq!(driver.shift, Shift::Night);
        assert_eq!(driver.holiday_date, "2024-11-03");
    }

    #[test]
    fn extra_headers_are_ignored() {
        let csv = "\
Driver ID,Driver Name,IDShift,TimeHolidayDate,Depot
6554,Uthenchai,Day,2024-11-03,Bangkok";
        let report = parse_drivers_csv(csv).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].id, "6554");
    }

    #[test]
    fn missing_required_header_is_rejected() {
        let csv = "\
Driver ID,Driver Name,TimeHolidayDate
6554,Uthenchai,2024-11-03";
        match parse_drivers_csv(csv) {
            Err(ImportError::UnknownFormat { missing }) => assert_eq!(missing, "IDShift"),
            other => panic!("expected UnknownFormat, got {other:?}"),
        }
    }

    #[test]
    fn header_only_is_rejected() {
        let csv = "Driver ID,Driver Name,IDShift,TimeHolidayDate";
        assert!(matches!(
            parse_drivers_csv(csv),
            Err(ImportError::EmptyInput)
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_drivers_csv(""), Err(ImportError::EmptyInput)));
    }

    #[test]
    fn quotes_and_whitespace_are_stripped() {
        let csv = "\
\"Driver ID\", \"Driver Name\" ,IDShift,TimeHolidayDate
 \"6554\" ,\"Uthenchai\",\"Day\",2024-11-03";
        let report = parse_drivers_csv(csv).unwrap();
        assert_eq!(report.records[0].id, "6554");
        assert_eq!(report.records[0].name, "Uthenchai");
        assert_eq!(report.records[0].shift, Shift::Day);
    }

    #[test]
    fn short_row_leaves_trailing_fields_empty() {
        let csv = "\
Driver ID,Driver Name,IDShift,TimeHolidayDate
6554,Uthenchai";
        let report = parse_drivers_csv(csv).unwrap();
        let driver = &report.records[0];
        assert_eq!(driver.id, "6554");
        assert!(driver.holiday_date.is_empty());
        // absent shift falls back to Day, with a warning
        assert_eq!(driver.shift, Shift::Day);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn crlf_input_is_accepted() {
        let csv = "Driver ID,Driver Name,IDShift,TimeHolidayDate\r\n6554,Uthenchai,Day,2024-11-03\r\n";
        let report = parse_drivers_csv(csv).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].holiday_date, "2024-11-03");
    }

    #[test]
    fn pickup_points_mapped_with_defaults() {
        let csv = "\
Group Name,Pickup Point ID,Pickup Point Name,Text Address
[S] HBKTH (4W) -03,PUP001,Warehouse A,123 North Rd";
        let report = parse_pickup_points_csv(csv).unwrap();
        assert_eq!(report.records.len(), 1);
        let point = &report.records[0];
        assert_eq!(point.id, "PUP001");
        assert_eq!(point.group_name, "[S] HBKTH (4W) -03");
        assert_eq!(point.name, "Warehouse A");
        assert_eq!(point.address, "123 North Rd");
        assert_eq!(point.gps.lat, 0.0);
        assert_eq!(point.gps.lng, 0.0);
        assert_eq!(point.contact_person, "N/A");
        assert_eq!(point.contact_phone, "N/A");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn pickup_points_missing_header_is_rejected() {
        let csv = "\
Group Name,Pickup Point ID,Pickup Point Name
G1,PUP001,Warehouse A";
        assert!(matches!(
            parse_pickup_points_csv(csv),
            Err(ImportError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn assignment_ids_unique_even_for_identical_rows() {
        let csv = "\
Driver ID,Pickup Point ID
6554,PUP001
6554,PUP001";
        let report = parse_assignments_csv(csv).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_ne!(report.records[0].id, report.records[1].id);
        assert_eq!(report.records[0].driver_id, report.records[1].driver_id);
    }

    #[test]
    fn assignments_default_to_pending_today() {
        let csv = "\
Driver ID,Pickup Point ID
6554,PUP001";
        let report = parse_assignments_csv(csv).unwrap();
        let assignment = &report.records[0];
        assert_eq!(assignment.status, AssignmentStatus::Pending);
        assert_eq!(
            assignment.assignment_date,
            Utc::now().date_naive().to_string()
        );
        assert!(assignment.notes.is_empty());
        assert!(assignment.id.starts_with('A'));
    }

    #[test]
    fn dangling_references_are_not_rejected() {
        // Nothing ties these ids to existing driver/pickup point
        // records; the importer must not care.
        let csv = "\
Driver ID,Pickup Point ID
no-such-driver,no-such-point";
        let report = parse_assignments_csv(csv).unwrap();
        assert_eq!(report.records[0].driver_id, "no-such-driver");
    }
}
