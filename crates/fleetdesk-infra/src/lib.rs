//! Infrastructure layer for fleetdesk - CSV import/export, file persistence

pub mod csv_export;
pub mod csv_import;
pub mod persistence;
