//! Repository trait definitions for data persistence
//!
//! `replace_all` is the import sink: the implementation must substitute
//! the entire collection in one step, never leaving a partial mix of old
//! and new records behind.

use fleetdesk_types::Error;

use crate::model::{Assignment, Driver, PickupPoint};

/// Repository for driver records
pub trait DriverRepository {
    /// Load all drivers
    fn find_all(&self) -> Result<Vec<Driver>, Error>;

    /// Find a driver by id
    fn find_by_id(&self, id: &str) -> Result<Option<Driver>, Error>;

    /// Update an existing driver, matched by id
    fn update(&self, driver: &Driver) -> Result<(), Error>;

    /// Delete a driver by id
    fn delete(&self, id: &str) -> Result<(), Error>;

    /// Replace the whole collection with a freshly imported one
    fn replace_all(&self, drivers: &[Driver]) -> Result<(), Error>;
}

/// Repository for pickup point records
pub trait PickupPointRepository {
    /// Load all pickup points
    fn find_all(&self) -> Result<Vec<PickupPoint>, Error>;

    /// Replace the whole collection with a freshly imported one
    fn replace_all(&self, points: &[PickupPoint]) -> Result<(), Error>;
}

/// Repository for assignment records
pub trait AssignmentRepository {
    /// Load all assignments
    fn find_all(&self) -> Result<Vec<Assignment>, Error>;

    /// Replace the whole collection with a freshly imported one
    fn replace_all(&self, assignments: &[Assignment]) -> Result<(), Error>;
}
