//! Domain model types

pub mod assignment;
pub mod driver;
pub mod pickup_point;

pub use assignment::{Assignment, AssignmentStatus};
pub use driver::{Driver, DriverStatus, Shift};
pub use pickup_point::{LatLng, PickupPoint};
