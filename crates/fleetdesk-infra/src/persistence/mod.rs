//! File-based repository implementations
//!
//! Each collection lives in one JSON document under the data directory,
//! mirroring the document-store layout of the legacy backend.

mod file_assignment_repo;
mod file_driver_repo;
mod file_pickup_point_repo;
mod json_collection;

pub use file_assignment_repo::FileAssignmentRepository;
pub use file_driver_repo::FileDriverRepository;
pub use file_pickup_point_repo::FilePickupPointRepository;
