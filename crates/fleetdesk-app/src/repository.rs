//! Repository adapters for the persistence layer

use std::path::Path;

use fleetdesk_infra::persistence::{
    FileAssignmentRepository, FileDriverRepository, FilePickupPointRepository,
};
use fleetdesk_types::Result;

use crate::config::Config;

/// Open the file-based driver repository
pub fn open_driver_repo(config: &Config) -> Result<FileDriverRepository> {
    FileDriverRepository::open(&config.data_dir()?)
}

/// Open the file-based pickup point repository
pub fn open_pickup_point_repo(config: &Config) -> Result<FilePickupPointRepository> {
    FilePickupPointRepository::open(&config.data_dir()?)
}

/// Open the file-based assignment repository
pub fn open_assignment_repo(config: &Config) -> Result<FileAssignmentRepository> {
    FileAssignmentRepository::open(&config.data_dir()?)
}

/// Open the driver repository at a custom directory
pub fn open_driver_repo_at(store_dir: &Path) -> Result<FileDriverRepository> {
    FileDriverRepository::open(store_dir)
}

/// Open the pickup point repository at a custom directory
pub fn open_pickup_point_repo_at(store_dir: &Path) -> Result<FilePickupPointRepository> {
    FilePickupPointRepository::open(store_dir)
}

/// Open the assignment repository at a custom directory
pub fn open_assignment_repo_at(store_dir: &Path) -> Result<FileAssignmentRepository> {
    FileAssignmentRepository::open(store_dir)
}
