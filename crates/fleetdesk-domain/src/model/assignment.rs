//! Assignment record linking a driver to a pickup point

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Completed => write!(f, "Completed"),
            AssignmentStatus::InProgress => write!(f, "In Progress"),
            AssignmentStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A driver-to-pickup-point assignment.
///
/// `driver_id` and `pickup_point_id` are plain string keys; nothing
/// enforces that they resolve to existing records. Dangling references
/// must be tolerated, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub driver_id: String,
    pub pickup_point_id: String,
    /// Plain date string (e.g. "2024-10-31")
    pub assignment_date: String,
    pub status: AssignmentStatus,
    pub notes: String,
}
