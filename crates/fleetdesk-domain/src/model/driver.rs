//! Driver record and its enumerations

use serde::{Deserialize, Serialize};

use super::pickup_point::LatLng;

/// Coarse work-period category, stated directly or inferred from a
/// start-time string (see `service::shift_inference`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Day,
    Night,
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shift::Day => write!(f, "Day"),
            Shift::Night => write!(f, "Night"),
        }
    }
}

impl std::str::FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Shift::Day),
            "night" => Ok(Shift::Night),
            other => Err(format!("unknown shift: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverStatus::Active => write!(f, "Active"),
            DriverStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl std::str::FromStr for DriverStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DriverStatus::Active),
            "inactive" => Ok(DriverStatus::Inactive),
            other => Err(format!("unknown driver status: {other}")),
        }
    }
}

/// A driver record. Field names follow the legacy JSON wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub shift: Shift,
    /// Weekly holiday, as a plain date string (e.g. "2024-11-03")
    pub holiday_date: String,
    pub phone: String,
    pub license_type: String,
    pub status: DriverStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<LatLng>,
}
