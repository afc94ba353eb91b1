//! Pickup point record

use serde::{Deserialize, Serialize};

/// GPS coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A pickup point record. Field names follow the legacy JSON wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupPoint {
    pub id: String,
    pub group_name: String,
    pub name: String,
    pub address: String,
    pub gps: LatLng,
    pub contact_person: String,
    pub contact_phone: String,
}
