//! File-based implementation of PickupPointRepository

use std::path::Path;

use fleetdesk_domain::model::PickupPoint;
use fleetdesk_domain::repository::PickupPointRepository;
use fleetdesk_types::Result;

use super::json_collection::JsonCollection;

/// Pickup points stored as `pickup_points.json` under the data directory
pub struct FilePickupPointRepository {
    collection: JsonCollection<PickupPoint>,
}

impl FilePickupPointRepository {
    /// Create or load the pickup point collection in `store_dir`
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            collection: JsonCollection::open(store_dir, "pickup_points.json")?,
        })
    }
}

impl PickupPointRepository for FilePickupPointRepository {
    fn find_all(&self) -> Result<Vec<PickupPoint>> {
        Ok(self.collection.all())
    }

    fn replace_all(&self, points: &[PickupPoint]) -> Result<()> {
        self.collection.replace(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdesk_domain::model::LatLng;

    fn point(id: &str) -> PickupPoint {
        PickupPoint {
            id: id.to_string(),
            group_name: "[S] HBKTH (4W) -03".to_string(),
            name: "Warehouse A".to_string(),
            address: "123 North Rd".to_string(),
            gps: LatLng { lat: 0.0, lng: 0.0 },
            contact_person: "N/A".to_string(),
            contact_phone: "N/A".to_string(),
        }
    }

    #[test]
    fn replace_all_substitutes_not_appends() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePickupPointRepository::open(dir.path()).unwrap();

        repo.replace_all(&[point("P1"), point("P2")]).unwrap();
        repo.replace_all(&[point("P3")]).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "P3");
    }
}
