//! File-based implementation of DriverRepository

use std::path::Path;

use fleetdesk_domain::model::Driver;
use fleetdesk_domain::repository::DriverRepository;
use fleetdesk_types::{Error, Result};

use super::json_collection::JsonCollection;

/// Drivers stored as `drivers.json` under the data directory
pub struct FileDriverRepository {
    collection: JsonCollection<Driver>,
}

impl FileDriverRepository {
    /// Create or load the driver collection in `store_dir`
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            collection: JsonCollection::open(store_dir, "drivers.json")?,
        })
    }
}

impl DriverRepository for FileDriverRepository {
    fn find_all(&self) -> Result<Vec<Driver>> {
        Ok(self.collection.all())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Driver>> {
        Ok(self.collection.all().into_iter().find(|d| d.id == id))
    }

    fn update(&self, driver: &Driver) -> Result<()> {
        let updated = self.collection.mutate(|records| {
            match records.iter_mut().find(|d| d.id == driver.id) {
                Some(existing) => {
                    *existing = driver.clone();
                    true
                }
                None => false,
            }
        })?;

        if updated {
            Ok(())
        } else {
            Err(Error::NotFound(format!("driver {}", driver.id)))
        }
    }

    fn delete(&self, id: &str) -> Result<()> {
        let removed = self.collection.mutate(|records| {
            let before = records.len();
            records.retain(|d| d.id != id);
            records.len() < before
        })?;

        if removed {
            Ok(())
        } else {
            Err(Error::NotFound(format!("driver {id}")))
        }
    }

    fn replace_all(&self, drivers: &[Driver]) -> Result<()> {
        self.collection.replace(drivers)
    }
}
