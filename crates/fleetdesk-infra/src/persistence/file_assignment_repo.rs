//! File-based implementation of AssignmentRepository

use std::path::Path;

use fleetdesk_domain::model::Assignment;
use fleetdesk_domain::repository::AssignmentRepository;
use fleetdesk_types::Result;

use super::json_collection::JsonCollection;

/// Assignments stored as `assignments.json` under the data directory
pub struct FileAssignmentRepository {
    collection: JsonCollection<Assignment>,
}

impl FileAssignmentRepository {
    /// Create or load the assignment collection in `store_dir`
    pub fn open(store_dir: &Path) -> Result<Self> {
        Ok(Self {
            collection: JsonCollection::open(store_dir, "assignments.json")?,
        })
    }
}

impl AssignmentRepository for FileAssignmentRepository {
    fn find_all(&self) -> Result<Vec<Assignment>> {
        Ok(self.collection.all())
    }

    fn replace_all(&self, assignments: &[Assignment]) -> Result<()> {
        self.collection.replace(assignments)
    }
}
