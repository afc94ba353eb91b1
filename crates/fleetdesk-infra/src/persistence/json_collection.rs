//! One JSON document per record collection

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use fleetdesk_types::Result;

/// A record collection backed by a single JSON file, held in memory and
/// rewritten whole on every mutation.
pub(crate) struct JsonCollection<T> {
    path: PathBuf,
    records: RefCell<Vec<T>>,
}

impl<T: Serialize + DeserializeOwned + Clone> JsonCollection<T> {
    /// Create or load the collection document
    pub fn open(store_dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(store_dir)?;
        let path = store_dir.join(file_name);

        let records = if path.exists() {
            let file = File::open(&path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            records: RefCell::new(records),
        })
    }

    /// Write to a sibling temp file, then rename over the old document.
    /// A crash mid-write leaves the previous collection intact.
    fn persist(&self) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        {
            let file = File::create(&tmp)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &*self.records.borrow())?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn all(&self) -> Vec<T> {
        self.records.borrow().clone()
    }

    /// Substitute the entire collection in one write
    pub fn replace(&self, records: &[T]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        self.persist()
    }

    /// Mutate the collection in place and persist the result
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> Result<R> {
        let result = f(&mut self.records.borrow_mut());
        self.persist()?;
        Ok(result)
    }
}
