use super::RecordStore;
use crate::error::{RecsyncError, Result};
use crate::model::Record;

/// In-memory record storage. Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<I, R>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Record>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(RecsyncError::OutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}

impl RecordStore for MemoryStore {
    fn get_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn add(&mut self, record: Record) -> Vec<Record> {
        self.records.push(record);
        self.records.clone()
    }

    fn update(&mut self, index: usize, record: Record) -> Result<Vec<Record>> {
        self.check_index(index)?;
        self.records[index] = record;
        Ok(self.records.clone())
    }

    fn delete(&mut self, index: usize) -> Result<Record> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The three records every run starts from.
    pub fn seeded() -> MemoryStore {
        MemoryStore::with_records(["record1", "record2", "record3"])
    }
}
