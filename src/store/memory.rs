use std::sync::{Mutex, MutexGuard};

use crate::culture::CultureRecord;
use crate::error::StoreError;

use super::CultureStore;

/// In-process store, useful for tests and ephemeral sites.
///
/// Ids start at 1 and are never reused, mirroring an autoincrement column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<CultureRecord>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl CultureStore for MemoryStore {
    fn enumerate(&self) -> Result<Vec<CultureRecord>, StoreError> {
        Ok(self.lock()?.records.clone())
    }

    fn insert(&self, culture_name: &str) -> Result<CultureRecord, StoreError> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let record = CultureRecord {
            id: inner.last_id,
            culture_name: culture_name.to_string(),
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    fn delete_one_by_name(&self, culture_name: &str) -> Result<bool, StoreError> {
        let mut inner = self.lock()?;
        match inner
            .records
            .iter()
            .position(|record| record.culture_name == culture_name)
        {
            Some(index) => {
                inner.records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get_by_id(&self, id: i64) -> Result<Option<CultureRecord>, StoreError> {
        Ok(self
            .lock()?
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }
}
