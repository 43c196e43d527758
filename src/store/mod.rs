//! Persistent storage of culture records.
//!
//! The registry talks to storage only through `CultureStore`. Inserts and
//! deletes must be durable before the call returns, and `enumerate` must
//! reflect every prior write.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::culture::CultureRecord;
use crate::error::StoreError;

pub trait CultureStore {
    /// All stored records, in the store's natural order.
    fn enumerate(&self) -> Result<Vec<CultureRecord>, StoreError>;

    /// Insert a new record and return it with its assigned id.
    fn insert(&self, culture_name: &str) -> Result<CultureRecord, StoreError>;

    /// Delete the lowest-id record whose name equals `culture_name` exactly,
    /// as a single operation. Returns whether a record was removed.
    fn delete_one_by_name(&self, culture_name: &str) -> Result<bool, StoreError>;

    fn get_by_id(&self, id: i64) -> Result<Option<CultureRecord>, StoreError>;
}

impl<S: CultureStore + ?Sized> CultureStore for &S {
    fn enumerate(&self) -> Result<Vec<CultureRecord>, StoreError> {
        (**self).enumerate()
    }

    fn insert(&self, culture_name: &str) -> Result<CultureRecord, StoreError> {
        (**self).insert(culture_name)
    }

    fn delete_one_by_name(&self, culture_name: &str) -> Result<bool, StoreError> {
        (**self).delete_one_by_name(culture_name)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<CultureRecord>, StoreError> {
        (**self).get_by_id(id)
    }
}
