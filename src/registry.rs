//! Culture registry: the set of culture identifiers a site recognizes.
//!
//! Every operation is a fresh round-trip to the underlying `CultureStore`;
//! nothing is cached between calls.

use tracing::{debug, info, warn};

use crate::culture::{self, CultureRecord};
use crate::error::CultureError;
use crate::store::CultureStore;

pub struct CultureRegistry<S> {
    store: S,
}

impl<S: CultureStore> CultureRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    /// List every stored culture identifier, in the store's natural order.
    ///
    /// An empty store yields an empty vector.
    pub fn list_cultures(&self) -> Result<Vec<String>, CultureError> {
        let records = self.store.enumerate()?;
        Ok(records.into_iter().map(|r| r.culture_name).collect())
    }

    /// Validate and store a new culture identifier.
    ///
    /// Duplicates are not checked here; whether a second identical name is
    /// accepted is up to the store.
    ///
    /// # Errors
    /// * `CultureError::InvalidArgument` if `culture_name` fails validation.
    ///   The store is not touched in that case.
    /// * `CultureError::Store` for store failures.
    pub fn add_culture(&self, culture_name: &str) -> Result<CultureRecord, CultureError> {
        Self::validate(culture_name)?;

        let record = self.store.insert(culture_name)?;
        info!("Added culture {} (id {})", record.culture_name, record.id);
        Ok(record)
    }

    /// Delete one stored record with exactly this name.
    ///
    /// Deleting a name that is not stored is a no-op.
    pub fn delete_culture(&self, culture_name: &str) -> Result<(), CultureError> {
        Self::validate(culture_name)?;

        if self.store.delete_one_by_name(culture_name)? {
            info!("Deleted culture {}", culture_name);
        } else {
            debug!("Culture {} not stored, nothing to delete", culture_name);
        }

        Ok(())
    }

    /// Look up a record by its surrogate key. Unknown ids yield `None`.
    pub fn get_culture_by_id(&self, id: i64) -> Result<Option<CultureRecord>, CultureError> {
        Ok(self.store.get_by_id(id)?)
    }

    pub fn is_valid_culture(culture_name: &str) -> bool {
        culture::is_valid_culture(culture_name)
    }

    fn validate(culture_name: &str) -> Result<(), CultureError> {
        if culture::is_valid_culture(culture_name) {
            Ok(())
        } else {
            warn!("Rejected invalid culture name {:?}", culture_name);
            Err(CultureError::invalid(culture_name))
        }
    }
}
