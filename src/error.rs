use thiserror::Error;

/// Failures raised by a `CultureStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Errors returned by `CultureRegistry` operations.
#[derive(Debug, Error)]
pub enum CultureError {
    /// The supplied name does not match the culture name grammar.
    #[error("invalid culture name: {value:?}")]
    InvalidArgument { value: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CultureError {
    pub(crate) fn invalid(value: &str) -> Self {
        CultureError::InvalidArgument {
            value: value.to_string(),
        }
    }
}
