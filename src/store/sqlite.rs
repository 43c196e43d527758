use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::culture::CultureRecord;
use crate::error::StoreError;

use super::CultureStore;

/// SQLite-backed culture store.
///
/// The `cultures` table has no uniqueness constraint on the name, so
/// inserting a duplicate creates a second row.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `database_path` and create tables
    pub fn new(database_path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(database_path)?;
        debug!("Opened culture database at {}", database_path);
        Self::from_connection(conn)
    }

    /// Database that lives only as long as the store
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS cultures (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                culture TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CultureRecord> {
    Ok(CultureRecord {
        id: row.get(0)?,
        culture_name: row.get(1)?,
    })
}

impl CultureStore for SqliteStore {
    fn enumerate(&self) -> Result<Vec<CultureRecord>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, culture FROM cultures ORDER BY id")?;

        let records = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn insert(&self, culture_name: &str) -> Result<CultureRecord, StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO cultures (culture) VALUES (?1)",
            params![culture_name],
        )?;

        Ok(CultureRecord {
            id: conn.last_insert_rowid(),
            culture_name: culture_name.to_string(),
        })
    }

    fn delete_one_by_name(&self, culture_name: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let rows_affected = conn.execute(
            "DELETE FROM cultures WHERE id = (
                SELECT id FROM cultures WHERE culture = ?1 ORDER BY id LIMIT 1
            )",
            params![culture_name],
        )?;
        Ok(rows_affected > 0)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<CultureRecord>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, culture FROM cultures WHERE id = ?1")?;

        Ok(stmt.query_row(params![id], record_from_row).optional()?)
    }
}
