//! redb-based storage for the employee directory
//!
//! # Layout
//!
//! A single `app_data` table (`&str -> &[u8]`) holding two independent keys:
//!
//! | Key | Value | Purpose |
//! |-----|-------|---------|
//! | `employees_data` | JSON array of `Employee` | Canonical collection, insertion order |
//! | `auth_user` | JSON `{ username, name }` | Session flag; absent when logged out |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so a reader always observes either the full
//! pre-mutation or full post-mutation collection, never a torn write. redb
//! is single-writer, which also gives mutating callers their
//! read-merge-write critical section for free.
//!
//! # Corrupt payloads
//!
//! A value that fails to decode is logged and treated as absent. There is
//! no recovery path to offer the user at this layer; the worst case is an
//! empty view, repaired by the next successful write.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use shared::models::{AuthUser, Employee};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Application data table: key = storage key, value = JSON
const APP_DATA_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("app_data");

/// Key for the employee collection
const EMPLOYEES_KEY: &str = "employees_data";

/// Key for the session flag
const AUTH_USER_KEY: &str = "auth_user";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Directory storage backed by redb
#[derive(Clone)]
pub struct AppStorage {
    db: Arc<Database>,
}

impl AppStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Initialize the table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(APP_DATA_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(APP_DATA_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Begin a write transaction
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Employee Collection ==========

    /// Read the employee collection (read-only snapshot)
    ///
    /// `None` means the key has never been written (fresh deployment) or
    /// the payload was unreadable.
    pub fn load_employees(&self) -> StorageResult<Option<Vec<Employee>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(APP_DATA_TABLE)?;

        match table.get(EMPLOYEES_KEY)? {
            Some(value) => Ok(decode_json(EMPLOYEES_KEY, value.value())),
            None => Ok(None),
        }
    }

    /// Read the employee collection within a write transaction
    ///
    /// Used by mutating operations so the read-merge-write cycle stays in
    /// one transaction.
    pub fn employees_in_txn(
        &self,
        txn: &WriteTransaction,
    ) -> StorageResult<Option<Vec<Employee>>> {
        let table = txn.open_table(APP_DATA_TABLE)?;

        match table.get(EMPLOYEES_KEY)? {
            Some(value) => Ok(decode_json(EMPLOYEES_KEY, value.value())),
            None => Ok(None),
        }
    }

    /// Store the full employee collection within a write transaction
    pub fn store_employees(
        &self,
        txn: &WriteTransaction,
        employees: &[Employee],
    ) -> StorageResult<()> {
        let mut table = txn.open_table(APP_DATA_TABLE)?;
        let value = serde_json::to_vec(employees)?;
        table.insert(EMPLOYEES_KEY, value.as_slice())?;
        Ok(())
    }

    /// Store the full employee collection in its own transaction
    pub fn save_employees(&self, employees: &[Employee]) -> StorageResult<()> {
        let txn = self.begin_write()?;
        self.store_employees(&txn, employees)?;
        txn.commit()?;
        Ok(())
    }

    // ========== Session Flag ==========

    /// Read the session flag, if any
    pub fn load_auth_user(&self) -> StorageResult<Option<AuthUser>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(APP_DATA_TABLE)?;

        match table.get(AUTH_USER_KEY)? {
            Some(value) => Ok(decode_json(AUTH_USER_KEY, value.value())),
            None => Ok(None),
        }
    }

    /// Persist the session flag
    pub fn save_auth_user(&self, user: &AuthUser) -> StorageResult<()> {
        let txn = self.begin_write()?;
        {
            let mut table = txn.open_table(APP_DATA_TABLE)?;
            let value = serde_json::to_vec(user)?;
            table.insert(AUTH_USER_KEY, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Remove the session flag; removing an absent flag is a no-op
    pub fn clear_auth_user(&self) -> StorageResult<()> {
        let txn = self.begin_write()?;
        {
            let mut table = txn.open_table(APP_DATA_TABLE)?;
            table.remove(AUTH_USER_KEY)?;
        }
        txn.commit()?;
        Ok(())
    }
}

/// Decode a JSON value, failing closed: an unreadable payload is treated
/// as absent rather than surfaced as an error.
fn decode_json<T: serde::de::DeserializeOwned>(key: &str, bytes: &[u8]) -> Option<T> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Discarding unreadable payload");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shared::models::Gender;

    fn create_test_employee(id: &str, full_name: &str) -> Employee {
        let now = Utc::now();
        Employee {
            id: id.to_string(),
            full_name: full_name.to_string(),
            gender: Gender::Other,
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            profile_image: String::new(),
            state: "Texas".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Write garbage bytes under a key, bypassing the typed helpers
    fn inject_corrupt(storage: &AppStorage, key: &str) {
        let txn = storage.begin_write().unwrap();
        {
            let mut table = txn.open_table(APP_DATA_TABLE).unwrap();
            table.insert(key, b"{not json".as_slice()).unwrap();
        }
        txn.commit().unwrap();
    }

    #[test]
    fn test_employees_absent_on_fresh_store() {
        let storage = AppStorage::open_in_memory().unwrap();
        assert!(storage.load_employees().unwrap().is_none());
    }

    #[test]
    fn test_employees_roundtrip() {
        let storage = AppStorage::open_in_memory().unwrap();
        let employees = vec![
            create_test_employee("1", "John Doe"),
            create_test_employee("2", "Jane Smith"),
        ];

        storage.save_employees(&employees).unwrap();

        let loaded = storage.load_employees().unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].full_name, "John Doe");
        assert_eq!(loaded[1].full_name, "Jane Smith");
    }

    #[test]
    fn test_empty_collection_is_not_absent() {
        let storage = AppStorage::open_in_memory().unwrap();
        storage.save_employees(&[]).unwrap();

        // An explicitly persisted empty list must not look like a fresh store
        let loaded = storage.load_employees().unwrap();
        assert!(loaded.is_some());
        assert!(loaded.unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_employees_treated_as_absent() {
        let storage = AppStorage::open_in_memory().unwrap();
        inject_corrupt(&storage, EMPLOYEES_KEY);

        assert!(storage.load_employees().unwrap().is_none());
    }

    #[test]
    fn test_auth_user_roundtrip() {
        let storage = AppStorage::open_in_memory().unwrap();
        assert!(storage.load_auth_user().unwrap().is_none());

        let user = AuthUser {
            username: "admin".to_string(),
            name: "admin".to_string(),
        };
        storage.save_auth_user(&user).unwrap();
        assert_eq!(storage.load_auth_user().unwrap(), Some(user));

        storage.clear_auth_user().unwrap();
        assert!(storage.load_auth_user().unwrap().is_none());

        // Clearing twice is a no-op
        storage.clear_auth_user().unwrap();
    }

    #[test]
    fn test_corrupt_auth_user_treated_as_logged_out() {
        let storage = AppStorage::open_in_memory().unwrap();
        inject_corrupt(&storage, AUTH_USER_KEY);

        assert!(storage.load_auth_user().unwrap().is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let storage = AppStorage::open_in_memory().unwrap();
        storage.save_employees(&[create_test_employee("1", "John Doe")]).unwrap();
        inject_corrupt(&storage, AUTH_USER_KEY);

        // A broken session flag must not affect the collection
        assert_eq!(storage.load_employees().unwrap().unwrap().len(), 1);
        assert!(storage.load_auth_user().unwrap().is_none());
    }
}
