//! Repository Module
//!
//! CRUD over the collections persisted in [`AppStorage`]. Repositories own
//! identity assignment and audit timestamps; callers hand in create/update
//! payloads and get full records back.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;

use thiserror::Error;

use crate::db::storage::StorageError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
pub trait Repository<T, CreateDto, UpdateDto> {
    /// Full collection in insertion order; a fresh snapshot per call
    fn find_all(&self) -> RepoResult<Vec<T>>;
    fn find_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    fn create(&self, data: CreateDto) -> RepoResult<T>;
    /// Merge the patch over the existing record; `NotFound` if the id is absent
    fn update(&self, id: &str, data: UpdateDto) -> RepoResult<T>;
    /// Returns false (not an error) when the id is absent
    fn delete(&self, id: &str) -> RepoResult<bool>;
}
