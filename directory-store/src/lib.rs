//! Directory Store - employee directory data layer
//!
//! Embedded, single-tenant data layer behind the employee dashboard:
//! durable CRUD over the employee collection, a presence-based session
//! flag, and a pure query engine deriving filtered views.
//!
//! # Module structure
//!
//! ```text
//! directory-store/src/
//! ├── core/     # configuration, application state
//! ├── db/       # redb storage, seed data, repositories
//! ├── auth/     # session service
//! ├── query/    # snapshot filtering and summaries
//! └── utils/    # errors, logging, validation
//! ```
//!
//! # Persistence layout
//!
//! One redb table with two independent keys: `employees_data` (JSON array
//! of employee records, insertion order) and `auth_user` (JSON session
//! flag, absent when logged out). Unreadable payloads are treated as
//! absent rather than surfaced; there is no user-facing recovery path at
//! this layer.

pub mod auth;
pub mod core;
pub mod db;
pub mod query;
pub mod utils;

// Re-export public types
pub use auth::SessionService;
pub use core::{AppState, StoreConfig};
pub use db::{AppStorage, EmployeeRepository, RepoError, RepoResult, Repository};
pub use query::{filter_employees, summarize, DirectorySummary};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
