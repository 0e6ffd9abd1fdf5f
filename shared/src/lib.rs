//! Shared types for the employee directory
//!
//! Domain models, filter specifications and fixed option lists used by the
//! directory store and its consumers. This crate holds no I/O; persistence
//! lives in `directory-store`.

pub mod constants;
pub mod models;
pub mod query;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{AuthUser, Employee, EmployeeCreate, EmployeeUpdate, Gender, LoginRequest};
pub use query::{EmployeeFilters, StatusFilter};
