//! Data models
//!
//! Shared between the directory store and its consumers (dashboard UI,
//! examples, tests). All timestamps are UTC; the wire format is the
//! camelCase JSON the frontend persists.

pub mod employee;
pub mod user;

// Re-exports
pub use employee::*;
pub use user::*;
