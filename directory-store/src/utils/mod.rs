//! Utility Module
//!
//! Application error type, logging setup and form-boundary validation.

pub mod error;
pub mod logger;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult};
pub use logger::{init_logger, init_logger_with_file};
pub use validation::validate_employee_create;
