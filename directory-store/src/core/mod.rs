//! Core Module
//!
//! Configuration and application state wiring.

pub mod config;
pub mod state;

// Re-exports
pub use config::StoreConfig;
pub use state::AppState;
