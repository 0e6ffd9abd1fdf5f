//! Application state
//!
//! Wires the storage handle into the services that share it. Consumers
//! receive the store explicitly through this struct instead of reaching
//! for ambient global state.

use crate::auth::SessionService;
use crate::core::StoreConfig;
use crate::db::{AppStorage, EmployeeRepository};
use crate::utils::{AppError, AppResult};

/// Shared handles over one durable store
///
/// Cloning is shallow; all clones observe the same underlying database.
#[derive(Clone)]
pub struct AppState {
    /// Store configuration (immutable after initialize)
    pub config: StoreConfig,
    /// Raw storage handle
    pub storage: AppStorage,
    /// Employee record store; seeded on first initialize
    pub employees: EmployeeRepository,
    /// Session flag store
    pub sessions: SessionService,
}

impl AppState {
    /// Open the store and construct all services over it
    ///
    /// Creates the data directory if missing. Seeding of the employee
    /// collection happens here, once, as part of repository construction;
    /// reads never initialize anything.
    pub fn initialize(config: &StoreConfig) -> AppResult<Self> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| AppError::internal(format!("Failed to create data dir: {e}")))?;

        let storage = AppStorage::open(config.db_path())
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        tracing::info!(path = %config.db_path().display(), "Directory store opened");

        let employees = EmployeeRepository::new(storage.clone())?;
        let sessions = SessionService::new(storage.clone());

        Ok(Self {
            config: config.clone(),
            storage,
            employees,
            sessions,
        })
    }
}
