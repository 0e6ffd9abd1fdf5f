//! Employee Repository

use chrono::Utc;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use uuid::Uuid;

use super::{RepoError, RepoResult, Repository};
use crate::db::seed;
use crate::db::storage::AppStorage;

/// CRUD over the canonical employee collection
///
/// Construction seeds a fresh store with the example dataset; after that
/// every call reads the persisted collection verbatim. Mutations run their
/// read-merge-write cycle inside a single write transaction.
#[derive(Clone)]
pub struct EmployeeRepository {
    storage: AppStorage,
}

impl EmployeeRepository {
    pub fn new(storage: AppStorage) -> RepoResult<Self> {
        let repo = Self { storage };
        repo.ensure_initialized()?;
        Ok(repo)
    }

    /// Seed the example dataset if the collection has never been written.
    ///
    /// Runs at most once per store lifetime: a present key (even an
    /// explicitly emptied collection) is left verbatim. An unreadable
    /// payload counts as never-written and is replaced.
    fn ensure_initialized(&self) -> RepoResult<()> {
        let txn = self.storage.begin_write()?;
        if self.storage.employees_in_txn(&txn)?.is_none() {
            let employees = seed::example_employees(Utc::now());
            self.storage.store_employees(&txn, &employees)?;
            txn.commit()?;
            tracing::info!(count = employees.len(), "Seeded employee directory");
        }
        Ok(())
    }
}

impl Repository<Employee, EmployeeCreate, EmployeeUpdate> for EmployeeRepository {
    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.storage.load_employees()?.unwrap_or_default())
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employees = self.storage.load_employees()?.unwrap_or_default();
        Ok(employees.into_iter().find(|e| e.id == id))
    }

    fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            full_name: data.full_name,
            gender: data.gender,
            date_of_birth: data.date_of_birth,
            profile_image: data.profile_image,
            state: data.state,
            is_active: data.is_active,
            created_at: now,
            updated_at: now,
        };

        let txn = self.storage.begin_write()?;
        let mut employees = self.storage.employees_in_txn(&txn)?.unwrap_or_default();
        employees.push(employee.clone());
        self.storage.store_employees(&txn, &employees)?;
        txn.commit()?;

        tracing::debug!(id = %employee.id, "Employee created");
        Ok(employee)
    }

    fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let txn = self.storage.begin_write()?;
        let mut employees = self.storage.employees_in_txn(&txn)?.unwrap_or_default();

        let Some(employee) = employees.iter_mut().find(|e| e.id == id) else {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        };

        if let Some(full_name) = data.full_name {
            employee.full_name = full_name;
        }
        if let Some(gender) = data.gender {
            employee.gender = gender;
        }
        if let Some(date_of_birth) = data.date_of_birth {
            employee.date_of_birth = date_of_birth;
        }
        if let Some(profile_image) = data.profile_image {
            employee.profile_image = profile_image;
        }
        if let Some(state) = data.state {
            employee.state = state;
        }
        if let Some(is_active) = data.is_active {
            employee.is_active = is_active;
        }

        // updated_at never regresses, even if the clock stepped backwards
        let now = Utc::now();
        if now > employee.updated_at {
            employee.updated_at = now;
        }

        let updated = employee.clone();
        self.storage.store_employees(&txn, &employees)?;
        txn.commit()?;

        tracing::debug!(id = %updated.id, "Employee updated");
        Ok(updated)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let txn = self.storage.begin_write()?;
        let mut employees = self.storage.employees_in_txn(&txn)?.unwrap_or_default();

        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Ok(false);
        }

        self.storage.store_employees(&txn, &employees)?;
        txn.commit()?;

        tracing::debug!(id = %id, "Employee deleted");
        Ok(true)
    }
}
