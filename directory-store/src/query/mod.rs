//! Query Engine
//!
//! Pure functions deriving views from an employee snapshot. Nothing here
//! holds state or touches storage; callers re-run the filter whenever the
//! snapshot or the filters change.

use serde::Serialize;
use shared::models::Employee;
use shared::query::EmployeeFilters;

/// Apply a filter specification to a snapshot
///
/// Predicates compose by logical AND; absent (or empty-search) predicates
/// are no-ops. The result preserves the relative order of the input: a
/// stable filter, no implicit re-sort.
pub fn filter_employees(records: &[Employee], filters: &EmployeeFilters) -> Vec<Employee> {
    records
        .iter()
        .filter(|e| matches_filters(e, filters))
        .cloned()
        .collect()
}

fn matches_filters(employee: &Employee, filters: &EmployeeFilters) -> bool {
    if let Some(search) = filters.search.as_deref()
        && !search.is_empty()
        && !employee
            .full_name
            .to_lowercase()
            .contains(&search.to_lowercase())
    {
        return false;
    }

    if let Some(gender) = filters.gender
        && employee.gender != gender
    {
        return false;
    }

    if let Some(status) = filters.status
        && employee.is_active != status.as_bool()
    {
        return false;
    }

    true
}

/// Headline counts rendered above the employee table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Count total/active/inactive over a snapshot
pub fn summarize(records: &[Employee]) -> DirectorySummary {
    let total = records.len();
    let active = records.iter().filter(|e| e.is_active).count();
    DirectorySummary {
        total,
        active,
        inactive: total - active,
    }
}
