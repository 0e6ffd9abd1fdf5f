//! Query filter types
//!
//! Filter specification applied to an employee snapshot. Each predicate is
//! independent and optional; absent predicates are no-ops and present ones
//! compose by logical AND.

use serde::{Deserialize, Serialize};

use crate::models::Gender;

/// Active-status predicate encoded the way the dashboard selector does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Active,
    Inactive,
}

impl StatusFilter {
    /// The `is_active` value this predicate selects
    pub fn as_bool(&self) -> bool {
        matches!(self, StatusFilter::Active)
    }
}

/// Employee list filter specification
///
/// An empty search string behaves like an unset predicate, matching the
/// frontend which keeps `""` in cleared inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeFilters {
    /// Case-insensitive substring match against the full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact gender match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Active-status match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,
}

impl EmployeeFilters {
    /// Filter that matches every record
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no predicate narrows the result
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().unwrap_or("").is_empty()
            && self.gender.is_none()
            && self.status.is_none()
    }
}
