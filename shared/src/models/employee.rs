//! Employee Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROFILE_IMAGE;

/// Gender enumeration, serialized as the plain variant name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee record
///
/// Field names are camelCase on the wire so the persisted JSON under
/// `employees_data` stays readable by the dashboard frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier, never supplied by callers
    pub id: String,
    pub full_name: String,
    pub gender: Gender,
    /// ISO date (YYYY-MM-DD)
    pub date_of_birth: NaiveDate,
    /// May be empty; consumers fall back to [`DEFAULT_PROFILE_IMAGE`]
    #[serde(default)]
    pub profile_image: String,
    pub state: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Set once at creation, never mutated afterwards
    pub created_at: DateTime<Utc>,
    /// Stamped on creation and every mutation; never regresses
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl Employee {
    /// Profile image URL with the default avatar substituted for empty values
    pub fn profile_image_or_default(&self) -> &str {
        if self.profile_image.is_empty() {
            DEFAULT_PROFILE_IMAGE
        } else {
            &self.profile_image
        }
    }
}

/// Create employee payload (id and timestamps are store-assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub profile_image: String,
    pub state: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Update employee payload with partial merge semantics
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: "1".to_string(),
            full_name: "John Doe".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            profile_image: String::new(),
            state: "California".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_wire_layout_is_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("fullName").is_some());
        assert!(value.get("dateOfBirth").is_some());
        assert!(value.get("profileImage").is_some());
        assert!(value.get("isActive").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["gender"], "Male");
        assert_eq!(value["dateOfBirth"], "1990-05-15");
    }

    #[test]
    fn test_is_active_defaults_true() {
        let json = r#"{
            "id": "x",
            "fullName": "Jane Smith",
            "gender": "Female",
            "dateOfBirth": "1988-08-22",
            "state": "New York",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert!(emp.is_active);
        assert!(emp.profile_image.is_empty());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let patch = EmployeeUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["isActive"], false);
    }

    #[test]
    fn test_profile_image_default_substitution() {
        let emp = sample();
        assert_eq!(emp.profile_image_or_default(), DEFAULT_PROFILE_IMAGE);
    }
}
