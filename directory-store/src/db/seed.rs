//! Example dataset persisted into a fresh store
//!
//! Seeding is explicit: the repository runs it once at construction when
//! `employees_data` has never been written, so a fresh deployment is never
//! empty. A present key, including an explicitly emptied collection, is
//! left verbatim.

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{Employee, Gender};

/// The seven example records shipped with the dashboard
pub(crate) fn example_employees(now: DateTime<Utc>) -> Vec<Employee> {
    let entry = |id: &str,
                 full_name: &str,
                 gender: Gender,
                 dob: (i32, u32, u32),
                 img: u32,
                 state: &str,
                 is_active: bool| {
        Employee {
            id: id.to_string(),
            full_name: full_name.to_string(),
            gender,
            // all fixture dates are valid calendar dates
            date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
            profile_image: format!("https://i.pravatar.cc/150?img={img}"),
            state: state.to_string(),
            is_active,
            created_at: now,
            updated_at: now,
        }
    };

    vec![
        entry("1", "John Doe", Gender::Male, (1990, 5, 15), 12, "California", true),
        entry("2", "Jane Smith", Gender::Female, (1988, 8, 22), 5, "New York", true),
        entry("3", "Michael Johnson", Gender::Male, (1992, 3, 10), 33, "Texas", false),
        entry("4", "Sarah Williams", Gender::Female, (1995, 11, 30), 9, "Florida", true),
        entry("5", "David Brown", Gender::Male, (1987, 7, 18), 51, "Illinois", true),
        entry("6", "Emily Davis", Gender::Female, (1993, 9, 25), 20, "Washington", false),
        entry("7", "Alex Martinez", Gender::Other, (1991, 12, 5), 68, "Colorado", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let now = Utc::now();
        let seed = example_employees(now);

        assert_eq!(seed.len(), 7);
        assert!(seed.iter().all(|e| e.created_at == now && e.updated_at == now));

        // ids are pairwise distinct
        let mut ids: Vec<&str> = seed.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);

        // the dashboard's summary counts for the fixture
        assert_eq!(seed.iter().filter(|e| e.is_active).count(), 5);
    }
}
