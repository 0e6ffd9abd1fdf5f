//! Fixed option lists used by the dashboard forms
//!
//! The store itself never enforces these; validation happens at the
//! consumer boundary (see `directory-store`'s validation helpers).

/// Avatar substituted when a record carries an empty `profileImage`
pub const DEFAULT_PROFILE_IMAGE: &str = "https://i.pravatar.cc/150?img=1";

/// US states accepted by the employee form's state selector
pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// True if `state` is one of the fixed [`US_STATES`] options
pub fn is_known_state(state: &str) -> bool {
    US_STATES.contains(&state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_state_lookup() {
        assert!(is_known_state("Texas"));
        assert!(is_known_state("New York"));
        assert!(!is_known_state("texas"));
        assert!(!is_known_state("Atlantis"));
    }
}
