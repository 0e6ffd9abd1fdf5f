//! Directory Demo - drive the data layer the way the dashboard does
//!
//! Login, list with summary counts, filter, create, deactivate, logout.
//!
//! Run: cargo run -p directory-store --example directory_demo

use chrono::NaiveDate;
use directory_store::{filter_employees, summarize, AppState, Repository, StoreConfig};
use directory_store::utils::validate_employee_create;
use shared::models::{EmployeeCreate, EmployeeUpdate, Gender, LoginRequest};
use shared::query::EmployeeFilters;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    directory_store::init_logger();

    // Use a temp directory so repeated runs start fresh-ish
    let data_dir = std::env::temp_dir().join("directory-demo");
    std::fs::create_dir_all(&data_dir)?;

    let config = StoreConfig::with_overrides(data_dir.to_string_lossy());
    let state = AppState::initialize(&config)?;

    // === 1. Login ===
    let credentials = LoginRequest {
        username: "admin".to_string(),
        password: "admin123".to_string(),
    };
    let user = state
        .sessions
        .login(&credentials.username, &credentials.password)?;
    println!("Logged in as {} ({})", user.name, user.username);
    assert!(state.sessions.is_authenticated()?);

    // === 2. List + summary ===
    let employees = state.employees.find_all()?;
    let summary = summarize(&employees);
    println!(
        "Directory: {} total / {} active / {} inactive",
        summary.total, summary.active, summary.inactive
    );

    // === 3. Filter ===
    let filters = EmployeeFilters::none().with_search("jo");
    for e in filter_employees(&employees, &filters) {
        println!(
            "  match: {} ({}, {}) [{}]",
            e.full_name,
            e.gender,
            e.state,
            if e.is_active { "Active" } else { "Inactive" }
        );
    }

    // === 4. Validate + create ===
    let payload = EmployeeCreate {
        full_name: "Test User".to_string(),
        gender: Gender::Other,
        date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
        profile_image: String::new(),
        state: "Texas".to_string(),
        is_active: true,
    };
    validate_employee_create(&payload)?;
    let created = state.employees.create(payload)?;
    println!("Created {} ({})", created.full_name, created.id);

    // === 5. Deactivate ===
    let updated = state.employees.update(
        &created.id,
        EmployeeUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )?;
    println!("Deactivated {} ({})", updated.full_name, updated.id);

    // === 6. Logout ===
    state.sessions.logout()?;
    assert!(!state.sessions.is_authenticated()?);
    println!("Logged out");

    Ok(())
}
