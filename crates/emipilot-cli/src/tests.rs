//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use emipilot_core::db::Database;

use crate::commands;

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

// ========== Init ==========

#[test]
fn test_cmd_init_creates_database() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("emipilot.db");

    let result = commands::cmd_init(&path);
    assert!(result.is_ok());
    assert!(path.exists());

    // Init also creates the zero-income singleton
    let db = commands::open_db(&path).unwrap();
    assert_eq!(db.get_income().unwrap().monthly_income, 0.0);
}

// ========== EMIs ==========

#[test]
fn test_cmd_emis_add_and_list() {
    let db = setup_test_db();

    let result = commands::cmd_emis_add(&db, "Car Loan", 12500.0, 7, Some("auto"), Some(36));
    assert!(result.is_ok());

    let emis = db.list_emis().unwrap();
    assert_eq!(emis.len(), 1);
    assert_eq!(emis[0].name, "Car Loan");
    assert_eq!(emis[0].loan_type.as_deref(), Some("auto"));

    assert!(commands::cmd_emis_list(&db).is_ok());
}

#[test]
fn test_cmd_emis_add_rejects_bad_due_day() {
    let db = setup_test_db();
    let result = commands::cmd_emis_add(&db, "Bad", 100.0, 32, None, None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_emis_update_and_delete() {
    let db = setup_test_db();
    commands::cmd_emis_add(&db, "Loan", 100.0, 5, None, None).unwrap();
    let id = db.list_emis().unwrap()[0].id;

    let result = commands::cmd_emis_update(&db, id, None, Some(250.0), None, None, None);
    assert!(result.is_ok());
    assert_eq!(db.get_emi(id).unwrap().unwrap().monthly_amount, 250.0);

    let result = commands::cmd_emis_delete(&db, id);
    assert!(result.is_ok());
    assert!(db.get_emi(id).unwrap().is_none());

    // Deleting again reports not-found
    assert!(commands::cmd_emis_delete(&db, id).is_err());
}

// ========== Income ==========

#[test]
fn test_cmd_income_set_and_show() {
    let db = setup_test_db();

    assert!(commands::cmd_income_set(&db, 50000.0).is_ok());
    assert_eq!(db.get_income().unwrap().monthly_income, 50000.0);

    assert!(commands::cmd_income_show(&db).is_ok());
}

#[test]
fn test_cmd_income_set_rejects_negative() {
    let db = setup_test_db();
    assert!(commands::cmd_income_set(&db, -1.0).is_err());
}

// ========== Dashboard ==========

#[test]
fn test_cmd_dashboard_runs_on_empty_and_populated_db() {
    let db = setup_test_db();
    assert!(commands::cmd_dashboard(&db).is_ok());

    commands::cmd_income_set(&db, 50000.0).unwrap();
    commands::cmd_emis_add(&db, "A", 20000.0, 5, None, None).unwrap();
    commands::cmd_emis_add(&db, "B", 15000.0, 5, None, None).unwrap();
    assert!(commands::cmd_dashboard(&db).is_ok());
}
