//! Record store tests

use super::*;
use crate::error::Error;
use crate::models::{EmiUpdate, NewEmi};

fn new_emi(name: &str, amount: f64, due_date: u8) -> NewEmi {
    NewEmi {
        name: name.to_string(),
        monthly_amount: amount,
        due_date,
        loan_type: None,
        tenure: None,
    }
}

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    let emis = db.list_emis().unwrap();
    assert!(emis.is_empty());
}

#[test]
fn test_create_and_get_roundtrip() {
    let db = Database::in_memory().unwrap();

    let created = db
        .create_emi(&NewEmi {
            name: "Car Loan".to_string(),
            monthly_amount: 12500.0,
            due_date: 7,
            loan_type: Some("auto".to_string()),
            tenure: Some(36),
        })
        .unwrap();
    assert!(created.id > 0);

    let fetched = db.get_emi(created.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Car Loan");
    assert_eq!(fetched.monthly_amount, 12500.0);
    assert_eq!(fetched.due_date, 7);
    assert_eq!(fetched.loan_type.as_deref(), Some("auto"));
    assert_eq!(fetched.tenure, Some(36));
}

#[test]
fn test_list_sorted_by_due_date() {
    let db = Database::in_memory().unwrap();
    db.create_emi(&new_emi("Late", 100.0, 25)).unwrap();
    db.create_emi(&new_emi("Early", 100.0, 2)).unwrap();
    db.create_emi(&new_emi("Mid", 100.0, 14)).unwrap();

    let emis = db.list_emis().unwrap();
    let due_days: Vec<u8> = emis.iter().map(|e| e.due_date).collect();
    assert_eq!(due_days, vec![2, 14, 25]);
}

#[test]
fn test_create_rejects_invalid_input() {
    let db = Database::in_memory().unwrap();

    assert!(matches!(
        db.create_emi(&new_emi("  ", 100.0, 5)),
        Err(Error::InvalidData(_))
    ));
    assert!(matches!(
        db.create_emi(&new_emi("Loan", 0.0, 5)),
        Err(Error::InvalidData(_))
    ));
    assert!(matches!(
        db.create_emi(&new_emi("Loan", -50.0, 5)),
        Err(Error::InvalidData(_))
    ));
    assert!(matches!(
        db.create_emi(&new_emi("Loan", 100.0, 0)),
        Err(Error::InvalidData(_))
    ));
    assert!(matches!(
        db.create_emi(&new_emi("Loan", 100.0, 32)),
        Err(Error::InvalidData(_))
    ));

    // Nothing should have been stored
    assert!(db.list_emis().unwrap().is_empty());
}

#[test]
fn test_partial_update() {
    let db = Database::in_memory().unwrap();
    let created = db.create_emi(&new_emi("Home Loan", 30000.0, 10)).unwrap();

    let updated = db
        .update_emi(
            created.id,
            &EmiUpdate {
                monthly_amount: Some(28000.0),
                ..Default::default()
            },
        )
        .unwrap();

    // Only the amount changed
    assert_eq!(updated.monthly_amount, 28000.0);
    assert_eq!(updated.name, "Home Loan");
    assert_eq!(updated.due_date, 10);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn test_update_validates_present_fields_only() {
    let db = Database::in_memory().unwrap();
    let created = db.create_emi(&new_emi("Loan", 100.0, 5)).unwrap();

    let result = db.update_emi(
        created.id,
        &EmiUpdate {
            due_date: Some(40),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(Error::InvalidData(_))));

    // Record untouched after the rejected update
    let fetched = db.get_emi(created.id).unwrap().unwrap();
    assert_eq!(fetched.due_date, 5);
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let db = Database::in_memory().unwrap();
    let result = db.update_emi(
        9999,
        &EmiUpdate {
            name: Some("Ghost".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_get_unknown_id_is_none() {
    let db = Database::in_memory().unwrap();
    assert!(db.get_emi(9999).unwrap().is_none());
}

#[test]
fn test_get_propagates_store_failure() {
    let db = Database::in_memory().unwrap();
    let created = db.create_emi(&new_emi("Loan", 100.0, 5)).unwrap();

    // A broken store must surface as a Database error, never as absence
    db.conn()
        .unwrap()
        .execute_batch("DROP TABLE emis")
        .unwrap();
    assert!(matches!(
        db.get_emi(created.id),
        Err(Error::Database(_))
    ));
}

#[test]
fn test_delete_returns_record() {
    let db = Database::in_memory().unwrap();
    let created = db.create_emi(&new_emi("Gone", 500.0, 15)).unwrap();

    let deleted = db.delete_emi(created.id).unwrap();
    assert_eq!(deleted.name, "Gone");
    assert!(db.get_emi(created.id).unwrap().is_none());

    assert!(matches!(
        db.delete_emi(created.id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_on_disk_db_persists_across_opens() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("emipilot.db");
    let path_str = path.to_str().unwrap();

    {
        let db = Database::new(path_str).unwrap();
        db.create_emi(&new_emi("Persisted", 100.0, 5)).unwrap();
    }

    let db = Database::new(path_str).unwrap();
    assert_eq!(db.path(), path_str);
    assert_eq!(db.list_emis().unwrap().len(), 1);
}

#[test]
fn test_income_lazy_singleton() {
    let db = Database::in_memory().unwrap();

    // First read creates the zero-income row
    let income = db.get_income().unwrap();
    assert_eq!(income.monthly_income, 0.0);

    let income = db.set_income(65000.0).unwrap();
    assert_eq!(income.monthly_income, 65000.0);

    // Writes upsert in place; still a single row
    db.set_income(70000.0).unwrap();
    let conn = db.conn().unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM user_income", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_income_rejects_negative() {
    let db = Database::in_memory().unwrap();
    assert!(matches!(
        db.set_income(-1.0),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn test_emi_summary() {
    let db = Database::in_memory().unwrap();
    db.create_emi(&new_emi("A", 20000.0, 5)).unwrap();
    db.create_emi(&new_emi("B", 15000.0, 5)).unwrap();

    let summary = db.emi_summary().unwrap();
    assert_eq!(summary.total_emi, 35000.0);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.emis.len(), 2);
}
