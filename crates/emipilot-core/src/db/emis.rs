//! EMI operations
//!
//! Validation lives here: the store contract rejects bad input before it
//! reaches disk, so every stored record satisfies the model invariants.

use rusqlite::{params, OptionalExtension, Row};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Emi, EmiSummary, EmiUpdate, NewEmi};

const EMI_COLUMNS: &str = "id, name, monthly_amount, due_date, loan_type, tenure, created_at";

fn emi_from_row(row: &Row<'_>) -> rusqlite::Result<Emi> {
    let created_at_str: String = row.get(6)?;

    Ok(Emi {
        id: row.get(0)?,
        name: row.get(1)?,
        monthly_amount: row.get(2)?,
        due_date: row.get(3)?,
        loan_type: row.get(4)?,
        tenure: row.get(5)?,
        created_at: parse_datetime(&created_at_str),
    })
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount <= 0.0 {
        return Err(Error::InvalidData(
            "Monthly amount must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_due_date(due_date: u8) -> Result<()> {
    if !(1..=31).contains(&due_date) {
        return Err(Error::InvalidData(
            "Due date must be between 1 and 31".to_string(),
        ));
    }
    Ok(())
}

fn validate_tenure(tenure: u32) -> Result<()> {
    if tenure < 1 {
        return Err(Error::InvalidData(
            "Tenure must be at least 1 month".to_string(),
        ));
    }
    Ok(())
}

impl Database {
    /// List all EMIs, sorted by due day ascending
    pub fn list_emis(&self) -> Result<Vec<Emi>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM emis ORDER BY due_date ASC, id ASC",
            EMI_COLUMNS
        ))?;

        let emis = stmt
            .query_map([], emi_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(emis)
    }

    /// Get an EMI by ID
    pub fn get_emi(&self, id: i64) -> Result<Option<Emi>> {
        let conn = self.conn()?;
        let emi = conn
            .query_row(
                &format!("SELECT {} FROM emis WHERE id = ?", EMI_COLUMNS),
                params![id],
                emi_from_row,
            )
            .optional()?;

        Ok(emi)
    }

    /// Create an EMI and return the stored record
    pub fn create_emi(&self, new: &NewEmi) -> Result<Emi> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidData(
                "Name, monthlyAmount, and dueDate are required".to_string(),
            ));
        }
        validate_amount(new.monthly_amount)?;
        validate_due_date(new.due_date)?;
        if let Some(tenure) = new.tenure {
            validate_tenure(tenure)?;
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO emis (name, monthly_amount, due_date, loan_type, tenure)
             VALUES (?, ?, ?, ?, ?)",
            params![
                name,
                new.monthly_amount,
                new.due_date,
                new.loan_type.as_deref().map(str::trim),
                new.tenure
            ],
        )?;
        let id = conn.last_insert_rowid();
        drop(conn);

        self.get_emi(id)?
            .ok_or_else(|| Error::NotFound(format!("EMI {} not found after insert", id)))
    }

    /// Partially update an EMI. Only fields present in `update` are
    /// validated and replaced; absent fields keep their stored values.
    pub fn update_emi(&self, id: i64, update: &EmiUpdate) -> Result<Emi> {
        if let Some(amount) = update.monthly_amount {
            validate_amount(amount)?;
        }
        if let Some(due_date) = update.due_date {
            validate_due_date(due_date)?;
        }
        if let Some(tenure) = update.tenure {
            validate_tenure(tenure)?;
        }
        if let Some(ref name) = update.name {
            if name.trim().is_empty() {
                return Err(Error::InvalidData("Name must not be empty".to_string()));
            }
        }

        let existing = self
            .get_emi(id)?
            .ok_or_else(|| Error::NotFound("EMI not found".to_string()))?;

        let conn = self.conn()?;
        conn.execute(
            "UPDATE emis SET name = ?, monthly_amount = ?, due_date = ?, loan_type = ?, tenure = ?
             WHERE id = ?",
            params![
                update
                    .name
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or(&existing.name),
                update.monthly_amount.unwrap_or(existing.monthly_amount),
                update.due_date.unwrap_or(existing.due_date),
                update
                    .loan_type
                    .as_deref()
                    .map(str::trim)
                    .or(existing.loan_type.as_deref()),
                update.tenure.or(existing.tenure),
                id
            ],
        )?;
        drop(conn);

        self.get_emi(id)?
            .ok_or_else(|| Error::NotFound("EMI not found".to_string()))
    }

    /// Delete an EMI and return the deleted record
    pub fn delete_emi(&self, id: i64) -> Result<Emi> {
        let existing = self
            .get_emi(id)?
            .ok_or_else(|| Error::NotFound("EMI not found".to_string()))?;

        let conn = self.conn()?;
        conn.execute("DELETE FROM emis WHERE id = ?", params![id])?;

        Ok(existing)
    }

    /// Total burden, count, and the full list in one call
    pub fn emi_summary(&self) -> Result<EmiSummary> {
        let emis = self.list_emis()?;
        let total_emi = emis.iter().map(|e| e.monthly_amount).sum();

        Ok(EmiSummary {
            total_emi,
            count: emis.len(),
            emis,
        })
    }
}
