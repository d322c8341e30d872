//! Singleton income record operations
//!
//! The income record is an explicit store entity pinned to row id 1,
//! lazily created with zero income on first read. Writes upsert in place
//! and refresh `updated_at`; there is never more than one row.

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::UserIncome;

impl Database {
    /// Read the income record, creating the zero-income singleton if absent
    pub fn get_income(&self) -> Result<UserIncome> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT OR IGNORE INTO user_income (id, monthly_income) VALUES (1, 0)",
            [],
        )?;

        let income = conn.query_row(
            "SELECT monthly_income, updated_at FROM user_income WHERE id = 1",
            [],
            |row| {
                let updated_at_str: String = row.get(1)?;
                Ok(UserIncome {
                    monthly_income: row.get(0)?,
                    updated_at: parse_datetime(&updated_at_str),
                })
            },
        )?;

        Ok(income)
    }

    /// Upsert the income record. Rejects negative values.
    pub fn set_income(&self, monthly_income: f64) -> Result<UserIncome> {
        if monthly_income < 0.0 {
            return Err(Error::InvalidData(
                "Monthly income must be a positive number".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO user_income (id, monthly_income, updated_at)
             VALUES (1, ?, CURRENT_TIMESTAMP)
             ON CONFLICT(id) DO UPDATE SET
                 monthly_income = excluded.monthly_income,
                 updated_at = CURRENT_TIMESTAMP",
            params![monthly_income],
        )?;
        drop(conn);

        self.get_income()
    }
}
