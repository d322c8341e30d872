//! Income singleton handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState};
use emipilot_core::models::UserIncome;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetIncomeRequest {
    pub monthly_income: Option<f64>,
}

/// GET /api/user/income - Read the income record, creating the
/// zero-income singleton on first access
pub async fn get_income(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserIncome>, AppError> {
    let income = state.db.get_income()?;
    Ok(Json(income))
}

/// POST /api/user/income - Upsert the income record
pub async fn set_income(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetIncomeRequest>,
) -> Result<Json<UserIncome>, AppError> {
    let value = req
        .monthly_income
        .ok_or_else(|| AppError::bad_request("Monthly income must be a positive number"))?;

    let income = state.db.set_income(value)?;
    Ok(Json(income))
}
