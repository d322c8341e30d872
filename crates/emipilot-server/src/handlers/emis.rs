//! EMI CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use emipilot_core::models::{Emi, EmiSummary, EmiUpdate, NewEmi};

/// Create request with every field optional so missing required fields
/// produce a 400 with a message instead of a body-rejection error
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmiRequest {
    pub name: Option<String>,
    pub monthly_amount: Option<f64>,
    pub due_date: Option<u8>,
    pub loan_type: Option<String>,
    pub tenure: Option<u32>,
}

/// GET /api/emis - List all EMIs, due day ascending
pub async fn list_emis(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Emi>>, AppError> {
    let emis = state.db.list_emis()?;
    Ok(Json(emis))
}

/// GET /api/emis/:id - Fetch a single EMI
pub async fn get_emi(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Emi>, AppError> {
    let emi = state
        .db
        .get_emi(id)?
        .ok_or_else(|| AppError::not_found("EMI not found"))?;
    Ok(Json(emi))
}

/// POST /api/emis - Create a new EMI
pub async fn create_emi(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEmiRequest>,
) -> Result<(StatusCode, Json<Emi>), AppError> {
    let (name, monthly_amount, due_date) = match (req.name, req.monthly_amount, req.due_date) {
        (Some(name), Some(amount), Some(due)) => (name, amount, due),
        _ => {
            return Err(AppError::bad_request(
                "Name, monthlyAmount, and dueDate are required",
            ))
        }
    };

    let emi = state.db.create_emi(&NewEmi {
        name,
        monthly_amount,
        due_date,
        loan_type: req.loan_type,
        tenure: req.tenure,
    })?;

    Ok((StatusCode::CREATED, Json(emi)))
}

/// PUT /api/emis/:id - Partial update; validates only the fields present
pub async fn update_emi(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<EmiUpdate>,
) -> Result<Json<Emi>, AppError> {
    let emi = state.db.update_emi(id, &update)?;
    Ok(Json(emi))
}

/// Response for deleting an EMI
#[derive(Serialize)]
pub struct DeleteEmiResponse {
    pub message: String,
    pub emi: Emi,
}

/// DELETE /api/emis/:id - Delete an EMI, returning the deleted record
pub async fn delete_emi(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteEmiResponse>, AppError> {
    let emi = state.db.delete_emi(id)?;
    Ok(Json(DeleteEmiResponse {
        message: "EMI deleted successfully".to_string(),
        emi,
    }))
}

/// GET /api/emis/summary/all - Total burden, count, and the full list
pub async fn emi_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmiSummary>, AppError> {
    let summary = state.db.emi_summary()?;
    Ok(Json(summary))
}
