//! Derived-metrics handlers
//!
//! Server-side rendering of the metrics engine for clients that don't
//! compute locally. Each handler fetches the current records and runs the
//! pure engine over them; nothing here is persisted.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};
use emipilot_core::metrics::{bucket_by_week, compute_stress, generate_insights};
use emipilot_core::models::{Emi, EmiStressData, Insight, Week};

/// GET /api/stress - Current stress snapshot
pub async fn get_stress(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmiStressData>, AppError> {
    let emis = state.db.list_emis()?;
    let income = state.db.get_income()?;
    Ok(Json(compute_stress(&emis, income.monthly_income)))
}

/// GET /api/insights - Rule-based insights over the current records
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Insight>>, AppError> {
    let emis = state.db.list_emis()?;
    let income = state.db.get_income()?;
    Ok(Json(generate_insights(&emis, income.monthly_income)))
}

/// One calendar-week bucket of the timeline
#[derive(Serialize)]
pub struct TimelineWeek {
    pub week: u8,
    pub range: String,
    pub emis: Vec<Emi>,
}

/// GET /api/timeline - EMIs grouped into the four fixed week buckets
pub async fn get_timeline(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TimelineWeek>>, AppError> {
    let emis = state.db.list_emis()?;

    let timeline = bucket_by_week(&emis)
        .iter()
        .zip(Week::ALL)
        .map(|(bucket, week)| {
            let range = week.day_range();
            TimelineWeek {
                week: week.number(),
                range: format!("{}-{}", range.start(), range.end()),
                emis: bucket.iter().map(|e| (*e).clone()).collect(),
            }
        })
        .collect();

    Ok(Json(timeline))
}
