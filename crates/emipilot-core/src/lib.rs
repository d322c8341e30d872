//! EMI Pilot Core Library
//!
//! Shared functionality for the EMI Pilot personal finance tracker:
//! - Record store (pooled SQLite) for EMIs and the income singleton
//! - Derived-metrics engine: stress ratio, health classification,
//!   week bucketing, and insight generation

pub mod db;
pub mod error;
pub mod metrics;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use metrics::{bucket_by_week, compute_stress, generate_insights};
pub use models::{
    Emi, EmiStressData, EmiSummary, EmiUpdate, HealthStatus, Insight, NewEmi, Severity,
    UserIncome, Week,
};
