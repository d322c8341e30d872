//! Domain models for EMI Pilot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recurring loan installment (Equated Monthly Installment)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emi {
    pub id: i64,
    pub name: String,
    /// Amount charged every month, in currency units. Always > 0.
    pub monthly_amount: f64,
    /// Day of month the installment falls due (1-31)
    pub due_date: u8,
    pub loan_type: Option<String>,
    /// Months remaining on the loan, if known
    pub tenure: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new EMI
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmi {
    pub name: String,
    pub monthly_amount: f64,
    pub due_date: u8,
    #[serde(default)]
    pub loan_type: Option<String>,
    #[serde(default)]
    pub tenure: Option<u32>,
}

/// Partial update for an EMI. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiUpdate {
    pub name: Option<String>,
    pub monthly_amount: Option<f64>,
    pub due_date: Option<u8>,
    pub loan_type: Option<String>,
    pub tenure: Option<u32>,
}

/// The single user's income record. At most one instance exists;
/// it is lazily created with zero income on first read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIncome {
    pub monthly_income: f64,
    pub updated_at: DateTime<Utc>,
}

/// Three-tier classification of the stress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Healthy,
    Warning,
    HighRisk,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::HighRisk => "high-risk",
        }
    }

    /// Classify a stress percentage. Exactly 30.0 and exactly 50.0 are
    /// both Warning (inclusive lower bound, exclusive upper bound).
    pub fn from_stress(stress_percentage: f64) -> Self {
        if stress_percentage > 50.0 {
            Self::HighRisk
        } else if stress_percentage >= 30.0 {
            Self::Warning
        } else {
            Self::Healthy
        }
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Self::Healthy),
            "warning" => Ok(Self::Warning),
            "high-risk" => Ok(Self::HighRisk),
            _ => Err(format!("Unknown health status: {}", s)),
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule-based textual finding. Computed fresh on every request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Severity, named `type` on the wire
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// Snapshot of the derived burden metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiStressData {
    #[serde(rename = "totalEMI")]
    pub total_emi: f64,
    pub monthly_income: f64,
    pub stress_percentage: f64,
    pub health_status: HealthStatus,
}

/// Fixed calendar-week partition of the month by due day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Week {
    Week1,
    Week2,
    Week3,
    Week4,
}

impl Week {
    pub const ALL: [Week; 4] = [Week::Week1, Week::Week2, Week::Week3, Week::Week4];

    /// Week number 1-4
    pub fn number(&self) -> u8 {
        match self {
            Self::Week1 => 1,
            Self::Week2 => 2,
            Self::Week3 => 3,
            Self::Week4 => 4,
        }
    }

    /// Day-of-month range covered by this week. Week 4 absorbs days 29-31.
    pub fn day_range(&self) -> std::ops::RangeInclusive<u8> {
        match self {
            Self::Week1 => 1..=7,
            Self::Week2 => 8..=14,
            Self::Week3 => 15..=21,
            Self::Week4 => 22..=31,
        }
    }

    /// Which week a due day falls into
    pub fn of_day(day: u8) -> Self {
        match day {
            1..=7 => Self::Week1,
            8..=14 => Self::Week2,
            15..=21 => Self::Week3,
            _ => Self::Week4,
        }
    }
}

impl std::fmt::Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "week {}", self.number())
    }
}

/// Aggregate returned by the summary endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiSummary {
    #[serde(rename = "totalEMI")]
    pub total_emi: f64,
    pub count: usize,
    pub emis: Vec<Emi>,
}
