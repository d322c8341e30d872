//! Derived-metrics engine
//!
//! Pure functions over the current EMI list and income value:
//! - stress ratio and three-tier health classification
//! - calendar-week bucketing of due days
//! - ordered rule-based insight generation
//!
//! Everything here is deterministic and total: zero income and empty
//! lists are handled by explicit guards, never by errors.

use crate::models::{Emi, EmiStressData, HealthStatus, Insight, Severity, Week};

/// Compute the total burden, stress percentage, and health classification.
///
/// The stress percentage is total EMI over income times 100; when income
/// is zero the percentage is zero (guarded, no division).
pub fn compute_stress(emis: &[Emi], monthly_income: f64) -> EmiStressData {
    let total_emi: f64 = emis.iter().map(|e| e.monthly_amount).sum();
    let stress_percentage = if monthly_income > 0.0 {
        (total_emi / monthly_income) * 100.0
    } else {
        0.0
    };

    EmiStressData {
        total_emi,
        monthly_income,
        stress_percentage,
        health_status: HealthStatus::from_stress(stress_percentage),
    }
}

/// Partition EMIs into the four fixed week buckets by due day.
///
/// Buckets cover days 1-7, 8-14, 15-21, and 22-31. Every EMI lands in
/// exactly one bucket, in input order. Sorting by due day is a display
/// concern and happens outside the engine.
pub fn bucket_by_week(emis: &[Emi]) -> [Vec<&Emi>; 4] {
    let mut buckets: [Vec<&Emi>; 4] = Default::default();
    for emi in emis {
        let week = Week::of_day(emi.due_date);
        buckets[(week.number() - 1) as usize].push(emi);
    }
    buckets
}

/// Generate the ordered insight list.
///
/// Rules run in a fixed order and are independent of each other; several
/// may fire at once and none are deduplicated:
/// 1. stress tier (at most one of danger/warning/info)
/// 2. cashflow congestion (buckets holding more than one EMI)
/// 3. early-month risk (due on days 2-5; day 1 is salary day, exempt)
/// 4. multiple active EMIs (more than three)
pub fn generate_insights(emis: &[Emi], monthly_income: f64) -> Vec<Insight> {
    let mut insights = Vec::new();
    let stress = compute_stress(emis, monthly_income);

    if stress.stress_percentage > 50.0 {
        insights.push(Insight {
            severity: Severity::Danger,
            title: "High Financial Stress Detected".to_string(),
            message: format!(
                "Your EMIs consume {:.1}% of your monthly income. \
                 Consider restructuring or consolidating your loans.",
                stress.stress_percentage
            ),
        });
    } else if stress.stress_percentage >= 30.0 {
        insights.push(Insight {
            severity: Severity::Warning,
            title: "Moderate Financial Stress".to_string(),
            message: format!(
                "Your EMIs take up {:.1}% of your income. Keep an eye on your spending.",
                stress.stress_percentage
            ),
        });
    } else if !emis.is_empty() {
        insights.push(Insight {
            severity: Severity::Info,
            title: "Healthy Financial Status".to_string(),
            message: format!(
                "Great job! Your EMI burden is only {:.1}% of your income.",
                stress.stress_percentage
            ),
        });
    }

    let congested: Vec<String> = bucket_by_week(emis)
        .iter()
        .zip(Week::ALL)
        .filter(|(bucket, _)| bucket.len() > 1)
        .map(|(_, week)| week.number().to_string())
        .collect();

    if !congested.is_empty() {
        insights.push(Insight {
            severity: Severity::Warning,
            title: "Cashflow Congestion Risk".to_string(),
            message: format!(
                "Multiple EMIs are due in week(s) {} of the month. \
                 Plan your budget accordingly.",
                congested.join(", ")
            ),
        });
    }

    // Day 1 is assumed to coincide with salary credit and is exempt.
    let early_month = emis
        .iter()
        .filter(|e| e.due_date <= 5 && e.due_date != 1)
        .count();

    if early_month > 0 {
        insights.push(Insight {
            severity: Severity::Warning,
            title: "Early-Month Payment Risk".to_string(),
            message: format!(
                "{} EMI(s) are due in the first week. \
                 Ensure you have sufficient balance from the previous month.",
                early_month
            ),
        });
    }

    if emis.len() > 3 {
        insights.push(Insight {
            severity: Severity::Info,
            title: "Multiple Active EMIs".to_string(),
            message: format!(
                "You have {} active EMIs. Consider loan consolidation to simplify management.",
                emis.len()
            ),
        });
    }

    insights
}
