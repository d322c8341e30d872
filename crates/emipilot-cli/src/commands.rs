//! Command implementations
//!
//! Each `cmd_*` function backs one CLI subcommand. They open the record
//! store, call into `emipilot-core`, and print a human-readable result.

use std::path::Path;

use anyhow::{Context, Result};
use emipilot_core::db::Database;
use emipilot_core::metrics::{bucket_by_week, compute_stress, generate_insights};
use emipilot_core::models::{Emi, EmiUpdate, NewEmi, Severity, Week};

/// Open the database at the given path
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;

    // First read creates the zero-income singleton
    db.get_income().context("Failed to initialize income record")?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Set your income: emipilot income set 50000");
    println!("  2. Add an EMI: emipilot emis add \"Car Loan\" --amount 12500 --due 7");
    println!("  3. Start web UI: emipilot serve");

    Ok(())
}

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    let db = open_db(db_path)?;
    let static_dir = static_dir.and_then(|p| p.to_str());

    emipilot_server::serve(db, host, port, static_dir).await
}

pub fn cmd_emis_list(db: &Database) -> Result<()> {
    let emis = db.list_emis()?;

    if emis.is_empty() {
        println!("No EMIs recorded. Add one with: emipilot emis add NAME --amount N --due D");
        return Ok(());
    }

    println!("📋 EMIs (by due day)");
    println!("   ──────────────────────────────────────────────");
    for emi in &emis {
        print_emi(emi);
    }

    let total: f64 = emis.iter().map(|e| e.monthly_amount).sum();
    println!("   ──────────────────────────────────────────────");
    println!("   Total monthly burden: {:.2}", total);

    Ok(())
}

fn print_emi(emi: &Emi) {
    let loan_type = emi.loan_type.as_deref().unwrap_or("-");
    let tenure = emi
        .tenure
        .map(|t| format!("{} mo", t))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "   [{}] day {:>2}  {:>12.2}  {:<10} {:>6}  {}",
        emi.id, emi.due_date, emi.monthly_amount, loan_type, tenure, emi.name
    );
}

pub fn cmd_emis_add(
    db: &Database,
    name: &str,
    amount: f64,
    due: u8,
    loan_type: Option<&str>,
    tenure: Option<u32>,
) -> Result<()> {
    let emi = db.create_emi(&NewEmi {
        name: name.to_string(),
        monthly_amount: amount,
        due_date: due,
        loan_type: loan_type.map(String::from),
        tenure,
    })?;

    println!("✅ Added EMI [{}] {} ({:.2}/month, due day {})", emi.id, emi.name, emi.monthly_amount, emi.due_date);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_emis_update(
    db: &Database,
    id: i64,
    name: Option<String>,
    amount: Option<f64>,
    due: Option<u8>,
    loan_type: Option<String>,
    tenure: Option<u32>,
) -> Result<()> {
    let emi = db.update_emi(
        id,
        &EmiUpdate {
            name,
            monthly_amount: amount,
            due_date: due,
            loan_type,
            tenure,
        },
    )?;

    println!("✅ Updated EMI [{}]", emi.id);
    print_emi(&emi);
    Ok(())
}

pub fn cmd_emis_delete(db: &Database, id: i64) -> Result<()> {
    let emi = db.delete_emi(id)?;
    println!("🗑️  Deleted EMI [{}] {}", emi.id, emi.name);
    Ok(())
}

pub fn cmd_income_show(db: &Database) -> Result<()> {
    let income = db.get_income()?;
    println!("💰 Monthly income: {:.2}", income.monthly_income);
    println!("   Last updated: {}", income.updated_at.format("%Y-%m-%d %H:%M"));
    Ok(())
}

pub fn cmd_income_set(db: &Database, amount: f64) -> Result<()> {
    let income = db.set_income(amount)?;
    println!("✅ Monthly income set to {:.2}", income.monthly_income);
    Ok(())
}

pub fn cmd_dashboard(db: &Database) -> Result<()> {
    let emis = db.list_emis()?;
    let income = db.get_income()?;

    let stress = compute_stress(&emis, income.monthly_income);

    println!("📊 EMI Dashboard");
    println!("   ─────────────────────────────");
    println!("   Monthly income:  {:>12.2}", stress.monthly_income);
    println!("   Total EMI:       {:>12.2}", stress.total_emi);
    println!("   Stress:          {:>11.1}%", stress.stress_percentage);
    println!("   Health:          {:>12}", stress.health_status);

    println!();
    println!("🗓️  Due-day timeline");
    for (bucket, week) in bucket_by_week(&emis).iter().zip(Week::ALL) {
        let range = week.day_range();
        println!("   Week {} (days {}-{}):", week.number(), range.start(), range.end());
        if bucket.is_empty() {
            println!("      (none)");
        }
        for emi in bucket {
            println!("      day {:>2}  {:>12.2}  {}", emi.due_date, emi.monthly_amount, emi.name);
        }
    }

    let insights = generate_insights(&emis, income.monthly_income);
    println!();
    if insights.is_empty() {
        println!("✅ No insights. Add EMIs and set your income to see analysis.");
    } else {
        println!("💡 Insights");
        for insight in &insights {
            let icon = match insight.severity {
                Severity::Danger => "🚨",
                Severity::Warning => "⚠️ ",
                Severity::Info => "ℹ️ ",
            };
            println!("   {} {}", icon, insight.title);
            println!("      {}", insight.message);
        }
    }

    Ok(())
}
