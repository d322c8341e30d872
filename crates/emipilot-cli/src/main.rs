//! EMI Pilot CLI - Personal EMI and income tracker
//!
//! Usage:
//!   emipilot init                 Initialize database
//!   emipilot emis add NAME -a 12500 -d 7
//!   emipilot income set 50000
//!   emipilot dashboard            Burden summary and insights
//!   emipilot serve --port 4000    Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&cli.db, &host, port, static_dir.as_deref()).await,
        Commands::Emis { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(EmisAction::List) => commands::cmd_emis_list(&db),
                Some(EmisAction::Add {
                    name,
                    amount,
                    due,
                    loan_type,
                    tenure,
                }) => commands::cmd_emis_add(&db, &name, amount, due, loan_type.as_deref(), tenure),
                Some(EmisAction::Update {
                    id,
                    name,
                    amount,
                    due,
                    loan_type,
                    tenure,
                }) => commands::cmd_emis_update(&db, id, name, amount, due, loan_type, tenure),
                Some(EmisAction::Delete { id }) => commands::cmd_emis_delete(&db, id),
            }
        }
        Commands::Income { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(IncomeAction::Show) => commands::cmd_income_show(&db),
                Some(IncomeAction::Set { amount }) => commands::cmd_income_set(&db, amount),
            }
        }
        Commands::Dashboard => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_dashboard(&db)
        }
    }
}
